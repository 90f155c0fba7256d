//! Finance flow: session-scoped expense and earning logging.
//!
//! Entries live only for the current interaction; there is no ledger
//! persistence. Validation mirrors the entry form, which keeps save
//! disabled until an amount and a category/source are filled in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Direction of a finance entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Expense,
    Earning,
}

impl EntryKind {
    /// Display glyph used in summaries.
    pub fn glyph(&self) -> &'static str {
        match self {
            EntryKind::Expense => "➖",
            EntryKind::Earning => "➕",
        }
    }
}

/// A single logged expense or earning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinanceEntry {
    pub id: Uuid,
    pub kind: EntryKind,
    pub amount: f64,
    /// Category for expenses (e.g. Food, Transport), source for earnings
    /// (e.g. Freelance, Gifts)
    pub label: String,
    pub notes: Option<String>,
    pub logged_at: DateTime<Utc>,
}

impl FinanceEntry {
    /// Create an expense entry stamped with the current time.
    pub fn expense(amount: f64, category: impl Into<String>) -> Self {
        Self::new(EntryKind::Expense, amount, category)
    }

    /// Create an earning entry stamped with the current time.
    pub fn earning(amount: f64, source: impl Into<String>) -> Self {
        Self::new(EntryKind::Earning, amount, source)
    }

    fn new(kind: EntryKind, amount: f64, label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            label: label.into(),
            notes: None,
            logged_at: Utc::now(),
        }
    }

    /// Attach optional notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Check the entry is saveable: positive finite amount, non-blank label.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(ValidationError::InvalidValue {
                field: "amount".to_string(),
                message: format!("expected a positive amount, got {}", self.amount),
            });
        }
        if self.label.trim().is_empty() {
            let field = match self.kind {
                EntryKind::Expense => "category",
                EntryKind::Earning => "source",
            };
            return Err(ValidationError::InvalidValue {
                field: field.to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// In-memory ledger for one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinanceLog {
    entries: Vec<FinanceEntry>,
}

impl FinanceLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append an entry.
    pub fn add(&mut self, entry: FinanceEntry) -> Result<(), ValidationError> {
        entry.validate()?;
        self.entries.push(entry);
        Ok(())
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[FinanceEntry] {
        &self.entries
    }

    /// Sum of expense amounts.
    pub fn total_expenses(&self) -> f64 {
        self.total_for(EntryKind::Expense)
    }

    /// Sum of earning amounts.
    pub fn total_earnings(&self) -> f64 {
        self.total_for(EntryKind::Earning)
    }

    /// Earnings minus expenses.
    pub fn net_balance(&self) -> f64 {
        self.total_earnings() - self.total_expenses()
    }

    fn total_for(&self, kind: EntryKind) -> f64 {
        self.entries
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.amount)
            .sum()
    }

    /// Render a plain-text summary of the log.
    pub fn summary(&self) -> String {
        let mut lines: Vec<String> = Vec::new();
        lines.push("💰 Finance Summary".to_string());

        for entry in &self.entries {
            let notes = entry
                .notes
                .as_deref()
                .map(|n| format!(" ({n})"))
                .unwrap_or_default();
            lines.push(format!(
                "{} {} {:.2}{}",
                entry.kind.glyph(),
                entry.label,
                entry.amount,
                notes
            ));
        }

        lines.push(format!("Earnings: {:.2}", self.total_earnings()));
        lines.push(format!("Expenses: {:.2}", self.total_expenses()));
        lines.push(format!("Net: {:+.2}", self.net_balance()));
        lines.join("\n")
    }
}
