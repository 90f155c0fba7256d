//! Finance flow commands.
//!
//! The ledger is session-scoped; `summary` builds one from repeated
//! `--expense`/`--earning` flags for a single invocation.

use clap::Subcommand;
use serde_json::json;

use neurolife_core::finance::{EntryKind, FinanceEntry, FinanceLog};

#[derive(Subcommand)]
pub enum FinanceAction {
    /// Validate and echo a single expense
    Expense {
        /// Amount spent
        #[arg(long)]
        amount: f64,
        /// Category (e.g. Food, Transport)
        #[arg(long)]
        category: String,
        /// Optional notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Validate and echo a single earning
    Earning {
        /// Amount earned
        #[arg(long)]
        amount: f64,
        /// Source (e.g. Freelance, Gifts)
        #[arg(long)]
        source: String,
        /// Optional notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Summarize a set of entries
    Summary {
        /// Expense as "AMOUNT:LABEL", repeatable
        #[arg(long = "expense")]
        expenses: Vec<String>,
        /// Earning as "AMOUNT:LABEL", repeatable
        #[arg(long = "earning")]
        earnings: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: FinanceAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        FinanceAction::Expense {
            amount,
            category,
            notes,
        } => log_one(EntryKind::Expense, amount, category, notes),
        FinanceAction::Earning {
            amount,
            source,
            notes,
        } => log_one(EntryKind::Earning, amount, source, notes),
        FinanceAction::Summary {
            expenses,
            earnings,
            json,
        } => summary(expenses, earnings, json),
    }
}

fn log_one(
    kind: EntryKind,
    amount: f64,
    label: String,
    notes: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut entry = match kind {
        EntryKind::Expense => FinanceEntry::expense(amount, label),
        EntryKind::Earning => FinanceEntry::earning(amount, label),
    };
    if let Some(notes) = notes {
        entry = entry.with_notes(notes);
    }
    entry.validate()?;
    println!("{} {} {:.2} logged", entry.kind.glyph(), entry.label, entry.amount);
    Ok(())
}

fn summary(
    expenses: Vec<String>,
    earnings: Vec<String>,
    as_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut log = FinanceLog::new();
    for spec in &expenses {
        let (amount, label) = parse_entry(spec)?;
        log.add(FinanceEntry::expense(amount, label))?;
    }
    for spec in &earnings {
        let (amount, label) = parse_entry(spec)?;
        log.add(FinanceEntry::earning(amount, label))?;
    }

    if as_json {
        let out = json!({
            "entries": log.entries().len(),
            "total_earnings": log.total_earnings(),
            "total_expenses": log.total_expenses(),
            "net_balance": log.net_balance(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", log.summary());
    }
    Ok(())
}

fn parse_entry(spec: &str) -> Result<(f64, String), Box<dyn std::error::Error>> {
    let (amount, label) = spec
        .split_once(':')
        .ok_or_else(|| format!("expected AMOUNT:LABEL, got '{spec}'"))?;
    let amount: f64 = amount
        .trim()
        .parse()
        .map_err(|_| format!("cannot parse amount in '{spec}'"))?;
    Ok((amount, label.trim().to_string()))
}
