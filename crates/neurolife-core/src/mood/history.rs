//! Recent mood samples and an ASCII chart for the home screen.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::MoodLevel;

/// A single day's mood rating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoodSample {
    pub date: NaiveDate,
    /// Rating in [1, 10]
    pub rating: f64,
}

/// Mood samples ordered by date, one per day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoodHistory {
    samples: Vec<MoodSample>,
}

impl MoodHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rating for a date, replacing any existing sample for that day.
    pub fn record(&mut self, date: NaiveDate, rating: f64) {
        if let Some(existing) = self.samples.iter_mut().find(|s| s.date == date) {
            existing.rating = rating;
            return;
        }
        self.samples.push(MoodSample { date, rating });
        self.samples.sort_by_key(|s| s.date);
    }

    /// All samples, oldest first.
    pub fn samples(&self) -> &[MoodSample] {
        &self.samples
    }

    /// The most recent sample.
    pub fn latest(&self) -> Option<&MoodSample> {
        self.samples.last()
    }

    /// Mean rating across all samples.
    pub fn average(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        let sum: f64 = self.samples.iter().map(|s| s.rating).sum();
        Some(sum / self.samples.len() as f64)
    }

    /// The demo week shown before any real data exists: six prior days
    /// plus today, ratings 3, 4, 2, 1, 1, 4, 5.
    pub fn sample_week(today: NaiveDate) -> Self {
        let ratings = [3.0, 4.0, 2.0, 1.0, 1.0, 4.0, 5.0];
        let mut history = Self::new();
        for (i, rating) in ratings.iter().enumerate() {
            let date = today - Duration::days((ratings.len() - 1 - i) as i64);
            history.record(date, *rating);
        }
        history
    }

    /// Render the history as a per-day ASCII bar chart.
    pub fn render_ascii_chart(&self) -> String {
        let mut output = String::from("\nMood History:\n");
        output.push_str(&"─".repeat(56));
        output.push('\n');

        if self.samples.is_empty() {
            output.push_str("(no entries yet)\n");
        }

        for sample in &self.samples {
            let level = MoodLevel::from_score(sample.rating);
            let bar_length = ((sample.rating.clamp(0.0, 10.0) / 10.0) * 30.0) as usize;
            let bar = "█".repeat(bar_length);
            let empty = " ".repeat(30 - bar_length);
            output.push_str(&format!(
                "{} {}{} {} {:.1} {}\n",
                sample.date.format("%d %b"),
                bar,
                empty,
                level.emoji(),
                sample.rating,
                level.label(),
            ));
        }

        output.push_str(&"─".repeat(56));
        output.push('\n');
        if let Some(avg) = self.average() {
            output.push_str(&format!("Average: {:.1} ({})\n", avg, MoodLevel::from_score(avg).label()));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
    }

    #[test]
    fn test_record_replaces_same_day() {
        let mut history = MoodHistory::new();
        history.record(day(1), 3.0);
        history.record(day(1), 7.0);
        assert_eq!(history.samples().len(), 1);
        assert_eq!(history.latest().unwrap().rating, 7.0);
    }

    #[test]
    fn test_record_keeps_date_order() {
        let mut history = MoodHistory::new();
        history.record(day(5), 5.0);
        history.record(day(2), 3.0);
        history.record(day(9), 9.0);
        let dates: Vec<u32> = history
            .samples()
            .iter()
            .map(|s| s.date.format("%d").to_string().parse().unwrap())
            .collect();
        assert_eq!(dates, vec![2, 5, 9]);
    }

    #[test]
    fn test_average() {
        let mut history = MoodHistory::new();
        assert_eq!(history.average(), None);
        history.record(day(1), 4.0);
        history.record(day(2), 6.0);
        assert_eq!(history.average(), Some(5.0));
    }

    #[test]
    fn test_sample_week() {
        let history = MoodHistory::sample_week(day(29));
        assert_eq!(history.samples().len(), 7);
        assert_eq!(history.samples()[0].rating, 3.0);
        assert_eq!(history.latest().unwrap().rating, 5.0);
        assert_eq!(history.latest().unwrap().date, day(29));
    }

    #[test]
    fn test_render_ascii_chart() {
        let history = MoodHistory::sample_week(day(29));
        let chart = history.render_ascii_chart();
        assert!(chart.contains("Mood History:"));
        assert!(chart.contains("29 Aug"));
        assert!(chart.contains("Average:"));
    }

    #[test]
    fn test_render_empty_chart() {
        let chart = MoodHistory::new().render_ascii_chart();
        assert!(chart.contains("no entries yet"));
        assert!(!chart.contains("Average:"));
    }
}
