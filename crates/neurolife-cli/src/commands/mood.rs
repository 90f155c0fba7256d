//! Mood commands: classify, log, tags, chart.

use chrono::Local;
use clap::Subcommand;
use serde_json::json;

use neurolife_core::mood::{self, LoggingSession, MoodHistory, MoodLevel};

#[derive(Subcommand)]
pub enum MoodAction {
    /// Classify a rating into a mood level
    Classify {
        /// Slider rating in [1, 10]
        #[arg(long)]
        rating: f64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Log a session and print its analysis summary
    Log {
        /// Slider rating in [1, 10]
        #[arg(long)]
        rating: f64,
        /// Log for this week instead of today
        #[arg(long)]
        week: bool,
        /// Comma-separated feeling tags
        #[arg(long)]
        tags: Option<String>,
    },
    /// List feeling tags
    Tags {
        /// Only tags recommended for this level (e.g. "pleasant")
        #[arg(long)]
        level: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render recent mood history as an ASCII chart
    Chart {
        /// Comma-separated daily ratings, oldest first (demo week if omitted)
        #[arg(long)]
        ratings: Option<String>,
    },
}

pub fn run(action: MoodAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        MoodAction::Classify { rating, json } => classify(rating, json),
        MoodAction::Log { rating, week, tags } => log(rating, week, tags),
        MoodAction::Tags { level, json } => list_tags(level, json),
        MoodAction::Chart { ratings } => chart(ratings),
    }
}

fn classify(rating: f64, as_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = MoodLevel::from_score(rating);
    let weight = mood::color_weight(rating, level);
    let tint = mood::tint(level);
    let recommended = mood::recommended_tags(level);

    if as_json {
        let out = json!({
            "rating": rating,
            "level": level,
            "label": level.label(),
            "emoji": level.emoji(),
            "tint": tint.hex(),
            "color_weight": weight,
            "recommended_tags": recommended,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Mood Level: {}", level.display_text());
    println!("Accent: {} at {:.2} opacity", tint.hex(), weight);
    println!("Recommended feelings: {}", recommended.join(", "));
    Ok(())
}

fn log(rating: f64, week: bool, tags: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = if week {
        LoggingSession::week(rating)
    } else {
        LoggingSession::today(rating)
    };

    for tag in parse_list(tags.as_deref()) {
        session.toggle_tag(&tag);
    }

    if !session.can_analyze() {
        eprintln!("note: no tags selected");
    }
    println!("{}", session.summarize());
    Ok(())
}

fn list_tags(level: Option<String>, as_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let tags: Vec<&str> = match level {
        Some(ref name) => {
            let level = MoodLevel::parse(name)
                .ok_or_else(|| format!("unknown mood level: '{name}'"))?;
            mood::recommended_tags(level).to_vec()
        }
        None => mood::all_tags(),
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&tags)?);
    } else {
        for tag in tags {
            println!("{tag}");
        }
    }
    Ok(())
}

fn chart(ratings: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let today = Local::now().date_naive();
    let history = match ratings {
        Some(ref list) => {
            let parsed: Vec<f64> = parse_list(Some(list.as_str()))
                .iter()
                .map(|s| s.parse::<f64>())
                .collect::<Result<_, _>>()?;
            if parsed.is_empty() {
                return Err("no ratings given".into());
            }
            let mut history = MoodHistory::new();
            for (i, rating) in parsed.iter().enumerate() {
                let date = today - chrono::Duration::days((parsed.len() - 1 - i) as i64);
                history.record(date, *rating);
            }
            history
        }
        None => MoodHistory::sample_week(today),
    };

    println!("{}", history.render_ascii_chart());
    Ok(())
}

fn parse_list(input: Option<&str>) -> Vec<String> {
    input
        .map(|s| {
            s.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
