//! Personal info and medication schedule commands.

use chrono::{DateTime, Utc};
use clap::Subcommand;
use uuid::Uuid;

use neurolife_core::Profile;

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the stored profile
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a profile field (name, age, gender, conditions, allergies, medications)
    Set {
        /// Field name
        key: String,
        /// New value
        value: String,
    },
    /// Add a medication to the schedule
    MedAdd {
        /// Medication name
        name: String,
        /// Scheduled time (RFC 3339, defaults to now)
        #[arg(long)]
        time: Option<String>,
    },
    /// List scheduled medications
    MedList,
    /// Remove a medication by id
    MedRemove {
        /// Medication id
        id: String,
    },
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ProfileAction::Show { json } => {
            let profile = Profile::load()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                for key in Profile::KEYS {
                    let value = profile.get(key).unwrap_or_default();
                    println!("{key}: {value}");
                }
                println!("scheduled medications: {}", profile.medication_schedule.len());
            }
        }
        ProfileAction::Set { key, value } => {
            let mut profile = Profile::load()?;
            profile.set(&key, &value)?;
            profile.save()?;
            println!("ok");
        }
        ProfileAction::MedAdd { name, time } => {
            let time = match time {
                Some(ref s) => DateTime::parse_from_rfc3339(s)?.with_timezone(&Utc),
                None => Utc::now(),
            };
            let mut profile = Profile::load()?;
            let id = profile.add_medication(name, time);
            profile.save()?;
            println!("added {id}");
        }
        ProfileAction::MedList => {
            let profile = Profile::load()?;
            if profile.medication_schedule.is_empty() {
                println!("(no medications scheduled)");
            }
            for med in &profile.medication_schedule {
                println!(
                    "{} {} at {}",
                    med.id,
                    med.name,
                    med.time.format("%d %b %Y, %-I:%M %p")
                );
            }
        }
        ProfileAction::MedRemove { id } => {
            let id: Uuid = id.parse()?;
            let mut profile = Profile::load()?;
            if profile.remove_medication(id) {
                profile.save()?;
                println!("removed");
            } else {
                eprintln!("no medication with id {id}");
                std::process::exit(1);
            }
        }
    }
    Ok(())
}
