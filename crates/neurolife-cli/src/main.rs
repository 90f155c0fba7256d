use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

mod commands;

#[derive(Parser)]
#[command(name = "neurolife-cli", version, about = "NeuroLife CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mood logging and analysis
    Mood {
        #[command(subcommand)]
        action: commands::mood::MoodAction,
    },
    /// Finance flow: expense and earning logging
    Finance {
        #[command(subcommand)]
        action: commands::finance::FinanceAction,
    },
    /// Chat with the assistant
    Chat {
        #[command(subcommand)]
        action: commands::chat::ChatAction,
    },
    /// Personal info and medication schedule
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Mood { action } => commands::mood::run(action),
        Commands::Finance { action } => commands::finance::run(action),
        Commands::Chat { action } => commands::chat::run(action),
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "neurolife-cli",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
