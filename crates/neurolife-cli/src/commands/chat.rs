//! Chat assistant command.

use clap::Subcommand;

use neurolife_core::ChatLog;

#[derive(Subcommand)]
pub enum ChatAction {
    /// Send a message and print the conversation
    Send {
        /// Message text
        message: String,
    },
}

pub fn run(action: ChatAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ChatAction::Send { message } => {
            let mut log = ChatLog::new();
            log.send(&message)?;
            println!("{}", log.transcript());
            Ok(())
        }
    }
}
