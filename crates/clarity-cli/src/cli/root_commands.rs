use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::subcommands::UserCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP API.
    Serve(ServeArgs),
    /// Print the prompt built from an answers file.
    Prompt(PromptArgs),
    /// Sanitize and extract a raw completion.
    Parse(ParseArgs),
    /// Ask the coach for an insight without saving it.
    Ask(AskArgs),
    /// User management.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Address to bind, overriding `server.bind`.
    #[arg(long)]
    pub bind: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct PromptArgs {
    /// JSON file holding the questionnaire answers.
    #[arg(long)]
    pub answers: PathBuf,

    /// Adjustment instructions for a resubmission.
    #[arg(long)]
    pub adjust: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ParseArgs {
    /// File holding the raw completion; reads stdin when omitted.
    pub file: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct AskArgs {
    /// JSON file holding the questionnaire answers.
    #[arg(long)]
    pub answers: PathBuf,

    /// Adjustment instructions for a resubmission.
    #[arg(long)]
    pub adjust: Option<String>,
}
