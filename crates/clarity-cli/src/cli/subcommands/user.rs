use clap::Subcommand;

/// User commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// Register a username.
    Create {
        /// 3-20 letters, numbers, or underscores.
        username: String,
    },
}
