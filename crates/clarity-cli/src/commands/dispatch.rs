use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
///
/// `prompt` and `parse` run offline and never touch configuration.
pub async fn dispatch(command: Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Prompt(args) => commands::prompt::handle(&args, flags),
        Commands::Parse(args) => commands::parse::handle(&args, flags),
        Commands::Serve(args) => commands::serve::handle(&args, &load()?, flags).await,
        Commands::Ask(args) => commands::ask::handle(&args, &load()?, flags).await,
        Commands::User { action } => commands::user::handle(&action, &load()?, flags).await,
    }
}

fn load() -> anyhow::Result<AppContext> {
    Ok(AppContext::new(bootstrap::load_config()?))
}
