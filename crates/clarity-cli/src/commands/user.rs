use clarity_core::responses::RegisterResponse;
use clarity_core::validation::validate_username;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `clarity user`.
pub async fn handle(
    action: &UserCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        UserCommands::Create { username } => {
            let username = username.trim();
            validate_username(username).map_err(|e| anyhow::anyhow!(e.user_message()))?;

            let service = ctx.service().await?;
            let user = service.create_user(username).await?;
            output(
                &RegisterResponse {
                    user_id: user.id,
                    username: user.username,
                },
                flags.format,
            )
        }
    }
}
