use std::sync::Arc;

use anyhow::Context;

use clarity_api::AppState;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ServeArgs;
use crate::context::AppContext;

/// Handle `clarity serve`.
pub async fn handle(args: &ServeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut server = ctx.config.server.clone();
    if let Some(bind) = &args.bind {
        server.bind.clone_from(bind);
    }

    let coach = ctx.coach()?;
    let service = ctx.service().await?;
    let state = Arc::new(AppState::new(service, coach, ctx.config.general.default_limit));

    if !flags.quiet {
        eprintln!("clarity API on http://{} (ctrl-c to stop)", server.bind);
    }
    clarity_api::serve(state, &server)
        .await
        .with_context(|| format!("server on {} failed", server.bind))
}
