use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AskArgs;
use crate::commands::shared::{adjustments, read_answers};
use crate::context::AppContext;
use crate::output::output;

/// Handle `clarity ask`: one coach round-trip, nothing stored.
pub async fn handle(args: &AskArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let answers = read_answers(&args.answers)?;
    let adjust = adjustments(args.adjust.as_deref())?;
    let coach = ctx.coach()?;

    let insight = coach
        .advise(&answers, adjust)
        .await
        .with_context(|| format!("{} did not produce an insight", coach.provider_name()))?;
    output(&insight, flags.format)
}
