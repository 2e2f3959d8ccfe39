use clarity_coach::parse_completion;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ParseArgs;
use crate::commands::shared::read_input;
use crate::output::output;

/// Handle `clarity parse`.
pub fn handle(args: &ParseArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let raw = read_input(args.file.as_deref())?;
    let insight = parse_completion(&raw)?;
    output(&insight, flags.format)
}
