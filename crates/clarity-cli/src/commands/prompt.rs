use clarity_coach::prompt::build_prompt;

use crate::cli::root_commands::PromptArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::{adjustments, read_answers};
use crate::output::output;

/// Handle `clarity prompt`.
pub fn handle(args: &PromptArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let answers = read_answers(&args.answers)?;
    let adjust = adjustments(args.adjust.as_deref())?;
    let prompt = build_prompt(&answers, adjust);

    match flags.format {
        OutputFormat::Raw => {
            print!("{prompt}");
            Ok(())
        }
        OutputFormat::Json => output(&serde_json::json!({ "prompt": prompt }), flags.format),
    }
}
