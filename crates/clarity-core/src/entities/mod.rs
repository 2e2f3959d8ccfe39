//! Entity structs for all Clarity domain objects.
//!
//! `User`, `HistoryEntry` and `SavedCard` map to tables in the libSQL store;
//! `QuestionnaireAnswers` and `StructuredInsight` are embedded in history rows.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`.

mod answers;
mod card;
mod history;
mod insight;
mod user;

pub use answers::{MAX_RATING, QuestionnaireAnswers};
pub use card::SavedCard;
pub use history::HistoryEntry;
pub use insight::{SOLUTION_COUNT, Solution, StructuredInsight};
pub use user::User;
