pub mod ask;
pub mod dispatch;
pub mod parse;
pub mod prompt;
pub mod serve;
pub mod shared;
pub mod user;
