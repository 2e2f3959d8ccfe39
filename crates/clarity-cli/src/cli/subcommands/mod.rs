mod user;

pub use user::UserCommands;
