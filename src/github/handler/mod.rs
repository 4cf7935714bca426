pub mod commit_handler;
pub mod repository_handler;
pub mod variables_handler;
