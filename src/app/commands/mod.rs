pub mod discover;
pub mod init;
pub mod run_agent;
