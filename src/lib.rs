pub mod assets;
pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod scheduler;
pub mod script;
pub mod session;
