pub mod cli;
pub mod commands;
pub mod common;
pub mod engine;
pub mod loader;
pub mod page;
pub mod render;
