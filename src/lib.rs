pub mod config;
pub mod connections;
pub mod error;
pub mod feedback;
pub mod messages;
pub mod parse;
pub mod validate;
pub mod wasm;
