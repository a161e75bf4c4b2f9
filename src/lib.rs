pub mod config;
pub mod logging;
pub mod parser;
pub mod sync;
pub mod update;
pub mod version;
