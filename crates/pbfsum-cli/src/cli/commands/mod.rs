//! CLI command handlers. Each command is in its own file.

mod checksum;
mod parse;
mod verify;

pub use checksum::run_checksum;
pub use parse::run_parse;
pub use verify::run_verify;
