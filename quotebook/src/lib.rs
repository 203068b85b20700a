pub mod offline;
pub mod repl;

pub use offline::{load_provider, require_online};
pub use repl::{run, FAREWELL, PROMPT};
