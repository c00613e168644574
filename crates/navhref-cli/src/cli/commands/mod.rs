//! CLI command handlers. Each writes to the given sink so tests can capture it.

mod batch;
mod inspect;
mod resolve;

pub use batch::run_batch;
pub use inspect::run_inspect;
pub use resolve::run_resolve;
