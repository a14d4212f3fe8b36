//! Question store adapters
//!
//! - [`InMemoryQuestionStore`]: process-local, for tests and one-off runs
//! - [`JsonlQuestionStore`]: append-only JSON Lines file

mod jsonl;
mod memory;

pub use jsonl::JsonlQuestionStore;
pub use memory::InMemoryQuestionStore;
