//! Block Drop (workspace facade crate).
//!
//! Re-exports the member crates under `block_drop::{core,engine,input,term,types}`
//! so the binary, integration tests and benches share one import path.

pub use block_drop_core as core;
pub use block_drop_engine as engine;
pub use block_drop_input as input;
pub use block_drop_term as term;
pub use block_drop_types as types;
