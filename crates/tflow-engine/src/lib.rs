//! Prompt optimization pipeline
//!
//! Drives classification, masking, prose compression and token statistics over a
//! whole input and returns a single [`OptimizationResult`](tflow_core::OptimizationResult).

pub mod optimizer;
pub mod prose;
pub mod savings;

pub use optimizer::{Optimizer, OptimizerOptions, optimize};
pub use prose::compress_prose;
pub use savings::{effective_output, simple_token_count, tokens_saved};
