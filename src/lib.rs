//! An in-process MapReduce-style word-frequency pipeline.
//!
//! One run takes a ready text, tokenizes it, fans the tokens out to a pool
//! of mapper tasks, groups the emitted pairs on a single thread, fans the
//! groups out to reducer tasks, and hands back one total per distinct word.
//! Every phase transition is a barrier: the next phase never observes a
//! partial result of the previous one.

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::coordinator::{Coordinator, Phase};
