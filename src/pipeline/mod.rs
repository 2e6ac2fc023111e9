//! The map → shuffle → reduce word-frequency pipeline.

pub mod coordinator;
pub mod function;
pub mod shuffle;
pub mod tokenizer;
pub mod worker;
