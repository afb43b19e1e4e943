//! Secret generation.

mod assemble;
pub mod pool;

pub use assemble::{MAX_LENGTH, MIN_LENGTH, SecretAssembler, SecretError};
