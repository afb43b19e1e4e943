//! Random secrets with guaranteed character-class coverage.
//!
//! Secrets are drawn from four disjoint ASCII pools (digits, lowercase,
//! uppercase, specials). Every secret contains at least one character from
//! each pool; a bias-compensated fill and a full-coverage shuffle keep the
//! result uniformly distributed. All randomness comes from the operating
//! system's cryptographic source via unbiased rejection sampling.
//!
//! ```no_run
//! use randsecret::SecretAssembler;
//!
//! let mut assembler = SecretAssembler::new(24)?;
//! let secret = assembler.next_secret()?;
//! assert_eq!(secret.len(), 24);
//! # Ok::<(), randsecret::SecretError>(())
//! ```

pub mod cli;
pub mod rand;
pub mod secret;

pub use rand::{IndexSource, RandError};
pub use secret::{SecretAssembler, SecretError};
