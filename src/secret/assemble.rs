//! Secret assembly: guaranteed class coverage, bias-compensated fill, shuffle.

use log::debug;

use super::pool::{COMBINED, PoolClass};
use crate::rand::{IndexSource, RandError};

/// Shortest secret that can still hold one character of every class.
pub const MIN_LENGTH: usize = 4;
/// Largest length addressable by the u16 index type used for sampling.
pub const MAX_LENGTH: usize = u16::MAX as usize;

#[derive(Debug)]
pub enum SecretError {
    LengthTooShort { got: usize },
    LengthTooLong { got: usize },
    Rand(RandError),
}

impl std::fmt::Display for SecretError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecretError::LengthTooShort { got } => {
                write!(f, "secret length {got} is below the minimum of {MIN_LENGTH}")
            }
            SecretError::LengthTooLong { got } => {
                write!(f, "secret length {got} exceeds the maximum of {MAX_LENGTH}")
            }
            SecretError::Rand(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for SecretError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SecretError::Rand(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RandError> for SecretError {
    fn from(e: RandError) -> Self {
        SecretError::Rand(e)
    }
}

/// Tracks which sub-pools have had their first fill-phase draw suppressed.
/// Local to a single `next_secret` call; never carried across calls.
#[derive(Debug, Default)]
struct Compensation {
    fired: [bool; PoolClass::COUNT],
    compensated: usize,
}

impl Compensation {
    /// True if this draw must be discarded: first fill-phase hit on a
    /// sub-pool that has not been compensated yet.
    fn suppress(&mut self, class: PoolClass) -> bool {
        if self.compensated == PoolClass::COUNT || self.fired[class as usize] {
            return false;
        }
        self.fired[class as usize] = true;
        self.compensated += 1;
        true
    }
}

/// Assembles secrets of a fixed length containing at least one character
/// from each of the four pools.
pub struct SecretAssembler {
    length: usize,
    source: IndexSource,
}

impl SecretAssembler {
    /// Rejects lengths outside `4..=65535`. No clamping: the caller always
    /// knows the exact length of the secrets it will receive.
    pub fn new(length: usize) -> Result<Self, SecretError> {
        if length < MIN_LENGTH {
            return Err(SecretError::LengthTooShort { got: length });
        }
        if length > MAX_LENGTH {
            return Err(SecretError::LengthTooLong { got: length });
        }
        Ok(Self {
            length,
            source: IndexSource::new(),
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Generate a fresh secret of the configured length.
    pub fn next_secret(&mut self) -> Result<String, SecretError> {
        let mut buf = Vec::with_capacity(self.length);

        // One guaranteed character per sub-pool, compensation off.
        for class in PoolClass::ALL {
            let pool = class.pool();
            let idx = self.source.index_to((pool.len() - 1) as u16)?;
            buf.push(pool[idx as usize]);
        }

        // Fill from the combined pool. The guaranteed picks over-represent
        // every sub-pool; suppressing the first fill-phase hit on each pulls
        // the character frequencies back toward uniform. Heuristic only:
        // residual bias fades for longer secrets.
        let mut compensation = Compensation::default();
        while buf.len() < self.length {
            let idx = self.source.index_to((COMBINED.len() - 1) as u16)?;
            if compensation.suppress(PoolClass::of_combined(idx)) {
                continue;
            }
            buf.push(COMBINED[idx as usize]);
        }

        self.shuffle(&mut buf)?;
        debug!("assembled secret of length {}", buf.len());

        // Safety: every pool byte is ASCII.
        Ok(unsafe { String::from_utf8_unchecked(buf) })
    }

    /// Fisher-Yates over the whole buffer. The pick range at step `i` is
    /// `[0, i]` inclusive, so position 0 participates and the guaranteed
    /// characters placed at the front can land anywhere.
    fn shuffle(&mut self, buf: &mut [u8]) -> Result<(), SecretError> {
        for i in (1..buf.len()).rev() {
            let j = self.source.index_to(i as u16)?;
            buf.swap(i, j as usize);
        }
        Ok(())
    }
}

impl Default for SecretAssembler {
    /// An assembler producing secrets of the combined pool's length (92).
    fn default() -> Self {
        Self {
            length: COMBINED.len(),
            source: IndexSource::new(),
        }
    }
}
