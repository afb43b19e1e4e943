//! Uniform random index generation over the OS entropy source.

use zeroize::Zeroize;

/// Give up after this many rejected draws. Each draw is accepted with
/// probability > 1/2, so hitting this cap means the byte source is broken.
const REDRAW_CAP: u32 = 128;

#[derive(Debug)]
pub enum RandError {
    /// The operating system could not supply random bytes.
    Source,
    /// Rejection sampling exceeded the redraw cap.
    RedrawCap { range: u32 },
}

impl std::fmt::Display for RandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RandError::Source => {
                write!(f, "operating system random source failed to supply bytes")
            }
            RandError::RedrawCap { range } => write!(
                f,
                "rejection sampling over range 0..={} exceeded {} redraws",
                range, REDRAW_CAP
            ),
        }
    }
}

impl std::error::Error for RandError {}

/// Draws uniformly distributed indices from the OS cryptographic
/// random-byte source. One 32-bit word is consumed per draw.
pub struct IndexSource {
    word: [u8; 4],
}

impl IndexSource {
    pub fn new() -> Self {
        Self { word: [0; 4] }
    }

    /// Uniform index in `[min(a, b), max(a, b)]`, both bounds inclusive.
    ///
    /// Rejection sampling over the minimal bit window: only the low
    /// `bit_length(range)` bits of each random word are kept, so out-of-range
    /// draws occur with probability < 1/2 and no modulo bias is introduced.
    pub fn index_in_range(&mut self, a: u16, b: u16) -> Result<u16, RandError> {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        // Widen before subtracting so the bounds can sit at the u16 extremes.
        let range = high as u32 - low as u32;
        if range == 0 {
            return Ok(low);
        }

        let discard = range.leading_zeros();
        for _ in 0..REDRAW_CAP {
            let candidate = self.next_word()? >> discard;
            if candidate <= range {
                return Ok(low + candidate as u16);
            }
        }

        Err(RandError::RedrawCap { range })
    }

    /// Uniform index in `[0, high]` inclusive.
    #[inline]
    pub fn index_to(&mut self, high: u16) -> Result<u16, RandError> {
        self.index_in_range(high, 0)
    }

    #[inline]
    fn next_word(&mut self) -> Result<u32, RandError> {
        getrandom::fill(&mut self.word).map_err(|_| RandError::Source)?;
        Ok(u32::from_le_bytes(self.word))
    }
}

impl Default for IndexSource {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for IndexSource {
    fn drop(&mut self) {
        self.word.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_range_returns_the_bound() {
        let mut source = IndexSource::new();
        assert_eq!(source.index_in_range(0, 0).unwrap(), 0);
        assert_eq!(source.index_in_range(42, 42).unwrap(), 42);
        assert_eq!(source.index_in_range(u16::MAX, u16::MAX).unwrap(), u16::MAX);
    }

    #[test]
    fn stays_inside_inclusive_bounds() {
        let mut source = IndexSource::new();
        let pairs = [
            (0u16, 9u16),
            (9, 0),
            (3, 17),
            (65_530, 65_535),
            (0, u16::MAX),
            (7, 8),
        ];
        for (a, b) in pairs {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            for _ in 0..500 {
                let v = source.index_in_range(a, b).unwrap();
                assert!((low..=high).contains(&v), "{v} outside [{low}, {high}]");
            }
        }
    }

    #[test]
    fn argument_order_does_not_matter() {
        let mut source = IndexSource::new();
        for _ in 0..200 {
            let v = source.index_in_range(11, 3).unwrap();
            assert!((3..=11).contains(&v));
        }
    }

    #[test]
    fn index_to_covers_every_value() {
        let mut source = IndexSource::new();
        let mut seen = [false; 6];
        for _ in 0..10_000 {
            let v = source.index_to(5).unwrap();
            assert!(v <= 5);
            seen[v as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "values missing after 10k draws: {seen:?}");
    }

    #[test]
    fn ten_thousand_draws_are_roughly_uniform() {
        let mut source = IndexSource::new();
        let mut counts = [0u32; 6];
        for _ in 0..10_000 {
            counts[source.index_to(5).unwrap() as usize] += 1;
        }

        // Chi-squared against uniform, 5 degrees of freedom. The 0.001
        // critical value is 20.5; 33.0 leaves room for unlucky runs while
        // still catching real bias such as a plain modulo reduction.
        let expected = 10_000.0 / 6.0;
        let chi2: f64 = counts
            .iter()
            .map(|&c| {
                let d = c as f64 - expected;
                d * d / expected
            })
            .sum();
        assert!(chi2 < 33.0, "chi-squared {chi2:.1} too large: {counts:?}");
    }
}
