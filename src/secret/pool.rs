//! Character pools for secret assembly.

pub const NUMBERS: &[u8] = b"1234567890";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Printable ASCII specials, excluding space, double-quote, backslash and DEL.
pub const SPECIAL: &[u8] = b"!#$%&'()*+,-./:;<=>?@[]^_`{|}~";

/// The four pools concatenated in guarantee order.
pub const COMBINED: &[u8] =
    b"1234567890abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ!#$%&'()*+,-./:;<=>?@[]^_`{|}~";

// Inclusive end offset of each sub-pool within COMBINED; everything past
// UPPERCASE_END is special.
pub const NUMBERS_END: u16 = 9;
pub const LOWERCASE_END: u16 = 35;
pub const UPPERCASE_END: u16 = 61;

/// The four disjoint character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolClass {
    Numbers,
    Lowercase,
    Uppercase,
    Special,
}

impl PoolClass {
    pub const COUNT: usize = 4;

    pub const ALL: [PoolClass; Self::COUNT] = [
        PoolClass::Numbers,
        PoolClass::Lowercase,
        PoolClass::Uppercase,
        PoolClass::Special,
    ];

    /// Class of the character at `index` within [`COMBINED`].
    #[inline]
    pub fn of_combined(index: u16) -> Self {
        if index <= NUMBERS_END {
            PoolClass::Numbers
        } else if index <= LOWERCASE_END {
            PoolClass::Lowercase
        } else if index <= UPPERCASE_END {
            PoolClass::Uppercase
        } else {
            PoolClass::Special
        }
    }

    pub fn pool(self) -> &'static [u8] {
        match self {
            PoolClass::Numbers => NUMBERS,
            PoolClass::Lowercase => LOWERCASE,
            PoolClass::Uppercase => UPPERCASE,
            PoolClass::Special => SPECIAL,
        }
    }

    #[inline]
    pub fn contains(self, byte: u8) -> bool {
        self.pool().contains(&byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_is_the_concatenation() {
        let concat = [NUMBERS, LOWERCASE, UPPERCASE, SPECIAL].concat();
        assert_eq!(COMBINED, concat.as_slice());
        assert_eq!(COMBINED.len(), 92);
    }

    #[test]
    fn pools_are_disjoint_and_distinct() {
        for class in PoolClass::ALL {
            let pool = class.pool();
            assert!(!pool.is_empty());
            for (i, &byte) in pool.iter().enumerate() {
                assert!(!pool[i + 1..].contains(&byte), "duplicate {byte} in {class:?}");
                for other in PoolClass::ALL {
                    if other != class {
                        assert!(!other.contains(byte), "{byte} in both {class:?} and {other:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn boundaries_partition_combined() {
        assert_eq!(NUMBERS_END as usize, NUMBERS.len() - 1);
        assert_eq!(LOWERCASE_END as usize, NUMBERS.len() + LOWERCASE.len() - 1);
        assert_eq!(
            UPPERCASE_END as usize,
            NUMBERS.len() + LOWERCASE.len() + UPPERCASE.len() - 1
        );
        for i in 0..COMBINED.len() {
            let class = PoolClass::of_combined(i as u16);
            assert!(class.contains(COMBINED[i]), "index {i} misclassified as {class:?}");
        }
    }

    #[test]
    fn special_excludes_forbidden_characters() {
        assert!(!SPECIAL.contains(&b' '));
        assert!(!SPECIAL.contains(&b'"'));
        assert!(!SPECIAL.contains(&b'\\'));
        assert!(!SPECIAL.contains(&0x7f));
        assert_eq!(SPECIAL.len(), 30);
    }
}
