use std::fmt;
use std::str::FromStr;

use crate::{Error, Key};

/// Knuth's multiplicative constant, `(sqrt(5) - 1) / 2`, to the precision historical benchmark
/// numbers were produced with.
const KNUTH_A: f64 = 0.618_033_988_7;

/// How many decimal digits make up one folded chunk.
const FOLD_CHUNK_DIGITS: usize = 3;

/// The ways a [`HashTable`](super::HashTable) can map a key to a bucket. Every function returns
/// an index in `[0, buckets)` for any key, negative ones included.
///
/// # Examples
///
/// ```
/// use stepcount::HashFunction;
///
/// assert_eq!(HashFunction::Division.index(25, 10), 5);
/// assert_eq!(HashFunction::Folding.index(123_456_789, 1_000), 368);
/// assert_eq!(HashFunction::Multiplication.index(42, 1), 0);
///
/// assert_eq!("folding".parse::<HashFunction>(), Ok(HashFunction::Folding));
/// assert_eq!(HashFunction::from_name_or_default("sha256"), HashFunction::Division);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HashFunction {
    /// `k mod M`.
    #[default]
    Division,
    /// `floor(M * frac(k * A))` with `A` Knuth's constant.
    Multiplication,
    /// Sum of the key's 3-digit decimal chunks, `mod M`.
    Folding,
}

impl HashFunction {
    /// All hash functions, in a stable order.
    pub const ALL: [HashFunction; 3] = [Self::Division, Self::Multiplication, Self::Folding];

    /// The lowercase name this function is selected by.
    pub fn name(self) -> &'static str {
        match self {
            Self::Division => "division",
            Self::Multiplication => "multiplication",
            Self::Folding => "folding",
        }
    }

    /// Parses `name`, falling back to [`HashFunction::Division`] when it is not recognized.
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::warn!(name, "unknown hash function, falling back to division");
            Self::Division
        })
    }

    /// Maps `key` into `[0, buckets)`.
    ///
    /// ## Panics
    ///
    /// When `buckets` is zero. [`HashTable`](super::HashTable) never lets that happen.
    pub fn index(self, key: Key, buckets: usize) -> usize {
        assert!(buckets > 0, "hashing needs at least one bucket");
        match self {
            Self::Division => division(key, buckets),
            Self::Multiplication => multiplication(key, buckets),
            Self::Folding => folding(key, buckets),
        }
    }
}

impl fmt::Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashFunction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|function| function.name() == s)
            .ok_or_else(|| Error::UnknownHashFunction(s.to_owned()))
    }
}

fn division(key: Key, buckets: usize) -> usize {
    // Euclidean remainder keeps negative keys in range.
    i128::from(key).rem_euclid(buckets as i128) as usize
}

fn multiplication(key: Key, buckets: usize) -> usize {
    let product = key as f64 * KNUTH_A;
    let fraction = product - product.floor();
    // `fraction` can round up to within an ulp of 1.0.
    ((buckets as f64 * fraction) as usize).min(buckets - 1)
}

fn folding(key: Key, buckets: usize) -> usize {
    let digits = key.unsigned_abs().to_string();
    let total: u64 = digits
        .as_bytes()
        .chunks(FOLD_CHUNK_DIGITS)
        .map(|chunk| {
            chunk
                .iter()
                .fold(0, |acc, digit| acc * 10 + u64::from(digit - b'0'))
        })
        .sum();

    (u128::from(total) % buckets as u128) as usize
}
