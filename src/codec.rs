use crate::prefix::Prefixer;
use crate::Config;

/// Encodes a counter into a fixed-length code.
///
/// The counter is first mixed linearly (`counter * n1 + salt`, wrapping on overflow),
/// then split into base-`radix` digits where every digit is shifted by a multiple of
/// the lowest one, so that neighbouring counters differ in most positions. Finally
/// the digit slots are reordered with the stride `n2` and mapped to the alphabet.
///
/// The result is deterministic: the same counter and configuration always give the
/// same code. It is not encryption and does not by itself guarantee uniqueness.
///
/// # Arguments
///
/// * `counter` - The storage assigned integer key, usually starting at 1.
/// * `config` - A validated configuration.
///
/// # Returns
///
/// A string of exactly `config.length()` characters, all taken from `config.alphabet()`.
///
/// # Examples
///
/// ```
/// use rescode::{encode, Config};
///
/// let config = Config::builder().length(6).build().unwrap();
/// assert_eq!(encode(1, &config), "VHJ6BX");
/// ```
pub fn encode(counter: u64, config: &Config) -> String {
    let digits = diffuse(mix(counter, config), config);
    let alphabet = config.alphabet();
    config
        .slots()
        .iter()
        .map(|&slot| alphabet[digits[slot]])
        .collect()
}

/// Returns the slot table of the permutation step: output position `i` takes the digit
/// at `(i * n2) mod length`.
///
/// The table is a permutation of `0..length` exactly when `n2` and `length` are coprime.
pub fn permutation(n2: u64, length: usize) -> Vec<usize> {
    (0..length)
        .map(|i| ((i as u128 * n2 as u128) % length as u128) as usize)
        .collect()
}

// Wrapping arithmetic is part of the format, the codes depend on it bit for bit.
fn mix(counter: u64, config: &Config) -> u64 {
    counter.wrapping_mul(config.n1()).wrapping_add(config.salt())
}

// Extracts `length` little-endian digits of `x`, adding `i * d[0]` to digit `i`.
fn diffuse(mut x: u64, config: &Config) -> Vec<usize> {
    let radix = config.radix() as u64;
    let mut digits = Vec::with_capacity(config.length());
    let mut first = 0;
    for i in 0..config.length() as u64 {
        let digit = x % radix;
        if i == 0 {
            first = digit;
        }
        digits.push(((digit + (i % radix) * first) % radix) as usize);
        x /= radix;
    }
    digits
}

/// Encoder bound to one configuration.
#[derive(Clone, Debug, Default)]
pub struct Codec {
    config: Config,
}

impl Codec {
    /// Creates a new `Codec` that encodes with `config`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rescode::{Codec, Config};
    ///
    /// let codec = Codec::new(Config::new());
    /// assert_eq!(codec.encode(1), "VHB4JX86");
    /// ```
    pub fn new(config: Config) -> Codec {
        Codec { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Encodes `counter`, see [`encode`].
    pub fn encode(&self, counter: u64) -> String {
        encode(counter, &self.config)
    }

    /// Returns a [`Prefixer`] for the resource kind `kind` sharing this codec's configuration.
    pub fn prefixer(&self, kind: &str) -> Prefixer<'_> {
        Prefixer::new(kind, &self.config)
    }
}
