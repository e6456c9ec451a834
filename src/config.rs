use std::collections::HashSet;

use hkdf::Hkdf;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use sha2::Sha256;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::codec::permutation;
use crate::prefix::SEPARATOR;

static GLOBAL_CONFIG: OnceCell<Config> = OnceCell::new();

/// The default alphabet: digits and upper case letters without the easily confused
/// `0`, `1`, `I`, `O`, `U` and `Z`.
pub const DEFAULT_ALPHABET: &str = "23456789ABCDEFGHJKLMNPQRSTVWXY";

/// Lower case letters and digits, commonly paired with a code length of 6.
pub const LOWERCASE_ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyz1234567890";

const DEFAULT_N1: u64 = 17;
const DEFAULT_N2: u64 = 5;
const DEFAULT_LENGTH: usize = 8;
const DEFAULT_SALT: u64 = 123_567_369;

/// Errors detected while building a [`Config`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("alphabet must have at least 2 characters, got {len}")]
    AlphabetTooShort { len: usize },

    #[error("alphabet contains '{0}' more than once")]
    DuplicateCharacter(char),

    #[error("alphabet must not contain the separator or whitespace, found {0:?}")]
    ReservedCharacter(char),

    #[error("code length must be positive")]
    ZeroLength,

    #[error("multiplier n1 must be positive")]
    ZeroMultiplier,

    #[error("stride n2 must be positive")]
    ZeroStride,

    #[error("salt must be non-zero")]
    ZeroSalt,

    #[error("multiplier n1 = {n1} is not coprime with the alphabet size {radix}")]
    MultiplierNotCoprime { n1: u64, radix: usize },

    #[error("stride n2 = {n2} is not coprime with the code length {length}")]
    StrideNotCoprime { n2: u64, length: usize },

    #[error("global config has already been set")]
    GlobalAlreadySet,
}

/// A validated, immutable set of encoding parameters.
///
/// Build one at startup with [`Config::new`] or [`Config::builder`], then share it by
/// reference. A `Config` can also be deserialized with Serde; missing fields take the
/// default values and the result is validated the same way as [`ConfigBuilder::build`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "ConfigBuilder")]
pub struct Config {
    alphabet: Vec<char>,
    n1: u64,
    n2: u64,
    length: usize,
    salt: u64,
    slots: Vec<usize>,
}

impl Config {
    /// Creates the default configuration.
    /// - `alphabet` is [`DEFAULT_ALPHABET`] (30 characters).
    /// - `n1` is 17 and `n2` is 5.
    /// - `length` is 8, which keeps codes distinct for counters well beyond 10^11.
    /// - `salt` is a fixed constant. Deployments that care about their codes being
    ///   different from everybody else's should set their own, see [`salt_from_seed`].
    pub fn new() -> Self {
        let alphabet: Vec<char> = DEFAULT_ALPHABET.chars().collect();
        Config {
            alphabet,
            n1: DEFAULT_N1,
            n2: DEFAULT_N2,
            length: DEFAULT_LENGTH,
            salt: DEFAULT_SALT,
            slots: permutation(DEFAULT_N2, DEFAULT_LENGTH),
        }
    }

    /// Returns a builder seeded with the default values.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Number of characters in the alphabet, i.e. the digit base.
    pub fn radix(&self) -> usize {
        self.alphabet.len()
    }

    pub fn n1(&self) -> u64 {
        self.n1
    }

    pub fn n2(&self) -> u64 {
        self.n2
    }

    /// Number of characters in every generated code.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn salt(&self) -> u64 {
        self.salt
    }

    pub(crate) fn slots(&self) -> &[usize] {
        &self.slots
    }

    /// Registers `config` as the process-wide configuration used by [`crate::Field`].
    ///
    /// The global can be set only once; later calls fail with
    /// [`ConfigError::GlobalAlreadySet`] and leave the registered value untouched.
    pub fn set_global(config: Config) -> Result<(), ConfigError> {
        GLOBAL_CONFIG.set(config).map_err(|_| {
            warn!("refusing to replace the global code config");
            ConfigError::GlobalAlreadySet
        })?;
        info!("global code config registered");
        Ok(())
    }

    /// Accesses the global configuration, if set.
    pub fn global() -> Option<&'static Config> {
        GLOBAL_CONFIG.get()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl TryFrom<ConfigBuilder> for Config {
    type Error = ConfigError;

    fn try_from(builder: ConfigBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

/// Collects parameter overrides for a [`Config`].
///
/// Setters only record values, so they can be called in any order and a later call
/// overrides an earlier one. All checks happen in [`ConfigBuilder::build`].
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigBuilder {
    alphabet: String,
    n1: u64,
    n2: u64,
    length: usize,
    salt: u64,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        ConfigBuilder {
            alphabet: DEFAULT_ALPHABET.to_string(),
            n1: DEFAULT_N1,
            n2: DEFAULT_N2,
            length: DEFAULT_LENGTH,
            salt: DEFAULT_SALT,
        }
    }
}

impl ConfigBuilder {
    /// Sets the output characters. They must be distinct, at least two, and must not
    /// include whitespace or the prefix separator `-`.
    pub fn alphabet(mut self, alphabet: &str) -> Self {
        self.alphabet = alphabet.to_string();
        self
    }

    /// Sets the multiplier applied to the counter. Must be coprime with the alphabet size.
    pub fn n1(mut self, n1: u64) -> Self {
        self.n1 = n1;
        self
    }

    /// Sets the permutation stride. Must be coprime with the code length.
    pub fn n2(mut self, n2: u64) -> Self {
        self.n2 = n2;
        self
    }

    /// Sets the number of characters in each code.
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Sets the offset added to the mixed counter. Must be non-zero.
    pub fn salt(mut self, salt: u64) -> Self {
        self.salt = salt;
        self
    }

    /// Validates the collected values and produces the configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let alphabet: Vec<char> = self.alphabet.chars().collect();
        if alphabet.len() < 2 {
            return Err(ConfigError::AlphabetTooShort {
                len: alphabet.len(),
            });
        }
        let mut seen = HashSet::with_capacity(alphabet.len());
        for &c in &alphabet {
            if c == SEPARATOR || c.is_whitespace() {
                return Err(ConfigError::ReservedCharacter(c));
            }
            if !seen.insert(c) {
                return Err(ConfigError::DuplicateCharacter(c));
            }
        }

        if self.length == 0 {
            return Err(ConfigError::ZeroLength);
        }
        if self.n1 == 0 {
            return Err(ConfigError::ZeroMultiplier);
        }
        if self.n2 == 0 {
            return Err(ConfigError::ZeroStride);
        }
        if self.salt == 0 {
            return Err(ConfigError::ZeroSalt);
        }

        let radix = alphabet.len();
        if gcd(self.n1, radix as u64) != 1 {
            return Err(ConfigError::MultiplierNotCoprime { n1: self.n1, radix });
        }
        if gcd(self.n2, self.length as u64) != 1 {
            return Err(ConfigError::StrideNotCoprime {
                n2: self.n2,
                length: self.length,
            });
        }

        debug!(
            radix,
            n1 = self.n1,
            n2 = self.n2,
            length = self.length,
            "built code config"
        );

        Ok(Config {
            alphabet,
            n1: self.n1,
            n2: self.n2,
            length: self.length,
            salt: self.salt,
            slots: permutation(self.n2, self.length),
        })
    }
}

/// Derives a non-zero salt from `seed`, such as a machine id or a deployment secret.
///
/// The same seed always yields the same salt, so codes stay stable across restarts.
pub fn salt_from_seed(seed: &[u8]) -> u64 {
    let hkdf = Hkdf::<Sha256>::new(None, seed);
    let mut okm = [0u8; 8];
    hkdf.expand(b"rescode/salt", &mut okm)
        .expect("Length 8 should be valid");
    u64::from_le_bytes(okm).max(1)
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
