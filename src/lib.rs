//! `rescode` turns the plain auto-increment keys of your database records into short,
//! non-sequential identifiers such as `user-VHB4JX86`.
//!
//! Exposing raw keys (`/user/1`, `/user/2`, ...) reveals how many records you have and
//! invites enumeration. `rescode` keeps the integer keys in storage and derives the
//! external identifier from them once, right after the record is inserted. Codes have
//! a fixed length and by default use an alphabet without visually confusable characters.
//!
//! Each identifier carries a resource kind prefix, so different types of records can
//! share the same encoding parameters without their identifiers colliding.
//!
//! The encoding is a linear mix of the counter followed by digit diffusion and a fixed
//! permutation of the digit slots. It is deterministic but it is **not** encryption:
//! anyone who knows the algorithm and the parameters can reproduce it. Uniqueness comes
//! from the counter being unique; keep a uniqueness constraint on the stored identifier.
//!
//! # Usage
//!
//! Build a [`Config`] once at startup. Validation happens there, so a bad parameter
//! fails loudly instead of silently weakening the codes. After that, encoding is
//! infallible and the configuration can be shared freely between threads.
//!
//! ```
//! use rescode::{encode, prefixed_id, Config};
//!
//! let config = Config::builder().length(6).build().unwrap();
//! assert_eq!(encode(1, &config), "VHJ6BX");
//! assert_eq!(prefixed_id("user", 1, &config), "user-VHJ6BX");
//!
//! // n2 = 5 does not permute 10 slots.
//! assert!(Config::builder().length(10).build().is_err());
//! ```
//!
//! ## Typed `Field` API
//!
//! `Field` wraps the counter of one resource kind and serializes to its identifier with
//! the global configuration.
//!
//! ```
//! use rescode::{Config, Field, Post};
//!
//! Config::set_global(Config::new()).unwrap();
//! let post: Field<Post> = Field::from(2);
//! assert_eq!(serde_json::to_string(&post).unwrap(), "\"post-FCF3SJLT\"");
//! ```

mod codec;
mod config;
mod field;
mod prefix;

pub use codec::{encode, permutation, Codec};
pub use config::{
    salt_from_seed, Config, ConfigBuilder, ConfigError, DEFAULT_ALPHABET, LOWERCASE_ALPHANUMERIC,
};
pub use field::Field;
pub use prefix::{prefixed_id, Post, Prefixer, ResourceKind, User, SEPARATOR};
