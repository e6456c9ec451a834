use std::fmt;

use crate::{encode, Config};

/// Separates the resource kind from the encoded counter.
pub const SEPARATOR: char = '-';

/// A compile-time tag naming one kind of resource, used as the identifier prefix.
pub trait ResourceKind: fmt::Debug {
    fn name() -> &'static str;
}

/// Resource kind for user accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct User;

impl ResourceKind for User {
    fn name() -> &'static str {
        "user"
    }
}

/// Resource kind for posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Post;

impl ResourceKind for Post {
    fn name() -> &'static str {
        "post"
    }
}

/// Builds the external identifier `"{kind}-{code}"` for `counter`.
///
/// Different kinds can share one configuration: the prefix keeps a user and a post with
/// the same counter apart.
///
/// # Examples
///
/// ```
/// use rescode::{prefixed_id, Config};
///
/// let config = Config::builder().length(6).build().unwrap();
/// assert_eq!(prefixed_id("user", 1, &config), "user-VHJ6BX");
/// assert_eq!(prefixed_id("post", 1, &config), "post-VHJ6BX");
/// ```
pub fn prefixed_id(kind: &str, counter: u64, config: &Config) -> String {
    format!("{}{}{}", kind, SEPARATOR, encode(counter, config))
}

/// Produces identifiers for one resource kind.
#[derive(Clone, Debug)]
pub struct Prefixer<'a> {
    prefix: String,
    config: &'a Config,
}

impl<'a> Prefixer<'a> {
    pub fn new(kind: &str, config: &'a Config) -> Prefixer<'a> {
        Prefixer {
            prefix: format!("{}{}", kind, SEPARATOR),
            config,
        }
    }

    /// Creates a prefixer for the resource kind `K`.
    pub fn of<K: ResourceKind>(config: &'a Config) -> Prefixer<'a> {
        Prefixer::new(K::name(), config)
    }

    pub fn kind(&self) -> &str {
        &self.prefix[..self.prefix.len() - SEPARATOR.len_utf8()]
    }

    /// Returns the identifier for `counter`.
    pub fn id(&self, counter: u64) -> String {
        format!("{}{}", self.prefix, encode(counter, self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_id() {
        let config = Config::builder().length(6).build().unwrap();
        assert_eq!(prefixed_id("user", 1, &config), "user-VHJ6BX");
        assert_eq!(prefixed_id("post", 2, &config), "post-FCSTFJ");
        assert_eq!(prefixed_id("", 1, &config), "-VHJ6BX");
    }

    #[test]
    fn test_kinds_never_collide() {
        let config = Config::new();
        for n in (0..1_000).chain([u32::MAX as u64, u64::MAX]) {
            let user = prefixed_id(User::name(), n, &config);
            let post = prefixed_id(Post::name(), n, &config);
            assert!(user.starts_with("user-"));
            assert!(post.starts_with("post-"));
            assert_ne!(user, post);
            assert_eq!(user[5..], post[5..]);
        }
    }

    #[test]
    fn test_prefixer() {
        let config = Config::new();
        let users = Prefixer::of::<User>(&config);
        assert_eq!(users.kind(), "user");
        assert_eq!(users.id(1), "user-VHB4JX86");
        assert_eq!(users.id(123), prefixed_id("user", 123, &config));

        let custom = Prefixer::new("invoice", &config);
        assert_eq!(custom.kind(), "invoice");
        assert_eq!(custom.id(0), "invoice-BN75ADSF");
    }
}
