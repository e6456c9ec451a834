use std::fmt;
use std::marker::PhantomData;

use serde::ser::Error as _;
use serde::{Serialize, Serializer};

use crate::{prefixed_id, Config, ResourceKind};

/// A typed storage counter (a wrapped u64) for one resource kind.
///
/// When serialized with Serde, the counter is encoded with the global configuration
/// into the external identifier `"{kind}-{code}"`. The kind comes from the marker's
/// `fn name()`. Serialization fails if [`Config::set_global`] was never called.
///
/// There is no `Deserialize`: codes are not decodable, look the record up by its
/// stored identifier instead.
///
/// # Examples
///
/// ```
/// use rescode::{Config, Field, User};
/// use serde_json;
///
/// type UserId = Field<User>;
///
/// #[derive(serde::Serialize)]
/// struct Account {
///     pub id: UserId,
/// }
///
/// rescode::Config::set_global(Config::new()).unwrap();
/// let account = Account { id: UserId::from(1) };
/// let json = serde_json::to_string(&account).unwrap();
/// assert_eq!(json, "{\"id\":\"user-VHB4JX86\"}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field<K: ResourceKind> {
    counter: u64,
    _marker: PhantomData<K>,
}

impl<K: ResourceKind> Field<K> {
    pub fn new(counter: u64) -> Self {
        Field {
            counter,
            _marker: PhantomData,
        }
    }

    /// Returns the raw counter.
    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Returns the external identifier using an explicit configuration.
    pub fn id(&self, config: &Config) -> String {
        prefixed_id(K::name(), self.counter, config)
    }
}

impl<K: ResourceKind> From<u64> for Field<K> {
    fn from(counter: u64) -> Self {
        Field::new(counter)
    }
}

impl<K: ResourceKind> From<Field<K>> for u64 {
    /// Returns the raw `u64` value.
    fn from(field: Field<K>) -> Self {
        field.counter
    }
}

impl<K: ResourceKind> fmt::Display for Field<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Field {{ counter: {}, kind: {} }}", self.counter, K::name())
    }
}

impl<K: ResourceKind> Serialize for Field<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let config = Config::global()
            .ok_or_else(|| S::Error::custom("global code config is not set"))?;
        serializer.serialize_str(&self.id(config))
    }
}
