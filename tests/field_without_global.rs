//! Runs in its own process, where no global config is ever registered.

use rescode::{Config, Field, User};

#[test]
fn serialize_fails_without_global_config() {
    assert!(Config::global().is_none());
    let user: Field<User> = Field::from(1);
    let err = serde_json::to_string(&user).unwrap_err();
    assert!(err.to_string().contains("global code config is not set"), "{err}");

    // The explicit API keeps working.
    assert_eq!(user.id(&Config::new()), "user-VHB4JX86");
}
