use proptest::prelude::*;
use rescode::{encode, permutation, prefixed_id, Config, DEFAULT_ALPHABET};

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

prop_compose! {
    fn valid_config()(
        (radix, n1) in (2usize..=30, 1u64..1_000).prop_filter("n1 coprime with radix", |(r, n1)| gcd(*n1, *r as u64) == 1),
        (length, n2) in (1usize..=12, 1u64..100).prop_filter("n2 coprime with length", |(l, n2)| gcd(*n2, *l as u64) == 1),
        salt in 1u64..,
    ) -> Config {
        Config::builder()
            .alphabet(&DEFAULT_ALPHABET[..radix])
            .n1(n1)
            .n2(n2)
            .length(length)
            .salt(salt)
            .build()
            .unwrap()
    }
}

proptest! {
    #[test]
    fn code_has_configured_length_and_alphabet(config in valid_config(), counter in 0u64..(1 << 32)) {
        let code = encode(counter, &config);
        prop_assert_eq!(code.chars().count(), config.length());
        for c in code.chars() {
            prop_assert!(config.alphabet().contains(&c), "unexpected character {} in {}", c, code);
        }
    }

    #[test]
    fn encoding_is_deterministic(config in valid_config(), counter in any::<u64>()) {
        prop_assert_eq!(encode(counter, &config), encode(counter, &config.clone()));
    }

    #[test]
    fn coprime_stride_visits_every_slot(
        (length, n2) in (1usize..=64, 1u64..1_000).prop_filter("coprime", |(l, n2)| gcd(*n2, *l as u64) == 1)
    ) {
        let mut slots = permutation(n2, length);
        slots.sort_unstable();
        prop_assert_eq!(slots, (0..length).collect::<Vec<_>>());
    }

    #[test]
    fn distinct_small_counters_get_distinct_codes(a in 0u64..1_000_000, b in 0u64..1_000_000) {
        prop_assume!(a != b);
        let config = Config::new();
        prop_assert_ne!(encode(a, &config), encode(b, &config));
    }

    #[test]
    fn kinds_are_isolated(counter in any::<u64>()) {
        let config = Config::new();
        let user = prefixed_id("user", counter, &config);
        let post = prefixed_id("post", counter, &config);
        prop_assert!(user.starts_with("user-"));
        prop_assert!(post.starts_with("post-"));
        prop_assert_ne!(user, post);
    }
}
