#![no_main]
use arrayref::array_ref;
use libfuzzer_sys::fuzz_target;
use rescode::{encode, prefixed_id, Config};

fuzz_target!(|data: &[u8]| {
    if data.len() < 26 {
        return;
    }
    let counter = u64::from_le_bytes(*array_ref!(data, 0, 8));
    let n1 = u64::from_le_bytes(*array_ref!(data, 8, 8));
    let salt = u64::from_le_bytes(*array_ref!(data, 16, 8));
    let n2 = data[24] as u64;
    let length = data[25] as usize;
    let alphabet = String::from_utf8_lossy(&data[26..]);

    let Ok(config) = Config::builder()
        .alphabet(&alphabet)
        .n1(n1)
        .n2(n2)
        .length(length)
        .salt(salt)
        .build()
    else {
        return;
    };

    let code = encode(counter, &config);
    assert_eq!(code.chars().count(), config.length());
    assert!(code.chars().all(|c| config.alphabet().contains(&c)));
    assert!(prefixed_id("fuzz", counter, &config).ends_with(&code));
});
