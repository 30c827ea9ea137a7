//! Password hashing tests.
//!
//! Argon2id hashing is deterministic to verify but salted, so two hashes of
//! the same password must differ while both verify. No server or database is
//! needed. Run with: `cargo test --test password_test`

use gigboard_backend::auth::password;

#[test]
fn hash_then_verify_roundtrip() {
    let hash = password::hash("correct horse battery staple").expect("hashing succeeds");

    assert!(hash.starts_with("$argon2"));
    assert!(password::verify("correct horse battery staple", &hash).expect("hash is readable"));
}

#[test]
fn wrong_password_is_rejected_without_error() {
    let hash = password::hash("right-password").expect("hashing succeeds");

    let verified = password::verify("wrong-password", &hash).expect("hash is readable");
    assert!(!verified);
}

#[test]
fn hashes_are_salted() {
    let a = password::hash("same-password").expect("hashing succeeds");
    let b = password::hash("same-password").expect("hashing succeeds");

    assert_ne!(a, b);
    assert!(password::verify("same-password", &a).unwrap());
    assert!(password::verify("same-password", &b).unwrap());
}

#[test]
fn garbage_hash_is_an_error_not_a_match() {
    let result = password::verify("anything", "not-a-phc-string");
    assert!(result.is_err());
}
