//! Session-token, cookie and flash-message tests.
//!
//! The Redis-backed store itself needs a live server; everything here
//! exercises the pure pieces around it. Run with:
//! `cargo test --test session_test`

use actix_web::cookie::SameSite;
use gigboard_backend::models::applications::Status;
use gigboard_backend::session::{Level, Message, new_token, session_cookie};

#[test]
fn tokens_are_opaque_128_bit_hex() {
    let token = new_token();

    assert_eq!(token.len(), 32);
    assert!(token.bytes().all(|b| b.is_ascii_hexdigit()));
}

#[test]
fn tokens_are_unique() {
    assert_ne!(new_token(), new_token());
}

#[test]
fn session_cookie_is_locked_down() {
    let cookie = session_cookie("deadbeefdeadbeefdeadbeefdeadbeef");

    assert_eq!(cookie.name(), "sid");
    assert_eq!(cookie.value(), "deadbeefdeadbeefdeadbeefdeadbeef");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
}

#[test]
fn flash_levels_render_as_css_suffixes() {
    let message = Message::success("Applied successfully!");
    let json = serde_json::to_value(&message).unwrap();

    assert_eq!(json["level"], "success");
    assert_eq!(json["text"], "Applied successfully!");

    assert_eq!(
        serde_json::to_value(Level::Info).unwrap(),
        serde_json::json!("info")
    );
    assert_eq!(
        serde_json::to_value(Level::Error).unwrap(),
        serde_json::json!("error")
    );
}

#[test]
fn flash_messages_survive_a_storage_roundtrip_in_order() {
    let pending = vec![
        Message::info("first"),
        Message::error("second"),
        Message::success("third"),
    ];

    let stored = serde_json::to_string(&pending).unwrap();
    let drained: Vec<Message> = serde_json::from_str(&stored).unwrap();

    assert_eq!(drained, pending);
}

#[test]
fn application_status_spells_itself_uppercase() {
    assert_eq!(Status::Pending.as_str(), "PENDING");
    assert_eq!(Status::Accepted.as_str(), "ACCEPTED");
    assert_eq!(Status::Rejected.as_str(), "REJECTED");

    // Flash messages and templates both rely on the stored spelling.
    assert_eq!(
        serde_json::to_value(Status::Pending).unwrap(),
        serde_json::json!("PENDING")
    );
}
