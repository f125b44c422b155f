//! Tests for contact document mapping.

use crate::contact::{
    adapters::document::ContactDocument,
    domain::{ContactId, NewContact, UserColor},
};
use crate::store::Fields;
use rstest::rstest;
use serde_json::json;

fn fields(value: serde_json::Value) -> Fields {
    match value {
        serde_json::Value::Object(map) => map,
        _ => Fields::new(),
    }
}

#[rstest]
fn decoding_fills_defaults_and_normalizes_values() {
    let document = ContactDocument::from_fields(&fields(json!({
        "name": "anna bell",
        "phone": 491234,
        "userColor": "not-a-colour"
    })))
    .expect("lenient decode");

    let contact = document.into_contact(ContactId::new("c1").expect("valid id"));

    assert_eq!(contact.name(), "Anna Bell");
    assert_eq!(contact.email(), "");
    assert_eq!(contact.phone(), "491234");
    assert!(!contact.is_available());
    assert_eq!(contact.user_color(), None);
}

#[rstest]
fn decoding_rejects_incompatible_types() {
    let result = ContactDocument::from_fields(&fields(json!({"isAvailable": "yes"})));
    assert!(result.is_err());
}

#[rstest]
fn encoding_uses_camel_case_keys() {
    let contact = NewContact {
        name: "Anna Bell".to_owned(),
        email: "anna@example.com".to_owned(),
        phone: String::new(),
        is_available: true,
        user_color: Some(UserColor::new("#ff4646").expect("valid colour")),
    };

    let encoded = ContactDocument::from(&contact)
        .to_fields()
        .expect("encode contact");

    assert_eq!(encoded.get("isAvailable"), Some(&json!(true)));
    assert_eq!(encoded.get("userColor"), Some(&json!("#ff4646")));
    assert_eq!(encoded.get("name"), Some(&json!("Anna Bell")));
}
