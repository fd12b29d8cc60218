use super::*;
use serde_json::json;

#[test]
fn presence_serializes_with_tag() {
    let event = ServerEvent::Presence { online: 3 };
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value, json!({"type": "presence", "online": 3}));
}

#[test]
fn connected_serializes_with_tag() {
    let event = ServerEvent::Connected {
        identity: "abc".into(),
        avatar_url: "https://robohash.org/abc?bgset=bg2".into(),
    };
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["type"], "connected");
    assert_eq!(value["identity"], "abc");
}

#[test]
fn messages_empty_list_serializes() {
    let event = ServerEvent::Messages { messages: vec![] };
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["type"], "messages");
    assert_eq!(value["messages"], json!([]));
}

#[test]
fn client_post_parses() {
    let event: ClientEvent = serde_json::from_str(r#"{"type":"post","text":"hi"}"#).unwrap();
    let ClientEvent::Post { text } = event;
    assert_eq!(text, "hi");
}

#[test]
fn client_unknown_type_is_error() {
    let result = serde_json::from_str::<ClientEvent>(r#"{"type":"shout","text":"hi"}"#);
    assert!(result.is_err());
}

#[test]
fn warning_round_trips() {
    let event = ServerEvent::Warning { message: "message text is empty".into() };
    let json = serde_json::to_string(&event).unwrap();
    let restored: ServerEvent = serde_json::from_str(&json).unwrap();
    let ServerEvent::Warning { message } = restored else {
        panic!("expected warning event");
    };
    assert_eq!(message, "message text is empty");
}
