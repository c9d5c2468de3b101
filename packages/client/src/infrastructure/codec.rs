//! Decoding of inbound frames into a tagged variant.
//!
//! The wire format tells frame kinds apart by which fields are present
//! (`meta` or `plaintext`) and, for plaintext frames, by the text itself.
//! Everything downstream of [`decode`] matches on [`InboundFrame`] instead.

use serde_json::{Map, Value};

use crate::domain::{DecodeError, PresenceEvent};

use super::dto::websocket::{MetaFrameDto, OutboundFrame, PlaintextFrameDto, START_COMMAND};

const META_FIELD: &str = "meta";
const PLAINTEXT_FIELD: &str = "plaintext";

/// A decoded inbound frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundFrame {
    /// A remote participant connected or disconnected
    Presence {
        event: PresenceEvent,
        sender_addr: String,
    },
    /// Empty plaintext: the sender (re)announces its display name
    NameAnnouncement { name: String, sender_addr: String },
    /// `/start`: run the role draw
    StartCommand { name: String, sender_addr: String },
    /// Ordinary chat text
    PlaintextChat {
        text: String,
        name: String,
        sender_addr: String,
    },
    /// Anything else; carries the reason for diagnostics
    Unrecognized(DecodeError),
}

/// Decode a raw text frame. Never fails: bad input becomes [`InboundFrame::Unrecognized`].
pub fn decode(raw: &str) -> InboundFrame {
    match try_decode(raw) {
        Ok(frame) => frame,
        Err(e) => InboundFrame::Unrecognized(e),
    }
}

fn try_decode(raw: &str) -> Result<InboundFrame, DecodeError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| DecodeError::InvalidJson(e.to_string()))?;
    let Value::Object(object) = value else {
        return Err(DecodeError::NotAnObject);
    };

    if object.contains_key(META_FIELD) {
        let dto: MetaFrameDto = from_object(object, "presence")?;
        let event = match dto.meta {
            0 => PresenceEvent::Connected,
            1 => PresenceEvent::Disconnected,
            other => return Err(DecodeError::UnknownPresenceEvent(other)),
        };
        return Ok(InboundFrame::Presence {
            event,
            sender_addr: dto.sender_addr,
        });
    }

    if object.contains_key(PLAINTEXT_FIELD) {
        let dto: PlaintextFrameDto = from_object(object, "plaintext")?;
        let frame = match dto.plaintext.as_str() {
            "" => InboundFrame::NameAnnouncement {
                name: dto.name,
                sender_addr: dto.sender_addr,
            },
            START_COMMAND => InboundFrame::StartCommand {
                name: dto.name,
                sender_addr: dto.sender_addr,
            },
            _ => InboundFrame::PlaintextChat {
                text: dto.plaintext,
                name: dto.name,
                sender_addr: dto.sender_addr,
            },
        };
        return Ok(frame);
    }

    let fields: Vec<&str> = object.keys().map(String::as_str).collect();
    Err(DecodeError::UnrecognizedShape(fields.join(", ")))
}

fn from_object<T: serde::de::DeserializeOwned>(
    object: Map<String, Value>,
    shape: &'static str,
) -> Result<T, DecodeError> {
    serde_json::from_value(Value::Object(object)).map_err(|e| DecodeError::Malformed {
        shape,
        reason: e.to_string(),
    })
}

/// Encode an outbound frame as JSON text.
pub fn encode(frame: &OutboundFrame) -> Result<String, serde_json::Error> {
    serde_json::to_string(frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_presence_connected() {
        // テスト項目: meta=0 は接続通知としてデコードされる
        // when (操作):
        let frame = decode(r#"{"meta":0,"sender_addr":"A"}"#);

        // then (期待する結果):
        assert_eq!(
            frame,
            InboundFrame::Presence {
                event: PresenceEvent::Connected,
                sender_addr: "A".to_string()
            }
        );
    }

    #[test]
    fn test_decode_presence_disconnected_with_name() {
        // テスト項目: meta=1 は切断通知になり、name があっても受け付ける
        // when (操作):
        let frame = decode(r#"{"meta":1,"sender_addr":"A","name":"Alice"}"#);

        // then (期待する結果):
        assert_eq!(
            frame,
            InboundFrame::Presence {
                event: PresenceEvent::Disconnected,
                sender_addr: "A".to_string()
            }
        );
    }

    #[test]
    fn test_decode_unknown_presence_event() {
        // テスト項目: 未知の meta 値は認識できないフレームになる
        // when (操作):
        let frame = decode(r#"{"meta":7,"sender_addr":"A"}"#);

        // then (期待する結果):
        assert_eq!(
            frame,
            InboundFrame::Unrecognized(DecodeError::UnknownPresenceEvent(7))
        );
    }

    #[test]
    fn test_decode_plaintext_variants() {
        // テスト項目: plaintext の内容で名前通知・開始コマンド・チャットが区別される
        // when (操作):
        let naming = decode(r#"{"plaintext":"","name":"Alice","sender_addr":"A"}"#);
        let start = decode(r#"{"plaintext":"/start","name":"Alice","sender_addr":"A"}"#);
        let chat = decode(r#"{"plaintext":"hi","name":"Alice","sender_addr":"A"}"#);

        // then (期待する結果):
        assert_eq!(
            naming,
            InboundFrame::NameAnnouncement {
                name: "Alice".to_string(),
                sender_addr: "A".to_string()
            }
        );
        assert_eq!(
            start,
            InboundFrame::StartCommand {
                name: "Alice".to_string(),
                sender_addr: "A".to_string()
            }
        );
        assert_eq!(
            chat,
            InboundFrame::PlaintextChat {
                text: "hi".to_string(),
                name: "Alice".to_string(),
                sender_addr: "A".to_string()
            }
        );
    }

    #[test]
    fn test_decode_plaintext_without_name() {
        // テスト項目: name が無い plaintext フレームは空の名前として扱われる
        // when (操作):
        let frame = decode(r#"{"plaintext":"hi","sender_addr":"A"}"#);

        // then (期待する結果):
        assert_eq!(
            frame,
            InboundFrame::PlaintextChat {
                text: "hi".to_string(),
                name: String::new(),
                sender_addr: "A".to_string()
            }
        );
    }

    #[test]
    fn test_decode_failures_never_panic() {
        // テスト項目: 不正な入力はすべて Unrecognized になる
        // when (操作):
        let invalid_json = decode("{not json");
        let not_object = decode("[1,2,3]");
        let missing_sender = decode(r#"{"plaintext":"hi","name":"Alice"}"#);
        let public_key = decode(r#"{"public_key":{"kty":"EC"},"sender_addr":"A"}"#);

        // then (期待する結果):
        assert!(matches!(
            invalid_json,
            InboundFrame::Unrecognized(DecodeError::InvalidJson(_))
        ));
        assert_eq!(
            not_object,
            InboundFrame::Unrecognized(DecodeError::NotAnObject)
        );
        assert!(matches!(
            missing_sender,
            InboundFrame::Unrecognized(DecodeError::Malformed {
                shape: "plaintext",
                ..
            })
        ));
        assert!(matches!(
            public_key,
            InboundFrame::Unrecognized(DecodeError::UnrecognizedShape(_))
        ));
    }

    #[test]
    fn test_outbound_frame_is_read_back_by_inbound_path() {
        // テスト項目: 送信フレームに sender_addr を付けて受信側でデコードすると同じ内容になる
        // given (前提条件):
        let outbound = [
            OutboundFrame::chat("hi there", "Alice"),
            OutboundFrame::name_announcement("Alice"),
        ];

        for frame in outbound {
            // when (操作): リレーサーバーと同じく sender_addr を付与する
            let encoded = encode(&frame).unwrap();
            let mut relayed: Value = serde_json::from_str(&encoded).unwrap();
            relayed["sender_addr"] = Value::String("A".to_string());
            let decoded = decode(&relayed.to_string());

            // then (期待する結果):
            let pair = match decoded {
                InboundFrame::PlaintextChat { text, name, .. } => (text, name),
                InboundFrame::NameAnnouncement { name, .. } => (String::new(), name),
                other => panic!("unexpected frame: {other:?}"),
            };
            assert_eq!(pair, (frame.plaintext.clone(), frame.name.clone()));
        }
    }

    #[test]
    fn test_encode_start_command() {
        // テスト項目: 開始コマンドは plaintext="/start" としてエンコードされる
        // when (操作):
        let encoded = encode(&OutboundFrame::start("Alice")).unwrap();

        // then (期待する結果):
        let value: Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(value["plaintext"], "/start");
        assert_eq!(value["name"], "Alice");
        assert_eq!(value.as_object().unwrap().len(), 2);
    }
}
