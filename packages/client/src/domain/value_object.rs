//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use std::fmt;

use super::error::ValueObjectError;

/// Path of the root room, used when no room is picked.
pub const ROOT_ROOM_PATH: &str = "/";

/// Longest room path the relay accepts (its sub-protocol token has the same length).
pub const ROOM_PATH_MAX_LEN: usize = 256;

/// Room path value object.
///
/// A room is addressed by a path such as `/north-pole`. On the wire the path is
/// passed as the WebSocket sub-protocol token, with every `/` replaced by `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomPath(String);

impl RoomPath {
    /// Create a new RoomPath from an already encoded path.
    ///
    /// # Arguments
    ///
    /// * `path` - The room path (must start with `/`, at most [`ROOM_PATH_MAX_LEN`] bytes)
    ///
    /// # Returns
    ///
    /// A Result containing the RoomPath or an error if validation fails
    pub fn new(path: String) -> Result<Self, ValueObjectError> {
        if path.is_empty() {
            return Err(ValueObjectError::RoomPathEmpty);
        }
        if !path.starts_with('/') {
            return Err(ValueObjectError::RoomPathNotAbsolute(path));
        }
        if path.len() > ROOM_PATH_MAX_LEN {
            return Err(ValueObjectError::RoomPathTooLong {
                max: ROOM_PATH_MAX_LEN,
                actual: path.len(),
            });
        }
        Ok(Self(path))
    }

    /// The root room (`/`).
    pub fn root() -> Self {
        Self(ROOT_ROOM_PATH.to_string())
    }

    /// Build a RoomPath from a room name typed by a user.
    ///
    /// The name is trimmed and percent-encoded, so `"north pole"` becomes `/north%20pole`.
    pub fn from_room_name(name: &str) -> Result<Self, ValueObjectError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValueObjectError::RoomNameEmpty);
        }
        Self::new(format!("/{}", urlencoding::encode(name)))
    }

    /// Sub-protocol token sent to the relay server.
    pub fn protocol_token(&self) -> String {
        self.0.replace('/', "-")
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RoomPath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for RoomPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who a chat entry is attributed to.
///
/// Remote senders are identified by the transport-assigned address. The local
/// user is a sentinel that renders as `self`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SenderAddress {
    /// The local user
    Local,
    /// A remote participant, by address
    Remote(String),
}

impl SenderAddress {
    /// Sentinel used for the local user.
    pub const LOCAL: &'static str = "self";

    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Local => Self::LOCAL,
            Self::Remote(address) => address,
        }
    }
}

impl fmt::Display for SenderAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds (JST).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Current time.
    pub fn now() -> Self {
        Self(santa_room_shared::time::get_jst_timestamp())
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_path_new_success() {
        // テスト項目: 有効なルームパスを作成できる
        // given (前提条件):
        let path = "/north-pole".to_string();

        // when (操作):
        let result = RoomPath::new(path);

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "/north-pole");
    }

    #[test]
    fn test_room_path_new_empty_fails() {
        // テスト項目: 空のルームパスは作成できない
        // when (操作):
        let result = RoomPath::new(String::new());

        // then (期待する結果):
        assert_eq!(result.unwrap_err(), ValueObjectError::RoomPathEmpty);
    }

    #[test]
    fn test_room_path_new_relative_fails() {
        // テスト項目: '/' で始まらないルームパスは作成できない
        // when (操作):
        let result = RoomPath::new("north-pole".to_string());

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            ValueObjectError::RoomPathNotAbsolute("north-pole".to_string())
        );
    }

    #[test]
    fn test_room_path_protocol_token() {
        // テスト項目: サブプロトコルトークンでは '/' が '-' に置き換えられる
        // given (前提条件):
        let nested = RoomPath::new("/office/party".to_string()).unwrap();
        let root = RoomPath::root();

        // then (期待する結果):
        assert_eq!(nested.protocol_token(), "-office-party");
        assert_eq!(root.protocol_token(), "-");
    }

    #[test]
    fn test_room_path_from_room_name_encodes() {
        // テスト項目: ユーザー入力のルーム名がエンコードされたパスになる
        // when (操作):
        let path = RoomPath::from_room_name("  north pole/2 ").unwrap();

        // then (期待する結果):
        assert_eq!(path.as_str(), "/north%20pole%2F2");
        assert_eq!(path.protocol_token(), "-north%20pole%2F2");
    }

    #[test]
    fn test_room_path_from_room_name_empty_fails() {
        // テスト項目: 空白だけのルーム名は拒否される
        // when (操作):
        let result = RoomPath::from_room_name("   ");

        // then (期待する結果):
        assert_eq!(result.unwrap_err(), ValueObjectError::RoomNameEmpty);
    }

    #[test]
    fn test_room_path_from_room_name_keeps_unreserved() {
        // テスト項目: 英数字と "-_.~" はエンコードされず、マルチバイト文字はエンコードされる
        // when (操作):
        let plain = RoomPath::from_room_name("North-Pole_2.0~").unwrap();
        let japanese = RoomPath::from_room_name("北").unwrap();

        // then (期待する結果):
        assert_eq!(plain.as_str(), "/North-Pole_2.0~");
        assert_eq!(japanese.as_str(), "/%E5%8C%97");
    }

    #[test]
    fn test_room_path_from_room_name_too_long_fails() {
        // テスト項目: エンコード後に上限を超えるルーム名は拒否される
        // given (前提条件): 1 文字が 3 バイトにエンコードされる名前
        let name = " ".repeat(2) + &"!".repeat(90);

        // when (操作):
        let result = RoomPath::from_room_name(&name);

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            ValueObjectError::RoomPathTooLong {
                max: ROOM_PATH_MAX_LEN,
                actual: 271,
            }
        );
    }

    #[test]
    fn test_room_path_at_max_len_succeeds() {
        // テスト項目: ちょうど上限の長さのルームパスは作成できる
        // given (前提条件):
        let path = format!("/{}", "a".repeat(ROOM_PATH_MAX_LEN - 1));

        // when (操作):
        let at_max = RoomPath::new(path.clone());
        let over_max = RoomPath::new(path + "a");

        // then (期待する結果):
        assert!(at_max.is_ok());
        assert!(matches!(
            over_max,
            Err(ValueObjectError::RoomPathTooLong { .. })
        ));
    }

    #[test]
    fn test_sender_address_display() {
        // テスト項目: ローカルユーザーは "self" として表示される
        // then (期待する結果):
        assert_eq!(SenderAddress::Local.to_string(), "self");
        assert_eq!(
            SenderAddress::Remote("127.0.0.1:5000".to_string()).to_string(),
            "127.0.0.1:5000"
        );
        assert!(SenderAddress::Local.is_local());
    }

    #[test]
    fn test_timestamp_ordering() {
        // テスト項目: タイムスタンプは順序付けできる
        // given (前提条件):
        let ts1 = Timestamp::new(1000);
        let ts2 = Timestamp::new(2000);

        // then (期待する結果):
        assert!(ts1 < ts2);
        assert_eq!(ts2.value(), 2000);
    }
}
