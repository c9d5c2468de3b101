use chrono::{DateTime, FixedOffset, Offset, Utc};

/// JST is UTC+9
const JST_OFFSET_SECS: i32 = 9 * 3600;

fn jst() -> FixedOffset {
    FixedOffset::east_opt(JST_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Get current Unix timestamp in JST (milliseconds)
pub fn get_jst_timestamp() -> i64 {
    let now_jst: DateTime<FixedOffset> = Utc::now().with_timezone(&jst());
    now_jst.timestamp_millis()
}

/// Render a Unix timestamp (milliseconds) as an RFC 3339 string in JST.
///
/// Out-of-range values render as the Unix epoch.
pub fn timestamp_to_jst_rfc3339(timestamp_millis: i64) -> String {
    to_jst(timestamp_millis).to_rfc3339()
}

/// Render a Unix timestamp (milliseconds) as `HH:MM:SS` in JST.
pub fn timestamp_to_jst_clock(timestamp_millis: i64) -> String {
    to_jst(timestamp_millis).format("%H:%M:%S").to_string()
}

fn to_jst(timestamp_millis: i64) -> DateTime<FixedOffset> {
    DateTime::from_timestamp_millis(timestamp_millis)
        .unwrap_or(DateTime::UNIX_EPOCH)
        .with_timezone(&jst())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_to_jst_rfc3339() {
        // テスト項目: UNIX エポックが JST の RFC 3339 文字列になる
        // when (操作):
        let rendered = timestamp_to_jst_rfc3339(0);

        // then (期待する結果):
        assert_eq!(rendered, "1970-01-01T09:00:00+09:00");
    }

    #[test]
    fn test_timestamp_to_jst_clock() {
        // テスト項目: 時刻部分だけを JST で表示できる
        // given (前提条件): 2023-01-01T00:00:00+09:00
        let value = 1_672_498_800_000i64;

        // when (操作):
        let rendered = timestamp_to_jst_clock(value);

        // then (期待する結果):
        assert_eq!(rendered, "00:00:00");
    }

    #[test]
    fn test_get_jst_timestamp_is_positive() {
        // テスト項目: 現在時刻のタイムスタンプが取得できる
        // when (操作):
        let now = get_jst_timestamp();

        // then (期待する結果):
        assert!(now > 1_672_498_800_000);
    }
}
