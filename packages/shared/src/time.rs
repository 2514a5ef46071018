use chrono::{DateTime, SecondsFormat, Utc};

/// Get current Unix timestamp (milliseconds, UTC)
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format a Unix timestamp in milliseconds as RFC 3339 (UTC).
///
/// Out-of-range values fall back to the Unix epoch.
pub fn millis_to_rfc3339(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .unwrap_or_default()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_millis_is_after_2020() {
        // テスト項目: 現在時刻がミリ秒単位で取得できる
        // 2020-01-01T00:00:00Z
        assert!(now_millis() > 1_577_836_800_000);
    }

    #[test]
    fn test_millis_to_rfc3339() {
        // テスト項目: ミリ秒タイムスタンプを RFC 3339 形式に変換できる
        // given (前提条件):
        let millis = 1_672_498_800_123;

        // when (操作):
        let formatted = millis_to_rfc3339(millis);

        // then (期待する結果):
        assert_eq!(formatted, "2022-12-31T15:00:00.123Z");
    }

    #[test]
    fn test_millis_to_rfc3339_out_of_range_falls_back_to_epoch() {
        // テスト項目: 範囲外の値はエポックにフォールバックする
        assert_eq!(millis_to_rfc3339(i64::MAX), "1970-01-01T00:00:00.000Z");
    }
}
