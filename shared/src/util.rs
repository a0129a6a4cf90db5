/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Keep only the ASCII digits of a phone number.
///
/// `"(555) 123-4567"` and `"555.123.4567"` both become `"5551234567"`,
/// which is the form phone searches compare on.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}
