use serde::{Deserialize, Deserializer};

/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Keep "field present as null" apart from "field missing" in patch payloads.
///
/// Use with `#[serde(default, deserialize_with = "...")]`: a missing field
/// stays `None`, `null` becomes `Some(None)`.
pub fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
