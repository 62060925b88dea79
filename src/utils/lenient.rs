use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;

/// Accepts integers, integral floats and numeric strings; anything else is `None`.
pub fn deserialize_lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<JsonValue>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(lenient_u32))
}

pub fn lenient_u32(value: &JsonValue) -> Option<u32> {
    match value {
        JsonValue::Number(number) => number
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u32::MAX as f64)
                    .map(|f| f as u32)
            }),
        JsonValue::String(raw) => parse_u32(raw),
        _ => None,
    }
}

/// Query-string flavour of the same rule: blank or malformed input is absent.
pub fn parse_u32(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}
