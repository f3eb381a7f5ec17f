use serde::de::IntoDeserializer as _;
use serde::{Deserialize, Deserializer};

/// HTML forms submit absent optional fields as `""`; treat that the
/// same as the field being missing.
pub(crate) fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) if !s.trim().is_empty() => T::deserialize(s.trim().into_deserializer()).map(Some),
        _ => Ok(None),
    }
}
