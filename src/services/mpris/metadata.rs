use std::collections::HashMap;

use zbus::zvariant::{OwnedValue, Value};

use super::{MediaError, Metadata, PlayerId};

const ALBUM_KEY: &str = "xesam:album";
const TITLE_KEY: &str = "xesam:title";
const ARTIST_KEY: &str = "xesam:artist";
const TRACK_NUMBER_KEY: &str = "xesam:trackNumber";

/// Separator placed between multiple artist names
pub const ARTIST_SEPARATOR: &str = ",";

impl Metadata {
    /// Decode the `Metadata` property of an MPRIS player.
    ///
    /// Missing keys become empty strings.
    ///
    /// # Errors
    /// Returns `MediaError::MalformedMetadata` if the value is not a
    /// dictionary or a known key holds a value of the wrong shape
    pub fn from_property(player: &PlayerId, value: OwnedValue) -> Result<Self, MediaError> {
        let map = HashMap::<String, OwnedValue>::try_from(value)
            .map_err(|e| MediaError::malformed(player, format!("expected a{{sv}}: {e}")))?;

        let text = |key: &str| -> Result<String, MediaError> {
            match map.get(key) {
                None => Ok(String::new()),
                Some(value) => scalar_text(value)
                    .ok_or_else(|| MediaError::malformed(player, format!("{key} is not a scalar"))),
            }
        };

        let artist = match map.get(ARTIST_KEY) {
            None => String::new(),
            Some(value) => artist_names(value)
                .ok_or_else(|| {
                    MediaError::malformed(player, format!("{ARTIST_KEY} is not a list of strings"))
                })?
                .join(ARTIST_SEPARATOR),
        };

        Ok(Self {
            album: text(ALBUM_KEY)?,
            title: text(TITLE_KEY)?,
            artist,
            track_number: text(TRACK_NUMBER_KEY)?,
        })
    }
}

/// Text form of a basic D-Bus value, looking through variant wrappers
pub(crate) fn scalar_text(value: &Value<'_>) -> Option<String> {
    match value {
        Value::Value(inner) => scalar_text(inner),
        Value::Str(s) => Some(s.to_string()),
        Value::ObjectPath(path) => Some(path.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::U8(n) => Some(n.to_string()),
        Value::I16(n) => Some(n.to_string()),
        Value::U16(n) => Some(n.to_string()),
        Value::I32(n) => Some(n.to_string()),
        Value::U32(n) => Some(n.to_string()),
        Value::I64(n) => Some(n.to_string()),
        Value::U64(n) => Some(n.to_string()),
        Value::F64(n) => Some(n.to_string()),
        _ => None,
    }
}

fn artist_names(value: &Value<'_>) -> Option<Vec<String>> {
    match value {
        Value::Value(inner) => artist_names(inner),
        Value::Str(s) => Some(vec![s.to_string()]),
        Value::Array(array) => array
            .iter()
            .map(|artist| match artist {
                Value::Value(inner) => scalar_text(inner),
                Value::Str(s) => Some(s.to_string()),
                _ => None,
            })
            .collect(),
        _ => None,
    }
}
