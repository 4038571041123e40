//! Frontend Models
//!
//! Data structures matching the host resource's JSON.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// World-space vector (position or zone size)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[cfg(test)]
impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Stash record as delivered by the host (matches host storage)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StashRecord {
    pub stash_id: String,
    pub label: String,
    /// Whole numbers as the form's integer parse produces them; may be negative
    pub slots: i64,
    /// Capacity in kilograms
    pub weight: i64,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub rotation: Option<f64>,
    pub coords: Vec3,
    pub size: Vec3,
    #[serde(default)]
    pub debug: bool,
}

/// Partially parsed position triple from a form.
///
/// Components that did not parse are sent as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PayloadVec3 {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

/// Body of `createStash` / `updateStash`.
///
/// Numbers are whatever the form fields parse to; nothing is validated or
/// coerced here, the host decides what to accept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StashPayload {
    pub stash_id: String,
    pub label: String,
    pub slots: Option<i64>,
    pub weight: Option<i64>,
    pub code: String,
    pub rotation: Option<f64>,
    pub coords: PayloadVec3,
    pub size: PayloadVec3,
    pub debug: bool,
}

/// Acknowledgement returned by mutating endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommandResult {
    #[serde(default, deserialize_with = "truthy")]
    pub success: bool,
}

/// Accept any JSON value for `success` and interpret it like a browser would.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => b,
        serde_json::Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(false),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    })
}

/// Decode a stash list sent by the host.
///
/// Lua has no distinct empty array, so an empty list may arrive as `{}`;
/// `null` is read as empty too. Records that do not decode (the host stores
/// whatever a form sent, `null` numbers included) are skipped with a warning
/// so the rest of the list still shows.
pub fn decode_snapshot(value: serde_json::Value) -> Result<Vec<StashRecord>, serde_json::Error> {
    match value {
        serde_json::Value::Null => Ok(Vec::new()),
        serde_json::Value::Object(map) if map.is_empty() => Ok(Vec::new()),
        serde_json::Value::Array(items) => Ok(items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!("[MODELS] skipping stash #{}: {}", index, e);
                    None
                }
            })
            .collect()),
        other => Err(serde_json::Error::custom(format!(
            "expected a stash list, got {}",
            other
        ))),
    }
}

/// Snapshot carried by a push message. An unreadable snapshot never costs
/// the rest of the message, it is treated as absent.
fn optional_snapshot<'de, D>(deserializer: D) -> Result<Option<Vec<StashRecord>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(decode_snapshot(value)
        .map_err(|e| log::warn!("[MODELS] ignoring pushed snapshot: {}", e))
        .ok())
}

/// Messages pushed by the host into the page
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action")]
pub enum HostMessage {
    #[serde(rename = "openUI")]
    OpenUi {
        #[serde(default, deserialize_with = "optional_snapshot")]
        stashes: Option<Vec<StashRecord>>,
        #[serde(default)]
        lang: Option<String>,
    },
    #[serde(rename = "closeUI")]
    CloseUi,
    #[serde(rename = "refreshStashes")]
    RefreshStashes {
        #[serde(default, deserialize_with = "optional_snapshot")]
        stashes: Option<Vec<StashRecord>>,
    },
    #[serde(rename = "setLanguage")]
    SetLanguage {
        #[serde(default)]
        lang: Option<String>,
    },
}
