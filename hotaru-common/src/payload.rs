//! Wire payloads for zigbee2mqtt-style smart bulbs.
//!
//! Every field is optional in both directions; an absent field means "no
//! change" on the way in and "no update" on the way out.
//!
//! # Example
//!
//! ```plain
//! zigbee2mqtt/office_lamp     -> {"state":"ON","brightness":254,"color":{"x":0.3127,"y":0.329}}
//! zigbee2mqtt/office_lamp/set <- {"state":"ON","brightness":127}
//! ```

use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulbPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<PowerState>,
    /// Brightness 0-254
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<WireNumber>,
    /// Color temperature in the bulb's native mired range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_temp: Option<WireNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PowerState {
    On,
    Off,
}

impl PowerState {
    pub fn is_on(&self) -> bool {
        matches!(self, PowerState::On)
    }
}

impl From<bool> for PowerState {
    fn from(on: bool) -> Self {
        if on { PowerState::On } else { PowerState::Off }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    /// Red, green, blue, each 0-255
    Rgb { r: WireNumber, g: WireNumber, b: WireNumber },
    /// CIE 1931 color space x,y coordinates (0.0-1.0)
    Xy { x: f64, y: f64 },
}

/// Numeric wire value.
///
/// Serializes as a JSON integer; non-finite values become `null`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct WireNumber(pub f64);

impl Serialize for WireNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_finite() {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_unit()
        }
    }
}
