//! Per-property translation between accessory values and bulb payloads.
//!
//! Each property maps one accessory-side value onto the fields of a wire
//! payload and back:
//!
//! ```plain
//! on                true      <-> {"state":"ON"}
//! brightness        100       <-> {"state":"ON","brightness":254}
//! colorTemperature  320       <-> {"color_temp":352}
//! RGB               "255,0,0" <-> {"state":"ON","brightness":76,"color":{"r":255,"g":0,"b":0}}
//! ```

use core::{fmt, str::FromStr};

use hotaru_common::{AccessoryValue, BulbPayload};

use crate::{Error, Result};

pub mod brightness;
pub mod color_temp;
pub mod on;
pub mod rgb;

/// Properties the codec can translate for a bulb accessory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    On,
    Brightness,
    /// Color temperature in mireds
    ColorTemperature,
    /// Color as an `"r,g,b"` string
    Rgb,
}

impl Property {
    pub const ALL: [Property; 4] =
        [Property::On, Property::Brightness, Property::ColorTemperature, Property::Rgb];

    /// Identifier used by the host framework
    pub fn name(&self) -> &'static str {
        match self {
            Property::On => "on",
            Property::Brightness => "brightness",
            Property::ColorTemperature => "colorTemperature",
            Property::Rgb => "RGB",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Property {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "on" => Ok(Property::On),
            "brightness" => Ok(Property::Brightness),
            "colorTemperature" => Ok(Property::ColorTemperature),
            "RGB" => Ok(Property::Rgb),
            _ => Err(Error::UnknownProperty(s.into())),
        }
    }
}

/// Encode one accessory value into the payload updating its property.
pub fn encode(property: Property, value: &AccessoryValue) -> Result<BulbPayload> {
    match property {
        Property::On => match value {
            AccessoryValue::Boolean(value) => Ok(on::encode(*value)),
            _ => Err(Error::UnexpectedValue { property, expected: "boolean" }),
        },
        Property::Brightness => match value {
            AccessoryValue::Number(value) => Ok(brightness::encode(*value)),
            _ => Err(Error::UnexpectedValue { property, expected: "number" }),
        },
        Property::ColorTemperature => match value {
            AccessoryValue::Number(value) => Ok(color_temp::encode(*value)),
            _ => Err(Error::UnexpectedValue { property, expected: "number" }),
        },
        Property::Rgb => match value {
            AccessoryValue::Text(value) => Ok(rgb::encode(value)),
            _ => Err(Error::UnexpectedValue { property, expected: "string" }),
        },
    }
}

/// Extract one property's update from a payload, if it carries one.
pub fn decode(property: Property, payload: &BulbPayload) -> Option<AccessoryValue> {
    match property {
        Property::On => on::decode(payload).map(AccessoryValue::Boolean),
        Property::Brightness => brightness::decode(payload).map(AccessoryValue::Number),
        Property::ColorTemperature => color_temp::decode(payload).map(AccessoryValue::Number),
        Property::Rgb => rgb::decode(payload).map(AccessoryValue::Text),
    }
}
