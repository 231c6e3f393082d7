use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Value of an accessory property on the smart-home side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AccessoryValue {
    Number(f64),
    Boolean(bool),
    /// Used for `"r,g,b"` color strings
    Text(CompactString),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deser_values() {
        assert_eq!(
            serde_json::from_value::<AccessoryValue>(serde_json::json!(23.5)).unwrap(),
            AccessoryValue::Number(23.5)
        );
        assert_eq!(
            serde_json::from_value::<AccessoryValue>(serde_json::json!(true)).unwrap(),
            AccessoryValue::Boolean(true)
        );
        assert_eq!(
            serde_json::from_value::<AccessoryValue>(serde_json::json!("255,0,0")).unwrap(),
            AccessoryValue::Text("255,0,0".into())
        );
    }
}
