use hotaru_common::{BulbPayload, PowerState, WireNumber};

pub fn encode(level: f64) -> BulbPayload {
    let wire = (level * 2.54).round();

    BulbPayload {
        state: Some(PowerState::from(wire != 0.0)),
        brightness: Some(WireNumber(wire)),
        ..Default::default()
    }
}

pub fn decode(payload: &BulbPayload) -> Option<f64> {
    match payload.brightness {
        // zero is indistinguishable from "no brightness" on the wire
        Some(WireNumber(wire)) if wire != 0.0 => Some((wire / 2.54).round()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format() {
        assert_eq!(
            serde_json::to_value(encode(100.0)).unwrap(),
            serde_json::json!({ "state": "ON", "brightness": 254 })
        );
        assert_eq!(
            serde_json::to_value(encode(50.0)).unwrap(),
            serde_json::json!({ "state": "ON", "brightness": 127 })
        );
        assert_eq!(
            serde_json::to_value(encode(0.0)).unwrap(),
            serde_json::json!({ "state": "OFF", "brightness": 0 })
        );
    }

    #[test]
    fn level_updates() {
        let payload = |wire| BulbPayload {
            brightness: Some(WireNumber(wire)),
            ..Default::default()
        };

        assert_eq!(decode(&payload(254.0)), Some(100.0));
        assert_eq!(decode(&payload(127.0)), Some(50.0));
        assert_eq!(decode(&payload(0.0)), None);
        assert_eq!(decode(&BulbPayload::default()), None);
    }

    #[test]
    fn roundtrip_is_exact() {
        for level in 1..=100 {
            assert_eq!(decode(&encode(level as f64)), Some(level as f64));
        }

        // zero round-trips to "no update", not to zero
        assert_eq!(decode(&encode(0.0)), None);
    }
}
