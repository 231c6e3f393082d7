use hotaru_common::{BulbPayload, WireNumber};

pub fn encode(mireds: f64) -> BulbPayload {
    let wire = ((mireds - 140.0) * 204.0 / 360.0 + 250.0).round();

    BulbPayload { color_temp: Some(WireNumber(wire)), ..Default::default() }
}

pub fn decode(payload: &BulbPayload) -> Option<f64> {
    match payload.color_temp {
        Some(WireNumber(wire)) if wire != 0.0 => {
            Some(((wire - 250.0) * 360.0 / 204.0 + 140.0).round())
        }
        _ => None,
    }
}
