use compact_str::{CompactString, format_compact};
use hotaru_common::{BulbPayload, Color, PowerState, WireNumber, color};

pub fn encode(rgb: &str) -> BulbPayload {
    let mut parts = rgb.split(',').map(component);
    let r = parts.next().unwrap_or(f64::NAN);
    let g = parts.next().unwrap_or(f64::NAN);
    let b = parts.next().unwrap_or(f64::NAN);

    let luma = color::luma(r, g, b);

    BulbPayload {
        state: Some(PowerState::from(luma != 0.0 && !luma.is_nan())),
        brightness: Some(WireNumber(luma)),
        color: Some(Color::Rgb { r: WireNumber(r), g: WireNumber(g), b: WireNumber(b) }),
        ..Default::default()
    }
}

// unparseable components become NaN and end up as null on the wire
fn component(s: &str) -> f64 {
    s.trim().parse().unwrap_or(f64::NAN)
}

pub fn decode(payload: &BulbPayload) -> Option<CompactString> {
    // absent brightness means full brightness
    let brightness = payload.brightness.map_or(254.0, |wire| wire.0);

    match payload.color {
        Some(Color::Xy { x, y }) => {
            let (r, g, b) = color::xy_to_rgb(x, y, brightness);
            Some(format_compact!("{r},{g},{b}"))
        }
        Some(Color::Rgb { r, g, b }) => {
            Some(format_compact!("{},{},{}", channel(r), channel(g), channel(b)))
        }
        None => None,
    }
}

fn channel(value: WireNumber) -> u8 {
    let byte = value.0.round();
    if byte.is_finite() { byte.clamp(0.0, 255.0) as u8 } else { 0 }
}
