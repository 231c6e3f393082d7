//! CIE 1931 chromaticity to sRGB conversion.

/// Convert CIE 1931 `(x, y)` chromaticity plus a 0-254 brightness to an
/// 8-bit sRGB triple.
///
/// Brightness maps to the Y tristimulus value; the result is gamma-encoded
/// and clamped, so out-of-gamut chromaticities come back saturated rather
/// than failing.
pub fn xy_to_rgb(x: f64, y: f64, brightness: f64) -> (u8, u8, u8) {
    // xyY to XYZ
    let yy = brightness / 254.0;
    let xx = yy / y * x;
    let zz = yy / y * (1.0 - x - y);

    // XYZ to linear sRGB, D65 white point
    let r = 3.2406 * xx - 1.5372 * yy - 0.4986 * zz;
    let g = -0.9689 * xx + 1.8758 * yy + 0.0415 * zz;
    let b = 0.0557 * xx - 0.2040 * yy + 1.0570 * zz;

    (channel(r), channel(g), channel(b))
}

fn channel(linear: f64) -> u8 {
    let srgb = if linear <= 0.0031308 {
        12.92 * linear
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    };

    let byte = (srgb * 255.0).round();
    if byte.is_finite() { byte.clamp(0.0, 255.0) as u8 } else { 0 }
}

/// Perceived brightness of an RGB triple, Rec. 601 weights, rounded.
///
/// NaN components propagate into the result.
pub fn luma(r: f64, g: f64, b: f64) -> f64 {
    (0.299 * r + 0.587 * g + 0.114 * b).round()
}
