//! Packed ARGB8888 color helpers.
//!
//! Every color in the pixel buffer is a `0xAARRGGBB` word with the alpha
//! byte fixed at `0xFF`. Helpers here pack channel triplets and apply flat
//! shading brightness.

/// Night-sky clear color used by the viewer (10, 10, 30).
pub const BACKGROUND: u32 = 0xFF0A0A1E;
/// Wireframe line color (230, 230, 230).
pub const WIREFRAME: u32 = 0xFFE6E6E6;
pub const WHITE: u32 = 0xFFFFFFFF;
pub const RED: u32 = 0xFFFF0000;

/// Packs an RGB triplet into an opaque ARGB8888 word.
#[inline]
pub fn pack_color(r: u8, g: u8, b: u8) -> u32 {
    0xFF00_0000 | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Packs an RGB triplet scaled by a flat-shading brightness factor.
///
/// Brightness is clamped to [0, 1] before use and each scaled channel is
/// rounded and clamped to the byte range.
#[inline]
pub fn pack_shaded(r: u8, g: u8, b: u8, brightness: f32) -> u32 {
    let brightness = brightness.clamp(0.0, 1.0);
    let scale = |c: u8| (c as f32 * brightness).round().clamp(0.0, 255.0) as u32;
    0xFF00_0000 | (scale(r) << 16) | (scale(g) << 8) | scale(b)
}

/// Splits a packed ARGB word back into its (r, g, b) bytes.
#[inline]
pub fn unpack_color(color: u32) -> (u8, u8, u8) {
    (
        ((color >> 16) & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        (color & 0xFF) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_unpack_round_trip() {
        let packed = pack_color(12, 200, 99);
        assert_eq!(packed >> 24, 0xFF);
        assert_eq!(unpack_color(packed), (12, 200, 99));
    }

    #[test]
    fn full_brightness_is_identity() {
        assert_eq!(pack_shaded(220, 180, 40, 1.0), pack_color(220, 180, 40));
    }

    #[test]
    fn zero_brightness_is_black() {
        assert_eq!(pack_shaded(255, 255, 255, 0.0), pack_color(0, 0, 0));
    }

    #[test]
    fn brightness_is_clamped() {
        assert_eq!(pack_shaded(100, 100, 100, 2.0), pack_color(100, 100, 100));
        assert_eq!(pack_shaded(100, 100, 100, -0.5), pack_color(0, 0, 0));
    }

    #[test]
    fn half_brightness_rounds_channels() {
        assert_eq!(pack_shaded(255, 0, 101, 0.5), pack_color(128, 0, 51));
    }
}
