//! Brightness-to-glyph quantization

/// Glyph ramp ordered darkest to brightest.
pub const GLYPH_RAMP: &[u8; 9] = b".-:|/]o8#";

/// Map a brightness in [0, 1] to a ramp glyph.
///
/// Brightness is clamped before indexing, so out-of-range shading values
/// saturate at the ends of the ramp instead of reading past it.
pub fn glyph(brightness: f32) -> u8 {
    let b = brightness.clamp(0.0, 1.0);
    let index = (b * (GLYPH_RAMP.len() - 1) as f32).round() as usize;
    GLYPH_RAMP[index]
}
