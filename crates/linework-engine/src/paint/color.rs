/// Straight RGB color with raw 8-bit channels.
///
/// Invariant:
/// - channel values are stored exactly as picked (`0`–`255`); the vertex
///   stream carries these raw values and only the renderer normalizes them.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Parses a `#rrggbb` hex string (leading `#` optional, case-insensitive).
    ///
    /// Returns `None` for malformed input; callers should carry forward their
    /// last valid color rather than invent one.
    pub fn from_hex(hex: &str) -> Option<Rgb> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Rgb { r, g, b })
    }

    /// Formats as `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Converts raw channels to the `[0, 1]` floats the GPU pipeline expects.
    ///
    /// The `(c - 255)/255 + 1` form is kept from the reference pipeline; it is
    /// algebraically `c/255` but must stay bit-for-bit identical for visual
    /// fidelity of existing scenes.
    #[inline]
    pub fn to_linear(self) -> [f32; 3] {
        let n = |c: u8| (c as f32 - 255.0) / 255.0 + 1.0;
        [n(self.r), n(self.g), n(self.b)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── hex parsing ───────────────────────────────────────────────────────

    #[test]
    fn from_hex_with_hash() {
        assert_eq!(Rgb::from_hex("#ff8000"), Some(Rgb::new(255, 128, 0)));
    }

    #[test]
    fn from_hex_without_hash() {
        assert_eq!(Rgb::from_hex("00ff00"), Some(Rgb::new(0, 255, 0)));
    }

    #[test]
    fn from_hex_uppercase() {
        assert_eq!(Rgb::from_hex("#A0B1C2"), Some(Rgb::new(0xa0, 0xb1, 0xc2)));
    }

    #[test]
    fn from_hex_rejects_short_input() {
        assert_eq!(Rgb::from_hex("#fff"), None);
    }

    #[test]
    fn from_hex_rejects_non_hex_digits() {
        assert_eq!(Rgb::from_hex("#zzzzzz"), None);
    }

    #[test]
    fn hex_round_trip() {
        let c = Rgb::new(18, 52, 86);
        assert_eq!(Rgb::from_hex(&c.to_hex()), Some(c));
    }

    // ── normalization ─────────────────────────────────────────────────────

    #[test]
    fn to_linear_endpoints() {
        assert_eq!(Rgb::BLACK.to_linear(), [0.0, 0.0, 0.0]);
        assert_eq!(Rgb::WHITE.to_linear(), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn to_linear_matches_simple_division() {
        let [r, _, _] = Rgb::new(64, 0, 0).to_linear();
        assert!((r - 64.0 / 255.0).abs() < 1e-6);
    }
}
