use serde::{Deserialize, Serialize};

/// An sRGB color stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Build a color from a packed `0xRRGGBB` literal.
    pub const fn from_hex(rgb: u32) -> Self {
        Self {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
        }
    }

    /// CSS hex notation, e.g. `#ff6b6b`.
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Two-stop linear gradient painted on the ball and its trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradient {
    pub angle_deg: u16,
    pub from: Color,
    pub to: Color,
}

impl Gradient {
    const fn diagonal(from: u32, to: u32) -> Self {
        Self {
            angle_deg: 45,
            from: Color::from_hex(from),
            to: Color::from_hex(to),
        }
    }

    /// CSS `background` value for this gradient.
    pub fn to_css(&self) -> String {
        format!(
            "linear-gradient({}deg, {}, {})",
            self.angle_deg,
            self.from.to_css(),
            self.to.to_css()
        )
    }
}

/// Gradients the ball cycles through on every bounce.
pub const PALETTE: &[Gradient] = &[
    Gradient::diagonal(0xff6b6b, 0x4ecdc4),
    Gradient::diagonal(0xa8e6cf, 0xff8b94),
    Gradient::diagonal(0xffd93d, 0x6bcf7f),
    Gradient::diagonal(0x74b9ff, 0x0984e3),
    Gradient::diagonal(0xfd79a8, 0xfdcb6e),
    Gradient::diagonal(0x6c5ce7, 0xa29bfe),
    Gradient::diagonal(0xfd79a8, 0xe84393),
    Gradient::diagonal(0x00b894, 0x00cec9),
    Gradient::diagonal(0xe17055, 0x81ecec),
    Gradient::diagonal(0xfab1a0, 0x00b894),
    Gradient::diagonal(0x55a3ff, 0xff6b9d),
    Gradient::diagonal(0xff9ff3, 0xf368e0),
    Gradient::diagonal(0x3742fa, 0x7bed9f),
    Gradient::diagonal(0xff6348, 0x70a1ff),
    Gradient::diagonal(0x5f27cd, 0x00d2d3),
    Gradient::diagonal(0xff9f43, 0x10ac84),
    Gradient::diagonal(0xee5a52, 0x0abde3),
    Gradient::diagonal(0xc44569, 0xf8b500),
    Gradient::diagonal(0x40407a, 0x706fd3),
    Gradient::diagonal(0x33d9b2, 0xff5252),
    Gradient::diagonal(0x218c74, 0xff9f43),
    Gradient::diagonal(0xb33771, 0x3d5afe),
    Gradient::diagonal(0xff3838, 0x00e676),
    Gradient::diagonal(0x8c7ae6, 0x00d4aa),
];

/// Look up a palette entry, wrapping out-of-range indices.
pub fn gradient(index: usize) -> &'static Gradient {
    &PALETTE[index % PALETTE.len()]
}
