use cgmath::BaseFloat;
use serde::{Deserialize, Serialize};

/// A RGBA `Color`. Each color component is a floating point value
/// with a range from 0 to 1.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq)]
pub struct Color<S> {
    pub r: S,
    pub g: S,
    pub b: S,
    pub a: S,
}

impl From<Color<f32>> for u32 {
    fn from(color: Color<f32>) -> u32 {
        let color = color.clip();
        let mut encoded = ((color.r * 255.0) as u32) << 24;
        encoded |= ((color.g * 255.0) as u32) << 16;
        encoded |= ((color.b * 255.0) as u32) << 8;
        encoded |= (color.a * 255.0) as u32;
        encoded
    }
}

impl<S: BaseFloat> From<u32> for Color<S> {
    fn from(encoded: u32) -> Self {
        let max = S::from(255.0).unwrap();
        Color::new(
            S::from((encoded >> 24) & 0xFF).unwrap() / max,
            S::from((encoded >> 16) & 0xFF).unwrap() / max,
            S::from((encoded >> 8) & 0xFF).unwrap() / max,
            S::from(encoded & 0xFF).unwrap() / max,
        )
    }
}

impl<S: BaseFloat> Color<S> {
    pub fn new(r: S, g: S, b: S, a: S) -> Self {
        Color { r, g, b, a }
    }

    /// Creates an opaque `Color` from a u32 encoded `RGB` hex triplet, like `0xDBDBDB`.
    pub fn from_hex(encoded: u32) -> Self {
        let max = S::from(255.0).unwrap();
        Color::new(
            S::from((encoded >> 16) & 0xFF).unwrap() / max,
            S::from((encoded >> 8) & 0xFF).unwrap() / max,
            S::from(encoded & 0xFF).unwrap() / max,
            S::one(),
        )
    }

    /// Encodes the RGB channels into a hex triplet. Alpha is dropped.
    pub fn to_hex(&self) -> u32 {
        let v = self.clip();
        let max = S::from(255.0).unwrap();
        let channel = |c: S| (c * max).round().to_u32().unwrap_or(0);
        (channel(v.r) << 16) | (channel(v.g) << 8) | channel(v.b)
    }

    /// Clip to [0.0, 1.0] range.
    pub fn clip(&self) -> Self {
        let mut color = *self;
        color.r = self.r.max(S::zero()).min(S::one());
        color.g = self.g.max(S::zero()).min(S::one());
        color.b = self.b.max(S::zero()).min(S::one());
        color.a = self.a.max(S::zero()).min(S::one());
        color
    }

    /// Multiplies every channel with `rhs`.
    pub fn modulate(&self, rhs: Self) -> Self {
        Color::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b, self.a * rhs.a)
    }

    /// Truncate alpha channel.
    pub fn rgb(&self) -> [S; 3] {
        [self.r, self.g, self.b]
    }

    pub fn rgba(&self) -> [S; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl<S: BaseFloat> Color<S> {
    pub fn white() -> Self {
        Color::new(S::one(), S::one(), S::one(), S::one())
    }

    pub fn gray() -> Self {
        let half = S::from(0.5).unwrap();
        Color::new(half, half, half, S::one())
    }

    pub fn black() -> Self {
        Color::new(S::zero(), S::zero(), S::zero(), S::one())
    }

    pub fn red() -> Self {
        Color::new(S::one(), S::zero(), S::zero(), S::one())
    }

    pub fn yellow() -> Self {
        Color::new(S::one(), S::one(), S::zero(), S::one())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hex() {
        let c = Color::<f32>::from_hex(0xFF0000);
        assert_eq!(c, Color::red());

        let c = Color::<f32>::from_hex(0xDBDBDB);
        assert_eq!(c.to_hex(), 0xDBDBDB);
        assert_eq!(c.a, 1.0);

        assert_eq!(Color::<f32>::white().to_hex(), 0xFFFFFF);
    }

    #[test]
    fn encode() {
        let v: u32 = Color::<f32>::white().into();
        assert_eq!(v, 0xFFFF_FFFF);
        assert_eq!(Color::<f32>::from(0xFF00_00FF), Color::red());
    }
}
