use inlinable_string::InlinableString;

use hydrogen::math::prelude::Color;

/// How a surface reacts to lights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shading {
    /// Diffuse only, lit by ambient and directional lights.
    Lambert,
    /// Ignores lights and shows its color as is.
    Unlit,
}

/// A named reference to an image. Images are never decoded; the renderers shade
/// with `fallback` instead, which approximates the average color of the image.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureRef {
    pub name: InlinableString,
    pub fallback: Color<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Tint that multiplies the texture.
    pub color: Color<f32>,
    pub texture: Option<TextureRef>,
    pub shading: Shading,
    /// Draws back faces too, which are shaded with flipped normals.
    pub double_sided: bool,
}

impl Default for Material {
    fn default() -> Self {
        Material::lambert(Color::white())
    }
}

impl Material {
    pub fn lambert(color: Color<f32>) -> Self {
        Material {
            color,
            texture: None,
            shading: Shading::Lambert,
            double_sided: false,
        }
    }

    pub fn unlit(color: Color<f32>) -> Self {
        Material {
            shading: Shading::Unlit,
            ..Material::lambert(color)
        }
    }

    pub fn with_texture<T: Into<InlinableString>>(mut self, name: T, fallback: Color<f32>) -> Self {
        self.texture = Some(TextureRef {
            name: name.into(),
            fallback,
        });
        self
    }

    pub fn with_double_sided(mut self, double_sided: bool) -> Self {
        self.double_sided = double_sided;
        self
    }

    /// The final surface color, tint applied on top of the texture.
    pub fn diffuse(&self) -> Color<f32> {
        match self.texture {
            Some(ref texture) => self.color.modulate(texture.fallback),
            None => self.color,
        }
    }

    #[inline]
    pub fn texture_name(&self) -> Option<&str> {
        self.texture.as_ref().map(|v| v.name.as_ref())
    }
}
