use hydrogen::math::prelude::Color;

use crate::spatial::prelude::Transform;

/// In order to calculate the shading of a 3D object, we needs to knowns the intensity,
/// direction and color of the light that falls on it. These properties are provided by
/// Lit components in the scene.
#[derive(Debug, Clone, Copy)]
pub struct Lit {
    /// Is this light enable.
    pub enable: bool,
    /// Color of the light.
    pub color: Color<f32>,
    /// Brightness of the light source.
    pub intensity: f32,
    /// Lit source
    pub source: LitSource,

    #[doc(hidden)]
    pub(crate) transform: Transform,
}

/// Enumeration for all light sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LitSource {
    /// Lights every surface evenly, regardless of position or orientation.
    Ambient,
    /// A direcitonal light, which shines along the forward axis of its entity.
    Dir,
}

impl Default for Lit {
    fn default() -> Self {
        Lit {
            enable: true,
            color: Color::white(),
            intensity: 1.0,
            source: LitSource::Dir,
            transform: Transform::default(),
        }
    }
}

impl Lit {
    pub fn ambient(color: Color<f32>, intensity: f32) -> Self {
        Lit {
            color,
            intensity,
            source: LitSource::Ambient,
            ..Default::default()
        }
    }

    pub fn dir(color: Color<f32>, intensity: f32) -> Self {
        Lit {
            color,
            intensity,
            source: LitSource::Dir,
            ..Default::default()
        }
    }

    /// The color scaled by intensity, alpha dropped.
    #[inline]
    pub fn radiance(&self) -> [f32; 3] {
        let [r, g, b] = self.color.rgb();
        [r * self.intensity, g * self.intensity, b * self.intensity]
    }

    /// The world space direction light travels along. Only meaningful for `Dir` lights.
    #[inline]
    pub fn direction(&self) -> hydrogen::math::prelude::Vector3<f32> {
        self.transform.forward()
    }
}
