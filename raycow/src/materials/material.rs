use raycow_core::models::color::Color;

use crate::geometry::tuple::Tuple;

/// Phong reflectance coefficients of a surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Color,
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    pub shininess: f64,
}

impl Material {

    pub fn new(color: Color, ambient: f64, diffuse: f64, specular: f64, shininess: f64) -> Self {
        Self {
            color,
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }

    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    pub fn with_ambient(self, ambient: f64) -> Self {
        Self { ambient, ..self }
    }

    pub fn with_diffuse(self, diffuse: f64) -> Self {
        Self { diffuse, ..self }
    }

    pub fn with_specular(self, specular: f64) -> Self {
        Self { specular, ..self }
    }

    pub fn with_shininess(self, shininess: f64) -> Self {
        Self { shininess, ..self }
    }
}

impl Default for Material {

    fn default() -> Self {
        Self::new(Color::white(), 0.1, 0.9, 0.9, 200.0)
    }
}

/// Mirrors `incoming` around `normal`.
pub fn reflect(incoming: &Tuple, normal: &Tuple) -> Tuple {
    *incoming - *normal * (2.0 * incoming.dot_product(normal))
}
