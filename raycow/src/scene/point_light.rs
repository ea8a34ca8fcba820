use raycow_core::models::color::Color;

use crate::geometry::tuple::Tuple;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {

    position: Tuple,
    intensity: Color,
}

impl PointLight {

    pub fn new(position: Tuple, intensity: Color) -> Self {
        PointLight {
            position,
            intensity
        }
    }

    pub fn position(&self) -> &Tuple {
        &self.position
    }

    pub fn intensity(&self) -> &Color {
        &self.intensity
    }
}
