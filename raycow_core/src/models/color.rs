use std::ops::{Add, Mul, Sub};

use crate::float::approx_eq;

/// Light intensity per channel. Values are conceptually in [0, 1] but are kept
/// unclamped until an image writer converts them.
#[derive(Clone, Copy, Debug)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Color {

    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Color { red, green, blue }
    }

    pub fn zero() -> Self {
        Self::black()
    }

    pub fn black() -> Self {
        Self::BLACK
    }

    pub fn white() -> Self {
        Self::WHITE
    }

    /// Channel-wise (Hadamard) product.
    pub fn blend(&self, other: &Color) -> Self {
        Self::new(self.red * other.red, self.green * other.green, self.blue * other.blue)
    }

    pub fn channels(&self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }
}

impl Default for Color {

    fn default() -> Self {
        Self::black()
    }
}

impl PartialEq for Color {

    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.red, other.red) &&
            approx_eq(self.green, other.green) &&
            approx_eq(self.blue, other.blue)
    }
}

impl Add for Color {

    type Output = Color;

    fn add(self, rhs: Self) -> Self::Output {
        Color::new(self.red + rhs.red, self.green + rhs.green, self.blue + rhs.blue)
    }
}

impl Sub for Color {

    type Output = Color;

    fn sub(self, rhs: Self) -> Self::Output {
        Color::new(self.red - rhs.red, self.green - rhs.green, self.blue - rhs.blue)
    }
}

impl Mul<f64> for Color {

    type Output = Color;

    fn mul(self, rhs: f64) -> Self::Output {
        Color::new(self.red * rhs, self.green * rhs, self.blue * rhs)
    }
}

impl Mul for Color {

    type Output = Color;

    fn mul(self, rhs: Self) -> Self::Output {
        self.blend(&rhs)
    }
}
