use std::ops::{Add, Div, Mul, Neg, Sub};

use raycow_core::float::approx_eq;

/// A point (`w == 1`) or a free vector (`w == 0`). Arithmetic adds and
/// subtracts `w` like any other component, so point + vector is a point and
/// point - point is a vector.
#[derive(Copy, Clone, Debug)]
pub struct Tuple {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Tuple {

    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Tuple { x, y, z, w }
    }

    pub const fn point(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 1.0)
    }

    pub const fn vector(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 0.0)
    }

    pub const fn origin() -> Self {
        Self::point(0.0, 0.0, 0.0)
    }

    pub const fn zero() -> Self {
        Self::vector(0.0, 0.0, 0.0)
    }

    pub fn is_point(&self) -> bool {
        self.w == 1.0
    }

    pub fn is_vector(&self) -> bool {
        self.w == 0.0
    }

    /// Length of the x/y/z part, `w` is ignored.
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Divides all four components by the magnitude. Only meaningful for vectors.
    pub fn normalized(&self) -> Self {
        *self / self.magnitude()
    }

    pub fn dot_product(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    pub fn cross_product(&self, other: &Self) -> Self {
        Self::vector(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x
        )
    }
}

impl PartialEq for Tuple {

    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.x, other.x) &&
            approx_eq(self.y, other.y) &&
            approx_eq(self.z, other.z) &&
            approx_eq(self.w, other.w)
    }
}

impl Add for Tuple {

    type Output = Tuple;

    fn add(self, rhs: Self) -> Self::Output {
        Tuple::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl Sub for Tuple {

    type Output = Tuple;

    fn sub(self, rhs: Self) -> Self::Output {
        Tuple::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl Neg for Tuple {

    type Output = Tuple;

    fn neg(self) -> Self::Output {
        Tuple::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul<f64> for Tuple {

    type Output = Tuple;

    fn mul(self, rhs: f64) -> Self::Output {
        Tuple::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl Div<f64> for Tuple {

    type Output = Tuple;

    fn div(self, rhs: f64) -> Self::Output {
        Tuple::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_and_vector_tags() {
        let point = Tuple::point(4.3, -4.2, 3.1);
        assert!(point.is_point());
        assert!(!point.is_vector());

        let vector = Tuple::vector(4.3, -4.2, 3.1);
        assert!(vector.is_vector());
        assert!(!vector.is_point());
    }

    #[test]
    fn test_arithmetic_keeps_tags() {
        let point = Tuple::point(3.0, -2.0, 5.0);
        let vector = Tuple::vector(-2.0, 3.0, 1.0);

        assert_eq!(point + vector, Tuple::point(1.0, 1.0, 6.0));
        assert_eq!(Tuple::point(3.0, 2.0, 1.0) - Tuple::point(5.0, 6.0, 7.0), Tuple::vector(-2.0, -4.0, -6.0));
        assert_eq!(point - vector, Tuple::point(5.0, -5.0, 4.0));
        assert_eq!(vector - vector, Tuple::zero());
    }

    #[test]
    fn test_add_then_subtract_round_trip() {
        let values = [
            (Tuple::point(1.5, -2.25, 3.0), Tuple::vector(0.1, 0.2, 0.3)),
            (Tuple::vector(1e6, -1e-3, 7.0), Tuple::vector(-3.3, 4.4, 5.5)),
            (Tuple::new(-0.5, 0.25, 0.125, 1.0), Tuple::new(9.0, 8.0, 7.0, 0.0)),
        ];

        for (a, b) in values.iter() {
            assert_eq!((*a + *b) - *b, *a);
        }
    }

    #[test]
    fn test_negate_and_scale() {
        let tuple = Tuple::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(-tuple, Tuple::new(-1.0, 2.0, -3.0, 4.0));
        assert_eq!(tuple * 3.5, Tuple::new(3.5, -7.0, 10.5, -14.0));
        assert_eq!(tuple * 0.5, Tuple::new(0.5, -1.0, 1.5, -2.0));
        assert_eq!(tuple / 2.0, Tuple::new(0.5, -1.0, 1.5, -2.0));
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(Tuple::vector(1.0, 0.0, 0.0).magnitude(), 1.0);
        assert_eq!(Tuple::vector(0.0, 0.0, 1.0).magnitude(), 1.0);
        assert_eq!(Tuple::vector(1.0, 2.0, 3.0).magnitude(), 14f64.sqrt());
        assert_eq!(Tuple::vector(-1.0, -2.0, -3.0).magnitude(), 14f64.sqrt());
        assert_eq!(Tuple::point(3.0, 4.0, 0.0).magnitude(), 5.0);
    }

    #[test]
    fn test_normalized() {
        assert_eq!(Tuple::vector(4.0, 0.0, 0.0).normalized(), Tuple::vector(1.0, 0.0, 0.0));

        let sqrt14 = 14f64.sqrt();
        assert_eq!(
            Tuple::vector(1.0, 2.0, 3.0).normalized(),
            Tuple::vector(1.0 / sqrt14, 2.0 / sqrt14, 3.0 / sqrt14)
        );

        for vector in [Tuple::vector(1.0, 2.0, 3.0), Tuple::vector(-0.001, 5.0, 1e4), Tuple::vector(0.3, 0.3, 0.3)].iter() {
            let normalized = vector.normalized();
            assert!(approx_eq(normalized.magnitude(), 1.0));
            assert!(normalized.is_vector());
        }
    }

    #[test]
    fn test_dot_product() {
        let a = Tuple::vector(1.0, 2.0, 3.0);
        let b = Tuple::vector(2.0, 3.0, 4.0);
        assert_eq!(a.dot_product(&b), 20.0);
    }

    #[test]
    fn test_cross_product() {
        let a = Tuple::vector(1.0, 2.0, 3.0);
        let b = Tuple::vector(2.0, 3.0, 4.0);
        assert_eq!(a.cross_product(&b), Tuple::vector(-1.0, 2.0, -1.0));
        assert_eq!(b.cross_product(&a), Tuple::vector(1.0, -2.0, 1.0));
    }
}
