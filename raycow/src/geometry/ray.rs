use super::{matrix::Matrix, tuple::Tuple};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    origin: Tuple,
    direction: Tuple,
}

impl Ray {

    pub fn new(origin: Tuple, direction: Tuple) -> Self {
        Ray {
            origin,
            direction,
        }
    }

    pub fn origin(&self) -> &Tuple {
        &self.origin
    }

    pub fn direction(&self) -> &Tuple {
        &self.direction
    }

    pub fn position(&self, t: f64) -> Tuple {
        self.origin + self.direction * t
    }

    pub fn transform(&self, matrix: &Matrix) -> Ray {
        Ray::new(matrix.multiply_tuple(&self.origin), matrix.multiply_tuple(&self.direction))
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::transform::{scaling, translation};

    use super::*;

    #[test]
    fn test_position() {
        let ray = Ray::new(Tuple::point(2.0, 3.0, 4.0), Tuple::vector(1.0, 0.0, 0.0));

        assert_eq!(ray.position(0.0), Tuple::point(2.0, 3.0, 4.0));
        assert_eq!(ray.position(1.0), Tuple::point(3.0, 3.0, 4.0));
        assert_eq!(ray.position(-1.0), Tuple::point(1.0, 3.0, 4.0));
        assert_eq!(ray.position(2.5), Tuple::point(4.5, 3.0, 4.0));
    }

    #[test]
    fn test_translate() {
        let ray = Ray::new(Tuple::point(1.0, 2.0, 3.0), Tuple::vector(0.0, 1.0, 0.0));
        let transformed = ray.transform(&translation(3.0, 4.0, 5.0));

        assert_eq!(*transformed.origin(), Tuple::point(4.0, 6.0, 8.0));
        assert_eq!(*transformed.direction(), Tuple::vector(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_scale() {
        let ray = Ray::new(Tuple::point(1.0, 2.0, 3.0), Tuple::vector(0.0, 1.0, 0.0));
        let transformed = ray.transform(&scaling(2.0, 3.0, 4.0));

        assert_eq!(*transformed.origin(), Tuple::point(2.0, 6.0, 12.0));
        assert_eq!(*transformed.direction(), Tuple::vector(0.0, 3.0, 0.0));
        assert_eq!(ray.origin(), &Tuple::point(1.0, 2.0, 3.0));
    }
}
