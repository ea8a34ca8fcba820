use crate::geometry::{matrix::{Matrix, MatrixError}, ray::Ray, transform::Transform, tuple::Tuple};

/// Pinhole camera looking down -z in camera space, with the canvas one unit in
/// front of the eye. `transform` maps world space into camera space.
#[derive(Clone, Debug)]
pub struct Camera {

    width: usize,
    height: usize,
    field_of_view: f64,
    transform: Transform,

    half_width: f64,
    half_height: f64,
    pixel_size: f64,
}

impl Camera {

    pub fn new(width: usize, height: usize, field_of_view: f64) -> Self {
        let half_view = (field_of_view / 2.0).tan();
        let aspect_ratio = width as f64 / height as f64;

        let (half_width, half_height) = if aspect_ratio >= 1.0 {
            (half_view, half_view / aspect_ratio)
        } else {
            (half_view * aspect_ratio, half_view)
        };

        Self {
            width,
            height,
            field_of_view,
            transform: Transform::identity(),
            half_width,
            half_height,
            pixel_size: half_width * 2.0 / width as f64,
        }
    }

    pub fn with_transform(self, transform: Matrix) -> Result<Self, MatrixError> {
        Ok(Self {
            transform: Transform::new(transform)?,
            ..self
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    /// World space ray from the eye through the center of pixel `(x, y)`.
    pub fn ray_for_pixel(&self, x: usize, y: usize) -> Ray {
        let offset_x = (x as f64 + 0.5) * self.pixel_size;
        let offset_y = (y as f64 + 0.5) * self.pixel_size;

        // camera looks towards -z, so +x is to the left
        let canvas_x = self.half_width - offset_x;
        let canvas_y = self.half_height - offset_y;

        let inverse = self.transform.inverse();
        let pixel = inverse.multiply_tuple(&Tuple::point(canvas_x, canvas_y, -1.0));
        let origin = inverse.multiply_tuple(&Tuple::origin());
        let direction = (pixel - origin).normalized();

        Ray::new(origin, direction)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use raycow_core::float::approx_eq;

    use crate::geometry::matrix::IDENTITY;
    use crate::geometry::transform::{rotation_y, scaling, translation};

    use super::*;

    #[test]
    fn test_new_camera() {
        let camera = Camera::new(160, 120, PI / 2.0);

        assert_eq!(camera.width(), 160);
        assert_eq!(camera.height(), 120);
        assert_eq!(camera.field_of_view(), PI / 2.0);
        assert_eq!(*camera.transform().matrix(), IDENTITY);
    }

    #[test]
    fn test_pixel_size_horizontal_canvas() {
        assert!(approx_eq(Camera::new(200, 125, PI / 2.0).pixel_size(), 0.01));
    }

    #[test]
    fn test_pixel_size_vertical_canvas() {
        assert!(approx_eq(Camera::new(125, 200, PI / 2.0).pixel_size(), 0.01));
    }

    #[test]
    fn test_ray_through_center() {
        let ray = Camera::new(201, 101, PI / 2.0).ray_for_pixel(100, 50);

        assert_eq!(*ray.origin(), Tuple::origin());
        assert_eq!(*ray.direction(), Tuple::vector(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_ray_through_corner() {
        let ray = Camera::new(201, 101, PI / 2.0).ray_for_pixel(0, 0);
        let expected = Tuple::vector(0.66519, 0.33259, -0.66851);

        assert_eq!(*ray.origin(), Tuple::origin());
        assert!((*ray.direction() - expected).magnitude() < 1e-5);
    }

    #[test]
    fn test_ray_with_transformed_camera() {
        let camera = Camera::new(201, 101, PI / 2.0)
            .with_transform(rotation_y(PI / 4.0) * translation(0.0, -2.0, 5.0))
            .unwrap();
        let ray = camera.ray_for_pixel(100, 50);
        let half_sqrt2 = 2f64.sqrt() / 2.0;

        assert_eq!(*ray.origin(), Tuple::point(0.0, 2.0, -5.0));
        assert_eq!(*ray.direction(), Tuple::vector(half_sqrt2, 0.0, -half_sqrt2));
    }

    #[test]
    fn test_degenerate_camera_transform() {
        assert!(Camera::new(10, 10, PI / 2.0).with_transform(scaling(1.0, 1.0, 0.0)).is_err());
    }
}
