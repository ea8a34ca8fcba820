use crate::geometry::{matrix::{Matrix, MatrixError}, ray::Ray, transform::Transform, tuple::Tuple};
use crate::materials::material::Material;
use crate::render::intersection::{Intersection, Intersections};
use crate::scene::scene_object::SceneObject;

/// Unit sphere centered at the object space origin.
#[derive(Clone, Debug)]
pub struct Sphere {

    transform: Transform,
    material: Material,
}

impl Sphere {

    pub fn new(material: Material) -> Self {
        Self {
            transform: Transform::identity(),
            material,
        }
    }

    pub fn with_transform(transform: Matrix, material: Material) -> Result<Self, MatrixError> {
        Ok(Self {
            transform: Transform::new(transform)?,
            material,
        })
    }

    pub fn set_transform(&mut self, transform: Matrix) -> Result<(), MatrixError> {
        self.transform = Transform::new(transform)?;
        Ok(())
    }

    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }
}

impl Default for Sphere {

    fn default() -> Self {
        Self::new(Material::default())
    }
}

impl SceneObject for Sphere {

    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn intersect(&self, ray: &Ray) -> Intersections<'_> {
        // |origin + t * direction|**2 = 1 expands to a quadratic in t:
        // a = |direction|**2, b = 2 * dot(direction, origin), c = |origin|**2 - 1
        let ray = self.transform.ray_to_object(ray);
        let sphere_to_ray = *ray.origin() - Tuple::origin();

        let a = ray.direction().dot_product(ray.direction());
        let b = 2.0 * ray.direction().dot_product(&sphere_to_ray);
        let c = sphere_to_ray.dot_product(&sphere_to_ray) - 1.0;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return Intersections::empty();
        }

        let discriminant_root = discriminant.sqrt();
        Intersections::new(vec![
            Intersection::new((-b - discriminant_root) / (2.0 * a), self),
            Intersection::new((-b + discriminant_root) / (2.0 * a), self),
        ])
    }

    fn local_normal_at(&self, object_point: &Tuple) -> Tuple {
        *object_point - Tuple::origin()
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use crate::geometry::transform::{rotation_z, scaling, translation};

    use super::*;

    fn intersection_distances(sphere: &Sphere, ray: &Ray) -> Vec<f64> {
        sphere.intersect(ray).iter().map(|v| v.t()).collect()
    }

    fn assert_close(actual: Tuple, expected: Tuple) {
        assert!(
            (actual - expected).magnitude() < 1e-5 && actual.w == expected.w,
            "expected {:?}, got {:?}", expected, actual
        );
    }

    #[test]
    fn test_ray_through_center() {
        let ray = Ray::new(Tuple::point(0.0, 0.0, -5.0), Tuple::vector(0.0, 0.0, 1.0));
        assert_eq!(intersection_distances(&Sphere::default(), &ray), vec![4.0, 6.0]);
    }

    #[test]
    fn test_tangent_ray() {
        let ray = Ray::new(Tuple::point(0.0, 1.0, -5.0), Tuple::vector(0.0, 0.0, 1.0));
        assert_eq!(intersection_distances(&Sphere::default(), &ray), vec![5.0, 5.0]);
    }

    #[test]
    fn test_ray_misses() {
        let ray = Ray::new(Tuple::point(0.0, 2.0, -5.0), Tuple::vector(0.0, 0.0, 1.0));
        assert!(Sphere::default().intersect(&ray).is_empty());
    }

    #[test]
    fn test_ray_inside_sphere() {
        let ray = Ray::new(Tuple::origin(), Tuple::vector(0.0, 0.0, 1.0));
        assert_eq!(intersection_distances(&Sphere::default(), &ray), vec![-1.0, 1.0]);
    }

    #[test]
    fn test_sphere_behind_ray() {
        let ray = Ray::new(Tuple::point(0.0, 0.0, 5.0), Tuple::vector(0.0, 0.0, 1.0));
        assert_eq!(intersection_distances(&Sphere::default(), &ray), vec![-6.0, -4.0]);
    }

    #[test]
    fn test_intersections_reference_sphere() {
        let material = Material::default().with_shininess(42.0);
        let sphere = Sphere::new(material);
        let ray = Ray::new(Tuple::point(0.0, 0.0, -5.0), Tuple::vector(0.0, 0.0, 1.0));
        let intersections = sphere.intersect(&ray);

        assert_eq!(intersections.len(), 2);
        for intersection in intersections.iter() {
            assert_eq!(*intersection.object().material(), material);
        }
    }

    #[test]
    fn test_scaled_sphere() {
        let sphere = Sphere::with_transform(scaling(2.0, 2.0, 2.0), Material::default()).unwrap();
        let ray = Ray::new(Tuple::point(0.0, 0.0, -5.0), Tuple::vector(0.0, 0.0, 1.0));
        assert_eq!(intersection_distances(&sphere, &ray), vec![3.0, 7.0]);
    }

    #[test]
    fn test_translated_sphere() {
        let sphere = Sphere::with_transform(translation(5.0, 0.0, 0.0), Material::default()).unwrap();
        let ray = Ray::new(Tuple::point(0.0, 0.0, -5.0), Tuple::vector(0.0, 0.0, 1.0));
        assert!(sphere.intersect(&ray).is_empty());
    }

    #[test]
    fn test_ray_is_not_modified() {
        let sphere = Sphere::with_transform(scaling(2.0, 2.0, 2.0), Material::default()).unwrap();
        let ray = Ray::new(Tuple::point(0.0, 0.0, -5.0), Tuple::vector(0.0, 0.0, 1.0));
        sphere.intersect(&ray);
        assert_eq!(*ray.origin(), Tuple::point(0.0, 0.0, -5.0));
    }

    #[test]
    fn test_degenerate_transform_is_rejected() {
        let mut sphere = Sphere::default();
        assert!(Sphere::with_transform(scaling(1.0, 0.0, 1.0), Material::default()).is_err());
        assert!(sphere.set_transform(scaling(0.0, 0.0, 0.0)).is_err());
        assert_eq!(*sphere.transform().matrix(), Matrix::identity(4));
    }

    #[test]
    fn test_set_material() {
        let mut sphere = Sphere::default();
        let material = Material::default().with_ambient(1.0);
        sphere.set_material(material);
        assert_eq!(*sphere.material(), material);
    }

    #[test]
    fn test_normal_on_axes() {
        let sphere = Sphere::default();
        assert_eq!(sphere.normal_at(&Tuple::point(1.0, 0.0, 0.0)), Tuple::vector(1.0, 0.0, 0.0));
        assert_eq!(sphere.normal_at(&Tuple::point(0.0, 1.0, 0.0)), Tuple::vector(0.0, 1.0, 0.0));
        assert_eq!(sphere.normal_at(&Tuple::point(0.0, 0.0, 1.0)), Tuple::vector(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_normal_is_normalized() {
        let value = 3f64.sqrt() / 3.0;
        let normal = Sphere::default().normal_at(&Tuple::point(value, value, value));

        assert_eq!(normal, Tuple::vector(value, value, value));
        assert_eq!(normal, normal.normalized());
    }

    #[test]
    fn test_normal_on_translated_sphere() {
        let sphere = Sphere::with_transform(translation(0.0, 1.0, 0.0), Material::default()).unwrap();
        let normal = sphere.normal_at(&Tuple::point(0.0, 1.70711, -0.70711));
        assert_close(normal, Tuple::vector(0.0, 0.70711, -0.70711));
    }

    #[test]
    fn test_normal_on_transformed_sphere() {
        let sphere = Sphere::with_transform(scaling(1.0, 0.5, 1.0) * rotation_z(PI / 5.0), Material::default()).unwrap();
        let half_sqrt2 = 2f64.sqrt() / 2.0;
        let normal = sphere.normal_at(&Tuple::point(0.0, half_sqrt2, -half_sqrt2));
        assert_close(normal, Tuple::vector(0.0, 0.97014, -0.24254));
    }
}
