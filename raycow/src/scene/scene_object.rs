use crate::geometry::{ray::Ray, transform::Transform, tuple::Tuple};
use crate::materials::material::Material;
use crate::render::intersection::Intersections;

/// Anything that can be placed into a world. Implementors describe their
/// geometry in object space; `transform` places it in world space.
pub trait SceneObject {

    fn transform(&self) -> &Transform;

    fn material(&self) -> &Material;

    /// All intersections of a world space ray with this object, in no particular order.
    fn intersect(&self, ray: &Ray) -> Intersections<'_>;

    /// Surface normal at an object space point.
    fn local_normal_at(&self, object_point: &Tuple) -> Tuple;

    /// Surface normal at a world space point on the surface.
    fn normal_at(&self, world_point: &Tuple) -> Tuple {
        let object_point = self.transform().point_to_object(world_point);
        let object_normal = self.local_normal_at(&object_point);
        self.transform().normal_to_world(&object_normal)
    }
}
