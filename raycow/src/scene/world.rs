use raycow_core::models::color::Color;

use crate::geometry::{matrix::MatrixError, ray::Ray, transform::scaling, tuple::Tuple};
use crate::materials::{material::Material, phong::lighting};
use crate::objects::sphere::Sphere;
use crate::render::intersection::{IntersectionComputation, Intersections};
use crate::scene::{point_light::PointLight, scene_object::SceneObject};

pub struct World {
    light: PointLight,
    objects: Vec<Box<dyn SceneObject + Sync + Send>>,
}

impl World {

    pub fn new(light: PointLight) -> Self {
        Self {
            light,
            objects: Vec::new(),
        }
    }

    /// Two concentric spheres lit from the upper left, used as a reference scene.
    pub fn default_world() -> Result<Self, MatrixError> {
        let mut world = World::new(PointLight::new(Tuple::point(-10.0, 10.0, -10.0), Color::white()));

        world.add_object(Box::new(Sphere::new(
            Material::default()
                .with_color(Color::new(0.8, 1.0, 0.6))
                .with_diffuse(0.7)
                .with_specular(0.2)
        )));
        world.add_object(Box::new(Sphere::with_transform(scaling(0.5, 0.5, 0.5), Material::default())?));

        Ok(world)
    }

    pub fn light(&self) -> &PointLight {
        &self.light
    }

    pub fn set_light(&mut self, light: PointLight) {
        self.light = light;
    }

    pub fn add_object(&mut self, obj: Box<dyn SceneObject + Sync + Send>) {
        self.objects.push(obj)
    }

    pub fn objects(&self) -> &Vec<Box<dyn SceneObject + Sync + Send>> {
        &self.objects
    }

    /// Intersections of `ray` with every object, sorted by `t`.
    pub fn intersect(&self, ray: &Ray) -> Intersections<'_> {
        let mut intersections = Intersections::empty();
        for object in &self.objects {
            intersections.extend(object.intersect(ray));
        }

        intersections.sort();
        intersections
    }

    /// Color seen along `ray`; black when nothing is hit.
    pub fn color_at(&self, ray: &Ray) -> Color {
        match self.intersect(ray).hit() {
            Some(hit) => self.shade_hit(&hit.prepare_computations(ray)),
            None => Color::black(),
        }
    }

    pub fn shade_hit(&self, computation: &IntersectionComputation<'_>) -> Color {
        lighting(
            computation.object.material(),
            &self.light,
            &computation.point,
            &computation.eye,
            &computation.normal,
        )
    }
}
