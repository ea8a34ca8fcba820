use std::f64::consts::PI;

use raycow_core::models::color::Color;

use crate::geometry::matrix::{MatrixError, IDENTITY};
use crate::geometry::{transform::view_transform, tuple::Tuple};
use crate::materials::material::Material;
use crate::objects::sphere::Sphere;
use crate::scene::{camera::Camera, point_light::PointLight, world::World};
use crate::scenes::provider::SceneProvider;

/// A room made of three flattened spheres with three balls on the floor.
pub struct DemoSceneProvider {
}

impl DemoSceneProvider {

    pub fn new() -> Self {
        Self {
        }
    }
}

impl SceneProvider for DemoSceneProvider {

    fn world(&self) -> Result<World, MatrixError> {
        let mut world = World::new(PointLight::new(Tuple::point(-10.0, 10.0, -10.0), Color::white()));

        let wall = Material::default()
            .with_color(Color::new(1.0, 0.9, 0.9))
            .with_specular(0.0);

        let floor = IDENTITY.then_scale(10.0, 0.01, 10.0);
        world.add_object(Box::new(Sphere::with_transform(floor, wall)?));

        let left_wall = IDENTITY
            .then_scale(10.0, 0.01, 10.0)
            .then_rotate_x(PI / 2.0)
            .then_rotate_y(-PI / 4.0)
            .then_translate(0.0, 0.0, 5.0);
        world.add_object(Box::new(Sphere::with_transform(left_wall, wall)?));

        let right_wall = IDENTITY
            .then_scale(10.0, 0.01, 10.0)
            .then_rotate_x(PI / 2.0)
            .then_rotate_y(PI / 4.0)
            .then_translate(0.0, 0.0, 5.0);
        world.add_object(Box::new(Sphere::with_transform(right_wall, wall)?));

        let middle = Material::default()
            .with_color(Color::new(0.1, 1.0, 0.5))
            .with_diffuse(0.7)
            .with_specular(0.3);
        world.add_object(Box::new(Sphere::with_transform(IDENTITY.then_translate(-0.5, 1.0, 0.5), middle)?));

        let right = Material::default()
            .with_color(Color::new(0.5, 1.0, 0.1))
            .with_diffuse(0.7)
            .with_specular(0.3);
        let right_transform = IDENTITY
            .then_scale(0.5, 0.5, 0.5)
            .then_translate(1.5, 0.5, -0.5);
        world.add_object(Box::new(Sphere::with_transform(right_transform, right)?));

        let left = Material::default()
            .with_color(Color::new(1.0, 0.8, 0.1))
            .with_diffuse(0.7)
            .with_specular(0.3);
        let left_transform = IDENTITY
            .then_scale(0.33, 0.33, 0.33)
            .then_translate(-1.5, 0.33, -0.75);
        world.add_object(Box::new(Sphere::with_transform(left_transform, left)?));

        Ok(world)
    }

    fn camera(&self, width: usize, height: usize, field_of_view: f64) -> Result<Camera, MatrixError> {
        Camera::new(width, height, field_of_view).with_transform(view_transform(
            &Tuple::point(0.0, 1.5, -5.0),
            &Tuple::point(0.0, 1.0, 0.0),
            &Tuple::vector(0.0, 1.0, 0.0)
        ))
    }
}
