use raycow_core::models::color::Color;

use crate::geometry::tuple::Tuple;
use crate::materials::material::{reflect, Material};
use crate::scene::point_light::PointLight;

/// Phong illumination of `position` as seen along `eye`. The result is the
/// unclamped sum of the ambient, diffuse and specular terms.
pub fn lighting(material: &Material, light: &PointLight, position: &Tuple, eye: &Tuple, normal: &Tuple) -> Color {
    let effective_color = material.color.blend(light.intensity());
    let light_vector = (*light.position() - *position).normalized();

    let ambient = effective_color * material.ambient;
    let mut diffuse = Color::black();
    let mut specular = Color::black();

    // negative means the light is on the other side of the surface
    let cos_light = light_vector.dot_product(normal);
    if cos_light >= 0.0 {
        diffuse = effective_color * material.diffuse * cos_light;

        let reflect_vector = reflect(&-light_vector, normal);
        let cos_reflect = reflect_vector.dot_product(eye);
        if cos_reflect > 0.0 {
            specular = *light.intensity() * material.specular * cos_reflect.powf(material.shininess);
        }
    }

    ambient + diffuse + specular
}
