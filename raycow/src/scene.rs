pub mod camera;
pub mod point_light;
pub mod scene_object;
pub mod world;
