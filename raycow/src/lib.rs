#[macro_use]
extern crate log;
extern crate custom_error;

pub mod geometry;
pub mod materials;
pub mod objects;
pub mod render;
pub mod scene;
pub mod scenes;
