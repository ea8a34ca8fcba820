use crate::geometry::matrix::MatrixError;
use crate::scene::{camera::Camera, world::World};

pub trait SceneProvider {

    fn world(&self) -> Result<World, MatrixError>;

    fn camera(&self, width: usize, height: usize, field_of_view: f64) -> Result<Camera, MatrixError>;
}
