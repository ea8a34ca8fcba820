use custom_error::custom_error;

use raycow_core::models::{image::Image, io::ImageIOError};

use crate::geometry::matrix::MatrixError;
use crate::scene::{camera::Camera, world::World};

custom_error! {pub RenderError
    DimensionMismatch {camera_width: usize, camera_height: usize, image_width: usize, image_height: usize}
        = "Camera resolution {camera_width}x{camera_height} does not match image size {image_width}x{image_height}",
    InvalidResolution {width: usize, height: usize} = "Invalid resolution: {width}x{height}",
    InvalidScene {source: MatrixError} = "Failed to build scene: {source}",
    FailedToSave {source: ImageIOError} = "Failed to save rendered image: {source}",
    IOError {source: std::io::Error} = "IO error: {source}",
}

pub trait Render {

    /// Writes the color seen through every pixel of `camera` into `render_to`,
    /// which must have the camera's resolution.
    fn render(&self, world: &World, camera: &Camera, render_to: &mut Image) -> Result<(), RenderError>;

    fn render_image(&self, world: &World, camera: &Camera) -> Result<Image, RenderError> {
        let mut image = Image::new(camera.width(), camera.height());
        self.render(world, camera, &mut image)?;
        Ok(image)
    }
}

pub fn check_dimensions(camera: &Camera, render_to: &Image) -> Result<(), RenderError> {
    if camera.width() == 0 || camera.height() == 0 {
        return Err(RenderError::InvalidResolution { width: camera.width(), height: camera.height() });
    }

    if camera.width() != render_to.width || camera.height() != render_to.height {
        return Err(RenderError::DimensionMismatch {
            camera_width: camera.width(),
            camera_height: camera.height(),
            image_width: render_to.width,
            image_height: render_to.height,
        });
    }

    Ok(())
}
