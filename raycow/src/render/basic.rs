use indicatif::ProgressBar;

use raycow_core::models::{color::Color, image::Image};

use crate::scene::{camera::Camera, world::World};

use super::render::{check_dimensions, Render, RenderError};

/// Renders pixel by pixel on the calling thread, in row-major order.
pub struct BasicRender {
}

impl BasicRender {

    pub fn new() -> Self {
        Self {
        }
    }
}

impl Render for BasicRender {

    fn render(&self, world: &World, camera: &Camera, render_to: &mut Image) -> Result<(), RenderError> {
        check_dimensions(camera, render_to)?;

        let height = render_to.height;
        let progress = ProgressBar::new(height as u64);

        for y in 0..height {
            for x in 0..render_to.width {
                render_to.set_pixel(x, y, render_pixel(world, camera, x, y));
            }

            debug!("rendered row {} of {}", y + 1, height);
            progress.inc(1);
        }

        progress.finish_and_clear();
        Ok(())
    }
}

pub fn render_pixel(world: &World, camera: &Camera, x: usize, y: usize) -> Color {
    world.color_at(&camera.ray_for_pixel(x, y))
}
