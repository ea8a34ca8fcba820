use indicatif::ProgressBar;
use rayon::prelude::*;

use raycow_core::models::image::Image;

use crate::scene::{camera::Camera, world::World};

use super::basic::render_pixel;
use super::render::{check_dimensions, Render, RenderError};

/// Renders rows in parallel on the rayon thread pool. Each worker owns a
/// disjoint row of the image, so the output matches `BasicRender`.
pub struct MultithreadedRender {
}

impl MultithreadedRender {

    pub fn new() -> Self {
        Self {
        }
    }
}

impl Render for MultithreadedRender {

    fn render(&self, world: &World, camera: &Camera, render_to: &mut Image) -> Result<(), RenderError> {
        check_dimensions(camera, render_to)?;

        let width = render_to.width;
        let height = render_to.height;
        if width == 0 {
            return Ok(());
        }

        let progress = ProgressBar::new(height as u64);

        render_to.pixels.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = render_pixel(world, camera, x, y);
            }

            debug!("rendered row {} of {}", y + 1, height);
            progress.inc(1);
        });

        progress.finish_and_clear();
        Ok(())
    }
}
