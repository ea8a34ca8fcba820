use std::io::Write;

use raycow_core::models::{image::Image, io::{ImageIOError, ImageWriter}};

const MAGIC_NUMBER: &str = "P3";
const MAX_COLOR_VALUE: u16 = 255;
const MAX_LINE_LENGTH: usize = 70;

/// Plain text PPM writer. Channel values are clamped to [0, 1] and scaled to
/// [0, 255]; body lines never exceed 70 characters.
pub struct PPMWriter {
}

impl PPMWriter {

    pub const fn new() -> Self {
        PPMWriter {}
    }
}

impl ImageWriter for PPMWriter {

    fn write(&self, image: &Image, destination: &mut dyn Write) -> Result<(), ImageIOError> {
        if image.pixels.len() != image.width * image.height {
            return Err(ImageIOError::InvalidImage {
                description: format!(
                    "expected {} pixels for {}x{} image, got {}",
                    image.width * image.height, image.width, image.height, image.pixels.len()
                ),
            });
        }

        let mut bytes = write_header(image);
        write_body(image, &mut bytes);
        destination.write_all(&bytes)?;
        destination.flush()?;

        Ok(())
    }
}

fn write_header(image: &Image) -> Vec<u8> {
    format!("{}\n{} {}\n{}\n", MAGIC_NUMBER, image.width, image.height, MAX_COLOR_VALUE).into_bytes()
}

fn write_body(image: &Image, bytes: &mut Vec<u8>) {
    for y in 0..image.height {
        let mut line_length = 0;

        for color in image.row(y) {
            for value in color.channels().iter() {
                let value = scale_to_color_value(*value).to_string();
                let separator_length = if line_length == 0 { 0 } else { 1 };

                if line_length + separator_length + value.len() > MAX_LINE_LENGTH {
                    // 10 - LF
                    bytes.push(10);
                    line_length = 0;
                }

                if line_length != 0 {
                    bytes.push(b' ');
                    line_length += 1;
                }

                bytes.extend_from_slice(value.as_bytes());
                line_length += value.len();
            }
        }

        bytes.push(10);
    }
}

fn scale_to_color_value(value: f64) -> u16 {
    (value.max(0.0).min(1.0) * MAX_COLOR_VALUE as f64).round() as u16
}
