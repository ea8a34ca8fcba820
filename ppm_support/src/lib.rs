use raycow_core::{plugins::ImageFormatSupportPlugin, models::io::ImageWriter};

use writer::PPMWriter;

pub mod writer;

pub struct PPMFormatSupportPlugin {
}

impl PPMFormatSupportPlugin {

    pub fn new() -> Self {
        PPMFormatSupportPlugin {}
    }
}

impl ImageFormatSupportPlugin for PPMFormatSupportPlugin {

    fn format_name(&self) -> String {
        "PPM".to_string()
    }

    fn file_extension(&self) -> String {
        "ppm".to_string()
    }

    fn writer(&self) -> Box<dyn ImageWriter> {
        Box::new(PPMWriter::new())
    }
}
