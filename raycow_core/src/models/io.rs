use std::io::Write;

use custom_error::custom_error;

use super::image::Image;

custom_error! {pub ImageIOError
    FailedToWrite {source: std::io::Error} = "Failed to write image: {source}",
    InvalidImage {description: String} = "Image can not be encoded: {description}",
}

pub trait ImageWriter {

    /// Encodes the whole image and writes it to `destination` in one go.
    fn write(&self, image: &Image, destination: &mut dyn Write) -> Result<(), ImageIOError>;
}
