use super::color::Color;

/// Pixel buffer addressed by `(x, y)` with the origin in the top left corner.
#[derive(Clone, Debug)]
pub struct Image {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Color>, // starting at top left pixel of the image, pos = y * width + x
}

impl Image {

    pub fn new(width: usize, height: usize) -> Self {
        Image {
            width,
            height,
            pixels: vec![Color::zero(); width * height],
        }
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Color {
        self.pixels[self.index(x, y)]
    }

    pub fn fill(&mut self, color: Color) {
        for pixel in self.pixels.iter_mut() {
            *pixel = color;
        }
    }

    pub fn row(&self, y: usize) -> &[Color] {
        assert!(y < self.height, "row {} is outside of image with height {}", y, self.height);
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) is outside of {}x{} image", x, y, self.width, self.height
        );
        y * self.width + x
    }
}
