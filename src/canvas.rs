use std::{error::Error, fs::File, io::BufWriter, path::Path, result};

use image::{Rgba, RgbaImage};

use crate::icon::Rect;

type Result<T> = result::Result<T, Box<dyn Error>>;

pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(size: u32, fill: [u8; 4]) -> Self {
        Self {
            image: RgbaImage::from_pixel(size, size, Rgba(fill)),
        }
    }

    pub fn size(&self) -> u32 {
        self.image.width()
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    // stroke grows inward from the corners, off-canvas pixels are dropped
    pub fn draw_outline(&mut self, rect: Rect, color: [u8; 4], width: u32) {
        if width == 0 || rect.x1 > rect.x2 || rect.y1 > rect.y2 {
            return;
        }

        let size = self.size();
        let x_end = rect.x2.min(size.saturating_sub(1));
        let y_end = rect.y2.min(size.saturating_sub(1));
        if size == 0 || rect.x1 > x_end || rect.y1 > y_end {
            return;
        }

        for y in rect.y1..=y_end {
            for x in rect.x1..=x_end {
                let on_border = x - rect.x1 < width
                    || rect.x2 - x < width
                    || y - rect.y1 < width
                    || rect.y2 - y < width;
                if on_border {
                    self.image.put_pixel(x, y, Rgba(color));
                }
            }
        }
    }

    pub fn write_png(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let w = BufWriter::new(file);

        let mut encoder = png::Encoder::new(w, self.image.width(), self.image.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(self.image.as_raw())?;
        writer.finish()?;

        Ok(())
    }
}
