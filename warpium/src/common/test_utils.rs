use crate::image::{ChannelCount, Image, ImageDesc};

/// Builds an RGBA image with a deterministic per-pixel gradient, so that
/// every pixel value is distinct enough to catch indexing mistakes.
pub fn gradient_rgba(width: u32, height: u32) -> Image {
    let desc = ImageDesc::new(width, height, ChannelCount::Rgba);
    let mut bytes = Vec::with_capacity(desc.size_in_bytes());

    for row in 0..height {
        for col in 0..width {
            bytes.push((col * 7 % 256) as u8);
            bytes.push((row * 13 % 256) as u8);
            bytes.push(((col + row) * 29 % 256) as u8);
            bytes.push(255);
        }
    }

    Image::new_with_data(desc, bytes).unwrap()
}

/// Builds an RGBA image filled with one color.
pub fn solid_rgba(width: u32, height: u32, color: [u8; 4]) -> Image {
    let desc = ImageDesc::new(width, height, ChannelCount::Rgba);
    let bytes = color
        .iter()
        .copied()
        .cycle()
        .take(desc.size_in_bytes())
        .collect();

    Image::new_with_data(desc, bytes).unwrap()
}
