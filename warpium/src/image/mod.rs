mod io;

#[cfg(test)]
mod tests;

use std::path::Path;

use crate::common::{Error, Result};

/// Supported image file extensions for reading and writing.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

#[derive(Debug, Hash, PartialEq, Eq, Copy, Clone, Default)]
#[repr(u8)]
pub enum ChannelCount {
    L = 1,
    Rgb = 3,
    #[default]
    Rgba = 4,
}

impl ChannelCount {
    pub fn channel_count(&self) -> u8 {
        *self as u8
    }
}

impl std::fmt::Display for ChannelCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelCount::L => write!(f, "L"),
            ChannelCount::Rgb => write!(f, "RGB"),
            ChannelCount::Rgba => write!(f, "RGBA"),
        }
    }
}

#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash)]
pub struct ImageDesc {
    pub width: u32,
    pub height: u32,
    pub channel_count: ChannelCount,
}

/// Tightly packed 8-bit raster.
///
/// Row 0 is the bottom-most display row by convention; [`Image::flip_vertical`]
/// converts to and from the top-down order used by file formats. The
/// resampling core only consumes RGBA buffers - use [`Image::convert`] to
/// expand L and RGB sources.
#[derive(Clone, Debug)]
pub struct Image {
    desc: ImageDesc,
    bytes: Vec<u8>,
}

impl ImageDesc {
    pub fn new(width: u32, height: u32, channel_count: ChannelCount) -> Self {
        Self {
            width,
            height,
            channel_count,
        }
    }

    pub fn size_in_bytes(&self) -> usize {
        self.height as usize * self.row_bytes()
    }

    /// Returns the number of bytes per row.
    pub fn row_bytes(&self) -> usize {
        self.width as usize * self.channel_count.channel_count() as usize
    }

    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions(format!(
                "{}x{} image",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for ImageDesc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{} {}", self.width, self.height, self.channel_count)
    }
}

impl Image {
    /// Returns the image descriptor.
    pub fn desc(&self) -> &ImageDesc {
        &self.desc
    }

    /// Returns the image bytes as a slice.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the image bytes as a mutable slice.
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    pub fn take_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn new_empty(desc: ImageDesc) -> Result<Image> {
        desc.validate()?;

        let bytes = vec![0; desc.size_in_bytes()];

        Ok(Image { desc, bytes })
    }

    pub fn new_with_data(desc: ImageDesc, bytes: Vec<u8>) -> Result<Image> {
        desc.validate()?;

        if bytes.len() != desc.size_in_bytes() {
            return Err(Error::BufferSize(format!(
                "bytes length {} does not match expected size {}",
                bytes.len(),
                desc.size_in_bytes()
            )));
        }

        Ok(Image { desc, bytes })
    }

    pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<Image> {
        let extension = filename
            .as_ref()
            .extension()
            .and_then(|os_str| os_str.to_str())
            .ok_or_else(|| Error::InvalidExtension("missing extension".to_string()))?
            .to_ascii_lowercase();

        if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(Error::InvalidExtension(extension));
        }

        io::load(filename)
    }

    pub fn save_file<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        let extension = filename
            .as_ref()
            .extension()
            .and_then(|os_str| os_str.to_str())
            .ok_or_else(|| Error::InvalidExtension("missing extension".to_string()))?
            .to_ascii_lowercase();

        match extension.as_str() {
            "png" => io::save(self, filename, image::ImageFormat::Png),
            "jpeg" | "jpg" => io::save(self, filename, image::ImageFormat::Jpeg),

            _ => Err(Error::InvalidExtension(extension)),
        }
    }

    /// Expands the image to the target channel count.
    ///
    /// L sources replicate the gray value into R, G and B; L and RGB sources
    /// get an opaque alpha of 255. Narrowing conversions are not supported.
    pub fn convert(self, channel_count: ChannelCount) -> Result<Image> {
        if self.desc.channel_count == channel_count {
            return Ok(self);
        }

        if channel_count != ChannelCount::Rgba {
            return Err(Error::UnsupportedColorType(format!(
                "conversion {} -> {}",
                self.desc.channel_count, channel_count
            )));
        }

        let desc = ImageDesc::new(self.desc.width, self.desc.height, ChannelCount::Rgba);
        let mut bytes = vec![0; desc.size_in_bytes()];

        match self.desc.channel_count {
            ChannelCount::L => {
                for (dst, &gray) in bytes.chunks_exact_mut(4).zip(self.bytes.iter()) {
                    dst[0] = gray;
                    dst[1] = gray;
                    dst[2] = gray;
                    dst[3] = 255;
                }
            }
            ChannelCount::Rgb => {
                for (dst, src) in bytes.chunks_exact_mut(4).zip(self.bytes.chunks_exact(3)) {
                    dst[..3].copy_from_slice(src);
                    dst[3] = 255;
                }
            }
            ChannelCount::Rgba => unreachable!(),
        }

        Ok(Image { desc, bytes })
    }

    /// Reverses the row order in place.
    pub fn flip_vertical(&mut self) {
        let row_bytes = self.desc.row_bytes();
        let height = self.desc.height as usize;

        for row in 0..height / 2 {
            let opposite = height - 1 - row;
            let (top, bottom) = self.bytes.split_at_mut(opposite * row_bytes);
            top[row * row_bytes..row * row_bytes + row_bytes]
                .swap_with_slice(&mut bottom[..row_bytes]);
        }
    }

    /// Returns one row of an RGBA image as pixel quadruples.
    #[inline]
    pub fn rgba_row(&self, row: u32) -> &[[u8; 4]] {
        debug_assert_eq!(self.desc.channel_count, ChannelCount::Rgba);
        debug_assert!(row < self.desc.height);

        let row_bytes = self.desc.row_bytes();
        let start = row as usize * row_bytes;
        bytemuck::cast_slice(&self.bytes[start..start + row_bytes])
    }

    /// Returns the RGBA pixel at the given column and row.
    #[inline]
    pub fn rgba(&self, col: u32, row: u32) -> [u8; 4] {
        self.rgba_row(row)[col as usize]
    }
}
