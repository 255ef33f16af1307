use std::path::Path;

use image as image_lib;

use super::{ChannelCount, Image, ImageDesc};
use crate::common::{Error, Result};

pub(crate) fn load<P: AsRef<Path>>(filename: P) -> Result<Image> {
    let img = image_lib::open(filename)?;

    let channel_count = match img.color() {
        image_lib::ColorType::L8 => ChannelCount::L,
        image_lib::ColorType::Rgb8 => ChannelCount::Rgb,
        image_lib::ColorType::Rgba8 => ChannelCount::Rgba,

        _ => return Err(Error::UnsupportedColorType(format!("{:?}", img.color()))),
    };

    let desc = ImageDesc::new(img.width(), img.height(), channel_count);

    Image::new_with_data(desc, img.into_bytes())
}

pub(crate) fn save<P: AsRef<Path>>(
    image: &Image,
    filename: P,
    format: image_lib::ImageFormat,
) -> Result<()> {
    let color_type = match image.desc().channel_count {
        ChannelCount::L => image_lib::ColorType::L8,
        ChannelCount::Rgb => image_lib::ColorType::Rgb8,
        ChannelCount::Rgba => image_lib::ColorType::Rgba8,
    };

    // JPEG cannot carry an alpha channel
    if format == image_lib::ImageFormat::Jpeg && image.desc().channel_count == ChannelCount::Rgba {
        let rgb: Vec<u8> = image
            .bytes()
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();
        image_lib::save_buffer_with_format(
            filename,
            &rgb,
            image.desc().width,
            image.desc().height,
            image_lib::ColorType::Rgb8,
            format,
        )?;
        return Ok(());
    }

    image_lib::save_buffer_with_format(
        filename,
        image.bytes(),
        image.desc().width,
        image.desc().height,
        color_type,
        format,
    )?;

    Ok(())
}
