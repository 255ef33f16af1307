use crate::common::test_utils::gradient_rgba;
use crate::common::Error;
use crate::image::{ChannelCount, Image, ImageDesc};

// =============================================================================
// Construction
// =============================================================================

#[test]
fn new_empty_is_transparent_black() {
    let img = Image::new_empty(ImageDesc::new(3, 2, ChannelCount::Rgba)).unwrap();
    assert_eq!(img.bytes().len(), 3 * 2 * 4);
    assert!(img.bytes().iter().all(|&b| b == 0));
}

#[test]
fn zero_dimensions_are_rejected() {
    let result = Image::new_empty(ImageDesc::new(0, 4, ChannelCount::Rgba));
    assert!(matches!(result, Err(Error::InvalidDimensions(_))));

    let result = Image::new_empty(ImageDesc::new(4, 0, ChannelCount::L));
    assert!(matches!(result, Err(Error::InvalidDimensions(_))));
}

#[test]
fn mismatched_buffer_length_is_rejected() {
    let desc = ImageDesc::new(2, 2, ChannelCount::Rgba);
    let result = Image::new_with_data(desc, vec![0; 15]);
    assert!(matches!(result, Err(Error::BufferSize(_))));
}

#[test]
fn desc_display() {
    let desc = ImageDesc::new(640, 480, ChannelCount::Rgba);
    assert_eq!(desc.to_string(), "640x480 RGBA");
}

// =============================================================================
// Channel expansion
// =============================================================================

#[test]
fn convert_l_to_rgba_replicates_gray() {
    let desc = ImageDesc::new(2, 1, ChannelCount::L);
    let img = Image::new_with_data(desc, vec![10, 200]).unwrap();

    let rgba = img.convert(ChannelCount::Rgba).unwrap();
    assert_eq!(rgba.bytes(), &[10, 10, 10, 255, 200, 200, 200, 255]);
}

#[test]
fn convert_rgb_to_rgba_adds_opaque_alpha() {
    let desc = ImageDesc::new(2, 1, ChannelCount::Rgb);
    let img = Image::new_with_data(desc, vec![1, 2, 3, 4, 5, 6]).unwrap();

    let rgba = img.convert(ChannelCount::Rgba).unwrap();
    assert_eq!(rgba.bytes(), &[1, 2, 3, 255, 4, 5, 6, 255]);
}

#[test]
fn convert_rgba_is_a_no_op() {
    let img = gradient_rgba(4, 3);
    let bytes = img.bytes().to_vec();
    let converted = img.convert(ChannelCount::Rgba).unwrap();
    assert_eq!(converted.bytes(), &bytes[..]);
}

#[test]
fn narrowing_conversion_is_rejected() {
    let img = gradient_rgba(2, 2);
    assert!(matches!(
        img.convert(ChannelCount::L),
        Err(Error::UnsupportedColorType(_))
    ));
}

// =============================================================================
// Row order
// =============================================================================

#[test]
fn flip_vertical_reverses_rows() {
    let desc = ImageDesc::new(1, 3, ChannelCount::Rgba);
    let mut img = Image::new_with_data(
        desc,
        vec![
            1, 1, 1, 1, //
            2, 2, 2, 2, //
            3, 3, 3, 3,
        ],
    )
    .unwrap();

    img.flip_vertical();
    assert_eq!(img.rgba(0, 0), [3, 3, 3, 3]);
    assert_eq!(img.rgba(0, 1), [2, 2, 2, 2]);
    assert_eq!(img.rgba(0, 2), [1, 1, 1, 1]);
}

#[test]
fn flip_vertical_twice_restores_image() {
    let mut img = gradient_rgba(5, 4);
    let original = img.bytes().to_vec();

    img.flip_vertical();
    img.flip_vertical();
    assert_eq!(img.bytes(), &original[..]);
}

// =============================================================================
// File round-trip
// =============================================================================

#[test]
fn save_and_reload_png() {
    let original = gradient_rgba(16, 9);
    let path = std::env::temp_dir().join("warpium_save_reload.png");

    original.save_file(&path).unwrap();
    let reloaded = Image::read_file(&path).unwrap();

    assert_eq!(original.desc(), reloaded.desc());
    assert_eq!(original.bytes(), reloaded.bytes());
}

#[test]
fn read_invalid_extension_returns_error() {
    let result = Image::read_file("/nonexistent/file.xyz");
    assert!(matches!(result, Err(Error::InvalidExtension(_))));
}

#[test]
fn read_missing_file_returns_error() {
    let result = Image::read_file("/nonexistent/does_not_exist.png");
    assert!(result.is_err());
}
