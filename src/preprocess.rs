//! Image-to-tensor transform: resize to 224x224, CHW f32, ImageNet
//! normalization. Matches the transform the checkpoint was trained with.

use std::path::Path;

use candle_core::{DType, Device, Tensor};
use image::DynamicImage;

use crate::error::{Error, Result};

pub const IMAGE_SIZE: usize = 224;
pub const IMAGENET_MEAN: [f32; 3] = [0.485f32, 0.456, 0.406];
pub const IMAGENET_STD: [f32; 3] = [0.229f32, 0.224, 0.225];

/// Reads and decodes an image from disk, then applies [`to_tensor_224`].
/// A missing file or undecodable content is an error; no fallback.
pub fn load_image_224(path: impl AsRef<Path>, device: &Device) -> Result<Tensor> {
    let path = path.as_ref();
    let reader = image::io::Reader::open(path).map_err(|source| Error::ImageRead {
        path: path.to_path_buf(),
        source,
    })?;
    let img = reader.decode().map_err(|source| Error::ImageDecode {
        path: path.to_path_buf(),
        source,
    })?;
    to_tensor_224(&img, device)
}

/// Transforms a decoded image into a normalized `(3, 224, 224)` f32 tensor.
/// The caller adds the batch dimension.
pub fn to_tensor_224(img: &DynamicImage, device: &Device) -> Result<Tensor> {
    let img = img.resize_exact(
        IMAGE_SIZE as u32,
        IMAGE_SIZE as u32,
        image::imageops::FilterType::Triangle,
    );
    let img = img.to_rgb8();
    let data = img.into_raw();
    let data =
        Tensor::from_vec(data, (IMAGE_SIZE, IMAGE_SIZE, 3), device)?.permute((2, 0, 1))?;
    let mean = Tensor::new(&IMAGENET_MEAN, device)?.reshape((3, 1, 1))?;
    let std = Tensor::new(&IMAGENET_STD, device)?.reshape((3, 1, 1))?;
    let xs = (data.to_dtype(DType::F32)? / 255.0)?
        .broadcast_sub(&mean)?
        .broadcast_div(&std)?;
    Ok(xs)
}
