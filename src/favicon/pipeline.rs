//! # 解码与缩放流水线模块
//!
//! ## 设计思路
//!
//! 将"字节 → 图像 → RGBA → 目标边长"的过程集中管理。ICO 帧要求
//! 带透明通道的像素数据，因此解码后统一归一化为 RGBA（直通 alpha，
//! 不改动内容）。
//!
//! ## 实现思路
//!
//! 1. 读取文件字节并完整解码
//! 2. 色彩模式缺少 alpha 时转换为 RGBA
//! 3. 逐帧缩放：优先 `fast_image_resize`，失败回退 `image` 自带缩放

use fast_image_resize as fr;
use image::imageops::FilterType;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

use crate::config::FRAME_FILTER;

use super::FaviconError;

/// 读取并解码源图片，归一化为 RGBA。
pub(super) fn load_rgba(path: &Path) -> Result<RgbaImage, FaviconError> {
    let bytes = std::fs::read(path)
        .map_err(|e| FaviconError::FileSystem(format!("无法读取图片文件：{}", e)))?;

    let decoded = image::load_from_memory(&bytes)
        .map_err(|e| FaviconError::Decode(format!("图片解码失败：{}", e)))?;

    if !decoded.color().has_alpha() {
        log::info!("🎨 源图片无透明通道（{:?}），转换为 RGBA", decoded.color());
    }

    Ok(decoded.to_rgba8())
}

/// 将源图缩放到目标边长（正方形帧）。
///
/// 快速路径失败时回退到 `image::imageops::resize`，保证缩放本身
/// 不会让整条链路失败。
pub(super) fn resize_frame(source: &RgbaImage, target: u32) -> RgbaImage {
    if source.dimensions() == (target, target) {
        return source.clone();
    }

    match resize_with_fast_image_resize(source, target, target, FRAME_FILTER) {
        Ok(resized) => resized,
        Err(err) => {
            log::warn!("⚠️ fast_image_resize 缩放失败，回退 image::resize：{}", err);
            image::imageops::resize(source, target, target, FRAME_FILTER)
        }
    }
}

fn resize_with_fast_image_resize(
    source: &RgbaImage,
    target_width: u32,
    target_height: u32,
    filter: FilterType,
) -> Result<RgbaImage, FaviconError> {
    let (src_width, src_height) = source.dimensions();

    let src_image = fr::images::Image::from_vec_u8(
        src_width,
        src_height,
        source.as_raw().clone(),
        fr::PixelType::U8x4,
    )
    .map_err(|e| FaviconError::Decode(format!("构建源图像缓冲失败：{}", e)))?;

    let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

    let mut resizer = fr::Resizer::new();
    let options = fr::ResizeOptions::new()
        .resize_alg(fr::ResizeAlg::Convolution(to_fast_filter(filter)));

    resizer
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| FaviconError::Decode(format!("fast_image_resize 执行失败：{}", e)))?;

    ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(target_width, target_height, dst_image.into_vec())
        .ok_or_else(|| FaviconError::Decode("fast_image_resize 输出缓冲长度异常".to_string()))
}

fn to_fast_filter(filter: FilterType) -> fr::FilterType {
    match filter {
        FilterType::Nearest => fr::FilterType::Box,
        FilterType::Triangle => fr::FilterType::Bilinear,
        FilterType::CatmullRom => fr::FilterType::CatmullRom,
        FilterType::Gaussian => fr::FilterType::Mitchell,
        FilterType::Lanczos3 => fr::FilterType::Lanczos3,
    }
}
