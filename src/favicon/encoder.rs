//! # ICO 编码模块
//!
//! ## 设计思路
//!
//! 把"一张 RGBA 源图 + 一组目标边长"编码为单个多帧 ICO 文件。
//! 每帧独立缩放后以 PNG 压缩嵌入，由消费端按显示场景选择分辨率。

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::{ExtendedColorType, RgbaImage};

use super::{FaviconError, pipeline};

/// 将源图按给定边长集合编码为多帧 ICO 并写入 `path`。
///
/// 已存在的输出文件直接覆盖；写入中途失败可能留下不完整文件（既有行为）。
pub(super) fn write_ico(
    source: &RgbaImage,
    sizes: &[u32],
    path: &Path,
) -> Result<(), FaviconError> {
    let mut frames = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let frame = pipeline::resize_frame(source, size);
        let encoded = IcoFrame::as_png(frame.as_raw(), size, size, ExtendedColorType::Rgba8)
            .map_err(|e| FaviconError::Encode(format!("编码 {0}x{0} 帧失败：{1}", size, e)))?;
        frames.push(encoded);
    }

    let file = File::create(path)
        .map_err(|e| FaviconError::FileSystem(format!("创建输出文件失败：{}", e)))?;
    IcoEncoder::new(BufWriter::new(file))
        .encode_images(&frames)
        .map_err(|e| FaviconError::Encode(format!("写入 ICO 失败：{}", e)))?;

    log::debug!("🧩 已写入 {} 帧 ICO：{}", frames.len(), path.display());
    Ok(())
}
