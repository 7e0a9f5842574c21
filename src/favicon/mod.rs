//! # favicon 生成模块（favicon）
//!
//! ## 设计思路
//!
//! 将"源图检查 → 解码归一化 → 逐帧缩放 → ICO 编码落盘"按职责拆分，
//! 主流程只做分支编排与状态输出。
//!
//! - `pipeline`：负责解码、RGBA 归一化与逐帧缩放
//! - `encoder`：负责多帧 ICO 编码与写文件
//! - `error`：链路统一错误模型
//!
//! ## 实现思路
//!
//! 调用链固定为三个分支：
//!
//! ```text
//! generate()
//!    ├─ 源图缺失 → 占位图 → encoder（16/32/48 三帧）
//!    ├─ 源图可用 → pipeline 解码归一化 → encoder（16/32/48 三帧）
//!    └─ 解码/编码失败 → 占位图 → encoder（16/32 两帧）
//! ```
//!
//! 回退分支比缺失分支少一帧（48x48）是既有行为，保留不改。
//! 解码/编码错误不向调用方传播，只体现在状态输出里；
//! 占位图自身写入失败仍然向上传播。

mod encoder;
mod error;
mod pipeline;

pub use error::FaviconError;

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::config::{
    FALLBACK_ICON_SIZES, ICON_SIZES, PLACEHOLDER_COLOR, PLACEHOLDER_DIMENSION,
};
use crate::error::AppError;

/// 从源 PNG 生成多分辨率 favicon.ico
///
/// # 参数
/// * `png_path` - 源图片路径（缺失时走占位分支）
/// * `ico_path` - 输出路径，存在则覆盖；不做临时文件原子写
///
/// # 返回
/// - `Ok(())` — 输出文件已写入（含占位回退的情况）
/// - `Err(AppError::Favicon)` — 占位图本身也无法写入
pub fn generate(png_path: &Path, ico_path: &Path) -> Result<(), AppError> {
    if !png_path.exists() {
        log::warn!("❌ 源图片 {} 不存在！", png_path.display());
        log::info!("   使用默认占位图标...");
        write_placeholder(ico_path, &ICON_SIZES)?;
        log::info!("✅ 默认 favicon 已创建：{}", ico_path.display());
        return Ok(());
    }

    match generate_from_source(png_path, ico_path) {
        Ok(()) => {
            log::info!("✅ favicon 生成成功：{}", ico_path.display());
            log::info!("   尺寸：{}", size_list(&ICON_SIZES));
            Ok(())
        }
        Err(err) => {
            log::warn!("❌ favicon 生成失败：{}", err);
            log::info!("   改用默认占位图标...");
            write_placeholder(ico_path, &FALLBACK_ICON_SIZES)?;
            log::info!("✅ 默认 favicon 已创建：{}", ico_path.display());
            Ok(())
        }
    }
}

/// 正常分支：解码源图并编码为三帧 ICO。
fn generate_from_source(png_path: &Path, ico_path: &Path) -> Result<(), FaviconError> {
    let rgba = pipeline::load_rgba(png_path)?;
    encoder::write_ico(&rgba, &ICON_SIZES, ico_path)
}

/// 构造占位图：固定边长的纯色不透明方块。
fn placeholder_image() -> RgbaImage {
    RgbaImage::from_pixel(
        PLACEHOLDER_DIMENSION,
        PLACEHOLDER_DIMENSION,
        Rgba(PLACEHOLDER_COLOR),
    )
}

/// 将占位图按给定尺寸集合编码落盘。
fn write_placeholder(ico_path: &Path, sizes: &[u32]) -> Result<(), FaviconError> {
    encoder::write_ico(&placeholder_image(), sizes, ico_path)
}

/// 供状态输出使用的尺寸列表文本，如 `16x16、32x32、48x48`。
fn size_list(sizes: &[u32]) -> String {
    sizes
        .iter()
        .map(|s| format!("{}x{}", s, s))
        .collect::<Vec<_>>()
        .join("、")
}
