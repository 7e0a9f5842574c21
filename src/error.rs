//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义全局统一的 `AppError` 枚举，作为两个工具入口函数的返回类型，
//! 替代分散的 `.map_err(|e| e.to_string())`、`format!(...)` 等不一致模式。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `io::Error` 与 `FaviconError` 提供 `From` 转换，无需手动 map。

use crate::favicon::FaviconError;

/// 应用级统一错误类型
///
/// 两个入口函数（超时注入、favicon 生成）均返回此类型。
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 文件系统 I/O 错误（超时注入工具的唯一失败路径）
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),

    /// favicon 生成链路错误（解码 / 编码 / 落盘）
    #[error("{0}")]
    Favicon(#[from] FaviconError),
}
