//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载 favicon 链路中的所有错误来源，避免字符串
//! 拼接式错误处理。解码/编码失败在 `generate` 内部被捕获并转为占位
//! 回退，只有占位图落盘失败会以该类型上抛。

/// favicon 生成链路统一错误类型。
///
/// 该类型会在入口层被上转为 `AppError`。
#[derive(Debug, thiserror::Error)]
pub enum FaviconError {
    #[error("解码错误：{0}")]
    Decode(String),

    #[error("编码错误：{0}")]
    Encode(String),

    #[error("文件错误：{0}")]
    FileSystem(String),
}
