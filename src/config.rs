//! # 配置模块
//!
//! ## 设计思路
//!
//! 将两个工具的所有"固定策略"集中到一处，保证行为可观测、可测试。
//! 两个工具按约定面向固定的相对路径运行（在 Flutter 项目根目录下执行），
//! 不接受命令行参数与环境变量。
//!
//! ## 实现思路
//!
//! - 路径类常量指向 Flutter 项目内的约定位置。
//! - 图标尺寸集合区分"正常生成"与"错误回退"两套，二者不对称是
//!   既有行为，不做统一。

use image::imageops::FilterType;

/// 超时注入的目标 Dart 源文件（相对 Flutter 项目根目录）。
pub const API_SERVICE_FILE: &str = "lib/services/api_service.dart";

/// 注入的超时时长表达式，引用 Dart 侧的配置常量。
pub const TIMEOUT_CONFIG_SYMBOL: &str = "ApiConfig.timeout";

/// 已有超时调用的判定标记：语句中出现该子串即跳过注入。
pub const TIMEOUT_CALL_MARKER: &str = ".timeout(";

/// favicon 源图片路径（相对 Flutter 项目根目录）。
pub const FAVICON_PNG_FILE: &str = "web/favicon.png";

/// favicon 输出路径，存在则直接覆盖。
pub const FAVICON_ICO_FILE: &str = "web/favicon.ico";

/// 正常生成时嵌入 ICO 的帧边长集合。
pub const ICON_SIZES: [u32; 3] = [16, 32, 48];

/// 解码/编码失败回退时的帧边长集合（比正常路径少一档）。
pub const FALLBACK_ICON_SIZES: [u32; 2] = [16, 32];

/// 占位图标的边长（像素）。
pub const PLACEHOLDER_DIMENSION: u32 = 32;

/// 占位图标的填充色：淡紫色，完全不透明（RGBA）。
pub const PLACEHOLDER_COLOR: [u8; 4] = [156, 39, 176, 255];

/// 逐帧缩放使用的重采样滤镜。
pub const FRAME_FILTER: FilterType = FilterType::Lanczos3;
