//! # Flutter 项目维护工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 Flutter 项目（磁盘文件）                   │
//! │                                                          │
//! │  lib/services/api_service.dart      web/favicon.png      │
//! │         ↕ 原地改写                      ↓ 读取             │
//! └─────────┼───────────────────────────────┼────────────────┘
//! ┌─────────┼───────────────────────────────┼────────────────┐
//! │         ↕         维护工具 (Rust)        ↓                │
//! │                                                          │
//! │  ┌─ error ──────────── AppError (统一错误类型)            │
//! │  │                                                       │
//! │  ├─ config ─────────── 固定路径与生成参数                  │
//! │  │                                                       │
//! │  ├─ timeout_injector ─ 正则改写 HTTP 请求语句              │
//! │  │                                                       │
//! │  └─ favicon ────────── 解码·缩放·多分辨率 ICO 编码         │
//! │      ├─ pipeline          解码 + RGBA 归一化 + 逐帧缩放    │
//! │      └─ encoder           ICO 帧编码与落盘                │
//! │                                     ↓ 写入               │
//! │                             web/favicon.ico              │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，两个入口函数的返回类型 |
//! | [`config`] | 目标文件路径、图标尺寸、占位颜色等固定参数 |
//! | [`timeout_injector`] | 为 Dart 源文件中的 HTTP 请求补充 `.timeout(...)` |
//! | [`favicon`] | 从 PNG 生成多分辨率 favicon.ico，带占位回退 |
//!
//! 两个工具互不依赖，各自对应 `src/bin/` 下的一个入口。

pub mod config;
pub mod error;
pub mod favicon;
pub mod timeout_injector;
