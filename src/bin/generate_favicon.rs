//! # favicon 生成工具 — 入口
//!
//! 本文件仅负责日志初始化与固定路径调用。
//! 生成逻辑（含占位回退分支）见库中的 `favicon` 模块。

use std::path::Path;

use flutter_maintenance_tools::{config, favicon};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("🎨 正在生成 favicon.ico...");
    if let Err(err) = favicon::generate(
        Path::new(config::FAVICON_PNG_FILE),
        Path::new(config::FAVICON_ICO_FILE),
    ) {
        log::error!("❌ favicon 写入失败：{}", err);
        std::process::exit(1);
    }
}
