//! # 超时注入工具 — 入口
//!
//! 本文件仅负责日志初始化与固定路径调用。
//! 改写逻辑见库中的 `timeout_injector` 模块。

use std::path::Path;

use flutter_maintenance_tools::{config, timeout_injector};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = timeout_injector::run(Path::new(config::API_SERVICE_FILE)) {
        log::error!("❌ 超时注入失败：{}", err);
        std::process::exit(1);
    }
}
