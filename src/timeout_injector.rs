//! HTTP 请求超时注入模块
//!
//! # 设计思路
//!
//! Dart 侧的 `api_service.dart` 历史上存在大量没有超时保护的
//! `await http.get(...)` 等请求语句，弱网环境下会无限挂起。
//! 本模块对该文件做一次性的文本改写：在每条缺少 `.timeout(...)` 的
//! HTTP 请求语句末尾、分号之前插入 `.timeout(ApiConfig.timeout)`。
//!
//! # 实现思路
//!
//! - 使用 `once_cell::sync::Lazy` 在首次调用时编译正则，后续零成本复用。
//! - 纯函数 `inject_timeouts` 负责文本变换，文件读写由 `run` 统一编排，
//!   便于单元测试不落盘。
//! - 改写是纯文本层面的，不校验结果是否仍为合法 Dart 代码；
//!   参数列表中含分号的多行语句不在匹配范围内（既有限制）。

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::config::{TIMEOUT_CALL_MARKER, TIMEOUT_CONFIG_SYMBOL};
use crate::error::AppError;

/// 预编译的 HTTP 请求语句模式
///
/// 匹配的形状：
/// 1. `await` 前缀（异步调用）
/// 2. `http.` 命名空间下的动词调用（get / post / put / delete / patch）
/// 3. 参数列表：允许嵌套括号，但不允许出现分号（单语句假设）
/// 4. 可选空白 + 语句终结分号
static HTTP_CALL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(await http\.(get|post|put|delete|patch)\([^;]+\))(\s*;)").unwrap()
});

/// 对整段源文本执行一遍超时注入
///
/// # 设计思路
/// - 已含 `.timeout(` 的语句原样保留，保证幂等：重复执行不会二次插入。
/// - 其余匹配语句在分号前插入 `.timeout(ApiConfig.timeout)`，参数不变。
///
/// # 参数
/// * `content` - 源文件完整内容
///
/// # 返回
/// - 改写后的文本与实际插入的语句数（零匹配时文本原样返回）
pub fn inject_timeouts(content: &str) -> (String, usize) {
    let mut injected = 0usize;
    let rewritten = HTTP_CALL_PATTERN.replace_all(content, |caps: &Captures| {
        let statement = &caps[1];
        if statement.contains(TIMEOUT_CALL_MARKER) {
            // 已有超时保护，不修改
            caps[0].to_string()
        } else {
            injected += 1;
            format!("{}.timeout({}){}", statement, TIMEOUT_CONFIG_SYMBOL, &caps[3])
        }
    });
    (rewritten.into_owned(), injected)
}

/// 读取目标文件，注入超时后原地写回
///
/// 不生成备份文件；零匹配时文件会被原内容重写一遍。
/// 读写失败（文件不存在、权限不足）作为致命错误向上传播。
///
/// # 返回
/// - `Ok(usize)` — 本次实际插入的语句数
/// - `Err(AppError::Io)` — 文件读写失败
pub fn run(path: &Path) -> Result<usize, AppError> {
    let content = fs::read_to_string(path)?;
    let (rewritten, injected) = inject_timeouts(&content);
    fs::write(path, rewritten)?;

    log::info!("✅ 已为 {} 处 HTTP 请求补充 timeout", injected);
    log::info!("📝 文件已更新：{}", path.display());
    Ok(injected)
}
