//! Record Manager TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置服务 (`backend/`)
//!
//! 表单与记录列表的业务状态全部在 `record-manager-core` 的 `RecordForm` 中，
//! 本 crate 只负责把按键翻译成对它的调用，并把它渲染出来。
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 日志写入文件（终端归 ratatui 所有）
//!     init_terminal()         // 初始化终端
//!     model::App::new()       // 创建 APP 实例（加载配置）
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_utils;

use anyhow::Result;

use backend::LocalConfigService;
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 0. 初始化日志（失败不影响使用）
    match init_logging() {
        Ok(path) => tracing::info!("Logging to {}", path.display()),
        Err(e) => eprintln!("Failed to initialize logging: {e:#}"),
    }

    // 1. 初始化终端
    let mut terminal = init_terminal()?;

    // 2. 创建应用实例
    let config_service = LocalConfigService::new();
    tracing::info!("Config file: {}", config_service.path().display());
    let mut app = model::App::new(Box::new(config_service));

    // 3. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 4. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    tracing::info!("Record Manager exited");

    // 5. 返回结果
    result
}
