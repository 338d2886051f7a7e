//! Connectivity Demo TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 面板控制器与配置 (`backend/`)
//!
//! 启动流程：加载配置 → 创建后端服务（tokio 运行时 + 面板控制器）→
//! 初始化终端 → 运行主循环 → 恢复终端。

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;

use backend::{ConfigService, DemoService, LocalConfigService};
use util::{init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 加载配置（CONFIG_FILE 环境变量指定的 JSON 文件，否则内置默认值）
    let config = LocalConfigService.load()?;

    // 2. 创建后端服务
    let backend = Arc::new(DemoService::new(config)?);

    // 3. 初始化终端
    let mut terminal = init_terminal()?;

    // 4. 创建应用实例并运行主循环
    let mut app = model::App::new(backend);
    let result = app::run(&mut terminal, &mut app);

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    result
}
