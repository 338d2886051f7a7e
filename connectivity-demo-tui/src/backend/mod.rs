//! Backend 层：配置加载与面板控制器
//!
//! UI 层不直接碰 HTTP：面板消息到这里变成交给 tokio 运行时的异步
//! 任务，任务把结果写进 core 的 `PanelController` 显示状态，主循环
//! 再按帧拉取快照。

mod config_service;
mod demo_service;

pub use config_service::{ConfigService, LocalConfigService};
pub use demo_service::DemoService;
