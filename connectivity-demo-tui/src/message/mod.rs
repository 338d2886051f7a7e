//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁：所有的用户操作都先被翻译成
//! Message，Update 层再根据 Message 修改 Model。
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息枚举
//!         mod navigation;     // 导航面板子消息
//!         mod panel;          // 演示面板子消息

mod app;
mod navigation;
mod panel;

pub use app::AppMessage;
pub use navigation::NavigationMessage;
pub use panel::PanelMessage;
