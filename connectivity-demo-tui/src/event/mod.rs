//! Event 层：事件处理
//!
//! 负责将键盘等输入事件转换为 Message：
//!     poll_event      事件轮询（最长阻塞 timeout），受 ~/app.rs 调用
//!     handle_event    事件分发，返回一个 AppMessage
//!
//! 判断顺序：
//!     - 全局快捷键（Ctrl+C、Tab）就地处理；
//!     - 焦点位于导航面板，交给 handle_navigation_keys；
//!     - 焦点位于内容面板（面板页），交给 handle_panel_keys。

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
