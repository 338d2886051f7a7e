//! 主消息枚举

use super::{NavigationMessage, PanelMessage};

/// 应用级消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,
    /// 切换焦点面板（导航 ↔ 内容）
    ToggleFocus,
    /// 导航面板子消息
    Navigation(NavigationMessage),
    /// 演示面板子消息
    Panel(PanelMessage),
    /// 返回概览页（重置所有面板）
    GoBack,
    /// 无操作，用于代替 Option::None
    Noop,
}
