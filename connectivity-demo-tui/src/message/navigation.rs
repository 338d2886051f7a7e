//! 导航面板子消息

/// 导航消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMessage {
    /// 向上移动
    SelectPrevious,
    /// 向下移动
    SelectNext,
    /// 确认：进入选中的页面
    Confirm,
}
