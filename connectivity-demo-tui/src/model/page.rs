//! 页面路由状态定义

/// 页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 概览页
    #[default]
    Overview,
    /// 某个演示面板（按配置顺序索引）
    Panel(usize),
}

impl Page {
    /// 是否是面板详情页（需要返回按钮）
    #[must_use]
    pub fn is_panel_page(&self) -> bool {
        matches!(self, Page::Panel(_))
    }
}
