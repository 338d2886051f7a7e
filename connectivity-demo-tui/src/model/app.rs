//! 应用主状态结构

use std::sync::Arc;

use crate::backend::DemoService;

use super::{FocusPanel, NavigationState, Page, PanelPane};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 各面板页面状态（与后端控制器同序）
    pub panels: Vec<PanelPane>,

    /// 后端服务（面板控制器 + tokio 运行时）
    pub backend: Arc<DemoService>,
}

impl App {
    /// 创建新的应用实例
    #[must_use]
    pub fn new(backend: Arc<DemoService>) -> Self {
        let titles: Vec<String> = backend
            .configs()
            .iter()
            .map(|config| config.title.clone())
            .collect();
        let panels = backend.configs().iter().map(PanelPane::new).collect();

        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(&titles),
            current_page: Page::Overview,
            panels,
            backend,
        }
    }

    /// 从控制器拉取各面板的最新显示快照
    pub fn refresh_panels(&mut self) {
        for (index, pane) in self.panels.iter_mut().enumerate() {
            if let Some(display) = self.backend.snapshot(index) {
                pane.display = display;
            }
        }
    }

    /// 当前页面对应的面板索引
    #[must_use]
    pub fn current_panel(&self) -> Option<usize> {
        match self.current_page {
            Page::Panel(index) => Some(index),
            Page::Overview => None,
        }
    }
}
