//! 导航状态定义

/// 导航项
#[derive(Debug, Clone)]
pub struct NavItem {
    pub label: String,
    pub icon: &'static str,
}

/// 导航状态
pub struct NavigationState {
    /// 导航项列表：概览 + 每个面板一项
    pub items: Vec<NavItem>,
    /// 当前选中的索引
    pub selected: usize,
}

impl NavigationState {
    /// 根据面板标题构建导航
    #[must_use]
    pub fn new(panel_titles: &[String]) -> Self {
        let mut items = vec![NavItem {
            label: "Overview".to_string(),
            icon: "⌂",
        }];
        items.extend(panel_titles.iter().map(|title| NavItem {
            label: title.clone(),
            icon: "●",
        }));
        Self { items, selected: 0 }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// 当前选中项对应的面板索引（概览返回 `None`）
    #[must_use]
    pub fn selected_panel(&self) -> Option<usize> {
        self.selected.checked_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> NavigationState {
        NavigationState::new(&["Demo A".to_string(), "Demo B".to_string()])
    }

    #[test]
    fn test_overview_is_first_item() {
        let nav = nav();
        assert_eq!(nav.items.len(), 3);
        assert_eq!(nav.selected_panel(), None);
    }

    #[test]
    fn test_selection_stays_within_bounds() {
        let mut nav = nav();
        nav.select_previous();
        assert_eq!(nav.selected, 0);
        nav.select_next();
        nav.select_next();
        nav.select_next();
        assert_eq!(nav.selected, 2);
        assert_eq!(nav.selected_panel(), Some(1));
    }
}
