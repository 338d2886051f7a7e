//! 状态栏组件
//!
//! 状态栏完全从 Model 派生：检查进行中（当前面板的转轮可见）时显示
//! 进度提示，否则按当前页面显示快捷键提示。不保存任何消息状态，
//! 因此不存在"检查结束后提示残留"的问题。

use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

use crate::model::App;
use crate::view::theme::colors;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let bar =
        Paragraph::new(status_text(app)).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(bar, area);
}

/// 当前应显示的状态栏文本
fn status_text(app: &App) -> String {
    if let Some(pane) = app.current_panel().and_then(|index| app.panels.get(index)) {
        if pane.display.spinner_visible {
            return " checking connectivity…".to_string();
        }
        return " s start · r run · ↓ field · Tab focus · Esc back".to_string();
    }
    " ↑/↓ select · Enter open · Tab focus · q quit".to_string()
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::backend::DemoService;
    use crate::model::Page;
    use connectivity_demo_core::types::RunnerConfig;
    use std::sync::Arc;

    fn app() -> App {
        let backend = DemoService::new(RunnerConfig::default()).expect("backend");
        App::new(Arc::new(backend))
    }

    #[test]
    fn test_overview_shows_navigation_hints() {
        let app = app();
        assert!(status_text(&app).contains("Enter open"));
    }

    #[test]
    fn test_progress_text_follows_the_spinner() {
        let mut app = app();
        app.current_page = Page::Panel(0);
        app.panels[0].display.spinner_visible = true;
        assert_eq!(status_text(&app), " checking connectivity…");

        // 检查结束（转轮隐藏）后回到快捷键提示
        app.panels[0].display.spinner_visible = false;
        assert!(status_text(&app).contains("s start"));
    }
}
