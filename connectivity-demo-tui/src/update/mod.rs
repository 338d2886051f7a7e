//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message、更新 Model，是唯一可以修改 Model 的
//! 地方。耗时操作（面板检查序列）不会在这里执行：面板消息只是把
//! 任务交给 Backend 层的运行时，结果通过控制器快照回流。

mod navigation;
mod panel;

use crate::message::AppMessage;
use crate::model::{App, FocusPanel, Page};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }
        AppMessage::ToggleFocus => {
            app.focus = app.focus.toggle();
        }
        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }
        AppMessage::Panel(panel_msg) => {
            panel::update(app, panel_msg);
        }
        AppMessage::GoBack => {
            // 离开当前分区时把所有面板重置回空闲描述
            app.current_page = Page::Overview;
            app.navigation.selected = 0;
            app.focus = FocusPanel::Navigation;
            app.backend.reset_all();
        }
        AppMessage::Noop => {}
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::backend::DemoService;
    use crate::message::{NavigationMessage, PanelMessage};
    use connectivity_demo_core::types::RunnerConfig;
    use std::sync::Arc;

    fn app() -> App {
        let backend = DemoService::new(RunnerConfig::default()).expect("backend");
        App::new(Arc::new(backend))
    }

    #[test]
    fn test_quit_message_sets_flag() {
        let mut app = app();
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_toggle_focus_round_trips() {
        let mut app = app();
        assert!(app.focus.is_navigation());
        update(&mut app, AppMessage::ToggleFocus);
        assert!(app.focus.is_content());
        update(&mut app, AppMessage::ToggleFocus);
        assert!(app.focus.is_navigation());
    }

    #[test]
    fn test_confirm_on_panel_item_opens_panel_page() {
        let mut app = app();
        update(&mut app, AppMessage::Navigation(NavigationMessage::SelectNext));
        update(&mut app, AppMessage::Navigation(NavigationMessage::Confirm));
        assert_eq!(app.current_page, Page::Panel(0));
        assert!(app.focus.is_content());
    }

    #[test]
    fn test_go_back_returns_to_overview() {
        let mut app = app();
        update(&mut app, AppMessage::Navigation(NavigationMessage::SelectNext));
        update(&mut app, AppMessage::Navigation(NavigationMessage::Confirm));
        update(&mut app, AppMessage::GoBack);
        assert_eq!(app.current_page, Page::Overview);
        assert!(app.focus.is_navigation());
    }

    #[test]
    fn test_panel_input_edits_focused_field() {
        let mut app = app();
        // 面板 2 是 db-connect，支持凭证输入
        app.current_page = Page::Panel(1);
        update(&mut app, AppMessage::Panel(PanelMessage::NextField));
        update(&mut app, AppMessage::Panel(PanelMessage::Input('a')));
        update(&mut app, AppMessage::Panel(PanelMessage::Input('b')));
        update(&mut app, AppMessage::Panel(PanelMessage::Backspace));
        assert_eq!(app.panels[1].db_name, "a");
    }
}
