//! 导航子消息处理

use crate::message::NavigationMessage;
use crate::model::{App, FocusPanel, Page};

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.navigation.select_previous();
        }
        NavigationMessage::SelectNext => {
            app.navigation.select_next();
        }
        NavigationMessage::Confirm => {
            // 切换导航项时把所有演示面板重置回空闲状态
            app.backend.reset_all();

            match app.navigation.selected_panel() {
                Some(index) => {
                    app.current_page = Page::Panel(index);
                    app.focus = FocusPanel::Content;
                }
                None => {
                    app.current_page = Page::Overview;
                }
            }
        }
    }
}
