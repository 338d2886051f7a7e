//! 面板子消息处理

use crate::message::PanelMessage;
use crate::model::App;

/// 处理当前面板页的消息
pub fn update(app: &mut App, msg: PanelMessage) {
    let Some(index) = app.current_panel() else {
        return;
    };

    match msg {
        PanelMessage::Start => {
            app.backend.start(index);
        }
        PanelMessage::Run => {
            let credentials = app.panels.get(index).and_then(|pane| pane.credentials());
            app.backend.run(index, credentials);
        }
        PanelMessage::NextField => {
            if let Some(pane) = app.panels.get_mut(index) {
                pane.focus_next_field();
            }
        }
        PanelMessage::Input(c) => {
            if let Some(pane) = app.panels.get_mut(index) {
                pane.input(c);
            }
        }
        PanelMessage::Backspace => {
            if let Some(pane) = app.panels.get_mut(index) {
                pane.backspace();
            }
        }
    }
}
