//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, NavigationMessage, PanelMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        Event::Resize(_, _) => AppMessage::Noop, // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat，
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return if app.current_page.is_panel_page() {
            AppMessage::GoBack
        } else {
            AppMessage::Quit
        };
    }

    // Tab: 切换焦点面板
    if key.modifiers.is_empty() && key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_panel_keys(key, app)
    }
}

/// 焦点在导航面板时的按键处理
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::NAV_UP.matches(&key) {
        return AppMessage::Navigation(NavigationMessage::SelectPrevious);
    }
    if DefaultKeymap::NAV_DOWN.matches(&key) {
        return AppMessage::Navigation(NavigationMessage::SelectNext);
    }
    if DefaultKeymap::NAV_CONFIRM.matches(&key) {
        return AppMessage::Navigation(NavigationMessage::Confirm);
    }
    AppMessage::Noop
}

/// 焦点在面板页时的按键处理
fn handle_panel_keys(key: KeyEvent, app: &App) -> AppMessage {
    let editing = app
        .current_panel()
        .and_then(|index| app.panels.get(index))
        .is_some_and(|pane| pane.field_focus.is_some());

    // 字段聚焦时，字符按键进入输入框而不是触发快捷键
    if editing {
        if DefaultKeymap::PANEL_FIELD.matches(&key) {
            return AppMessage::Panel(PanelMessage::NextField);
        }
        return match key.code {
            KeyCode::Char(c) if key.modifiers.is_empty() => {
                AppMessage::Panel(PanelMessage::Input(c))
            }
            KeyCode::Backspace => AppMessage::Panel(PanelMessage::Backspace),
            _ => AppMessage::Noop,
        };
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::PANEL_START.matches(&key) {
        return AppMessage::Panel(PanelMessage::Start);
    }
    if DefaultKeymap::PANEL_RUN.matches(&key) {
        return AppMessage::Panel(PanelMessage::Run);
    }
    if DefaultKeymap::PANEL_FIELD.matches(&key) {
        return AppMessage::Panel(PanelMessage::NextField);
    }
    AppMessage::Noop
}
