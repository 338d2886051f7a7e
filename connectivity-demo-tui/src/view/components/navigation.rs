//! 左侧导航组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// 渲染导航面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let border_style = if app.focus.is_navigation() {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let items: Vec<ListItem> = app
        .navigation
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let style = if index == app.navigation.selected {
                Style::default()
                    .bg(c.selected_bg)
                    .fg(c.selected_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };
            ListItem::new(Line::styled(
                format!(" {} {}", item.icon, item.label),
                style,
            ))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Demos ")
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(list, area);
}
