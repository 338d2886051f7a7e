//! 概览页面：列出所有演示面板及其当前状态

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use connectivity_demo_core::types::PanelState;

use crate::model::App;
use crate::view::theme::colors;

/// 渲染概览页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let mut lines = vec![
        Line::styled(
            "Service connectivity demos",
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "Each demo resolves a service name and runs a connectivity check",
            Style::default().fg(c.muted),
        ),
        Line::styled(
            "against it. Select a demo on the left and press Enter to open it.",
            Style::default().fg(c.muted),
        ),
        Line::raw(""),
    ];

    let configs = app.backend.configs();
    for (index, pane) in app.panels.iter().enumerate() {
        let Some(config) = configs.get(index) else {
            continue;
        };

        let state = pane.display.state;
        let state_style = match state {
            PanelState::Success => Style::default().fg(c.success),
            PanelState::Error => Style::default().fg(c.error),
            PanelState::Running => Style::default().fg(c.highlight),
            PanelState::Idle => Style::default().fg(c.muted),
        };

        let checked = pane
            .display
            .checked_at
            .map_or_else(String::new, |at| {
                format!("  (checked {})", at.format("%H:%M:%S"))
            });

        lines.push(Line::from(vec![
            Span::styled(format!(" ● {}", config.title), Style::default().fg(c.fg)),
            Span::raw("  "),
            Span::styled(format!("[{state}]"), state_style),
            Span::styled(checked, Style::default().fg(c.muted)),
        ]));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
