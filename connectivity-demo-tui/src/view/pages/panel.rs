//! 演示面板页面
//!
//! 按控制器的显示快照渲染各个区域：描述、运行区、凭证输入、
//! 输出、错误、嵌入内容和连接示意图。

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use connectivity_demo_core::types::PanelState;

use crate::model::{App, CredentialField, PanelPane};
use crate::view::theme::colors;

/// 渲染指定索引的面板页面
pub fn render(app: &App, index: usize, frame: &mut Frame, area: Rect) {
    let c = colors();

    let Some(pane) = app.panels.get(index) else {
        return;
    };
    let Some(config) = app.backend.configs().get(index) else {
        return;
    };

    let display = &pane.display;
    let mut lines: Vec<Line> = Vec::new();

    // 描述区（空闲时可见）
    if display.description_visible {
        lines.push(Line::styled(
            config.description.clone(),
            Style::default().fg(c.fg),
        ));
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "Press 's' to start the check.",
            Style::default().fg(c.muted),
        ));
    }

    // 运行区
    if display.running_visible {
        lines.push(Line::from(vec![
            Span::styled("Running", Style::default().fg(c.fg).add_modifier(Modifier::BOLD)),
            Span::styled(
                "  press 'r' to check connectivity",
                Style::default().fg(c.muted),
            ),
        ]));

        if pane.supports_credentials {
            lines.push(Line::raw(""));
            lines.push(credential_line(
                "db name",
                &pane.db_name,
                pane.field_focus == Some(CredentialField::Name),
            ));
            lines.push(credential_line(
                "db key",
                &masked(&pane.db_key),
                pane.field_focus == Some(CredentialField::Key),
            ));
        }
    }

    // 转轮指示器
    if display.spinner_visible {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "⠿ checking…",
            Style::default().fg(c.highlight),
        ));
    }

    // 输出区
    if display.output_visible && !display.output.is_empty() {
        lines.push(Line::raw(""));
        for entry in &display.output {
            lines.push(Line::styled(
                format!("  {entry}"),
                Style::default().fg(c.fg),
            ));
        }
    }

    // 错误区
    if let Some(error) = &display.error {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            format!("  {error}"),
            Style::default().fg(c.error),
        ));
    }

    // 嵌入内容（请求转储面板）
    if let Some(frame_content) = &display.frame {
        lines.push(Line::raw(""));
        for row in frame_content.lines().take(12) {
            lines.push(Line::styled(
                format!("  │ {row}"),
                Style::default().fg(c.muted),
            ));
        }
    }

    // 示意图与完成时间
    lines.push(Line::raw(""));
    lines.push(diagram_line(pane, &display.diagram));
    if let Some(at) = display.checked_at {
        lines.push(Line::styled(
            format!("last checked: {}", at.format("%Y-%m-%d %H:%M:%S UTC")),
            Style::default().fg(c.muted),
        ));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// 凭证输入行，聚焦字段高亮并带光标
fn credential_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let c = colors();
    let value_style = if focused {
        Style::default().bg(c.selected_bg).fg(c.selected_fg)
    } else {
        Style::default().fg(c.fg)
    };
    let cursor = if focused { "▏" } else { "" };
    Line::from(vec![
        Span::styled(format!("  {label:8} "), Style::default().fg(c.muted)),
        Span::styled(format!("[{value}{cursor}]"), value_style),
    ])
}

/// 密钥字段打码显示
fn masked(value: &str) -> String {
    "*".repeat(value.chars().count())
}

/// 示意图行：按面板状态着色
fn diagram_line(pane: &PanelPane, diagram: &str) -> Line<'static> {
    let c = colors();
    let style = match pane.display.state {
        PanelState::Success => Style::default().fg(c.success),
        PanelState::Error => Style::default().fg(c.error),
        _ => Style::default().fg(c.muted),
    };
    Line::from(vec![
        Span::styled("diagram: ", Style::default().fg(c.muted)),
        Span::styled(diagram.to_string(), style),
    ])
}
