//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::{App, Modal, SettingItem};
use crate::util::text::pad_to_width;
use crate::view::theme::colors;

/// 设置项的标签宽度（基于显示宽度）
const LABEL_WIDTH: usize = 16;
/// 值区域的宽度（不含 ◀ ▶）
const VALUE_WIDTH: usize = 18;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Alert { title, message } => render_alert(frame, title, message),
        Modal::Help => render_help(frame),
        Modal::Settings { selected } => render_settings(app, frame, *selected),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗边框，返回内容区域
fn render_frame(frame: &mut Frame, area: Rect, title: &str, border: Color) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors().bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// 渲染阻塞式提示弹窗
fn render_alert(frame: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(40, 7, frame.area());
    let inner = render_frame(frame, area, title, colors().invalid);

    let lines = vec![
        Line::from(""),
        Line::styled(message, Style::default().fg(colors().fg)),
        Line::from(""),
        Line::styled(
            "Press Esc or Enter to close",
            Style::default().fg(colors().muted),
        ),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let area = centered_rect(56, 24, frame.area());
    let inner = render_frame(frame, area, "Help", colors().accent);

    let section = |title: &'static str| {
        Line::styled(
            title,
            Style::default()
                .fg(colors().accent)
                .add_modifier(Modifier::BOLD),
        )
    };
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(pad_to_width(&format!("  {key}"), 14), Style::default().fg(Color::Yellow)),
            Span::styled(desc, Style::default().fg(colors().fg)),
        ])
    };

    let lines = vec![
        section("Global shortcuts"),
        entry("Tab", "Switch panel"),
        entry("Alt+s", "Settings"),
        entry("Alt+h", "Help"),
        entry("Alt+q/Ctrl+C", "Quit"),
        Line::from(""),
        section("Form"),
        entry("↑↓", "Move between fields"),
        entry("←→/Space", "Change gender"),
        entry("Enter", "Submit / Update"),
        Line::from(""),
        section("Records"),
        entry("↑↓/jk", "Select record"),
        entry("e/Alt+e", "Edit inline"),
        entry("d/Alt+d", "Delete"),
        entry("Enter", "Save (while editing)"),
        entry("Esc", "Cancel editing"),
        entry("Alt+↑↓", "Select while editing"),
        Line::from(""),
        Line::styled("Press Esc to close the help", Style::default().fg(colors().muted)),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染设置弹窗
fn render_settings(app: &App, frame: &mut Frame, selected: usize) {
    let area = centered_rect(50, 9, frame.area());
    let inner = render_frame(frame, area, "Settings", colors().accent);

    let mut lines = vec![Line::from("")];
    for (i, item) in SettingItem::all().iter().enumerate() {
        let value = match item {
            SettingItem::Theme => app.config.theme.label(),
            SettingItem::SubmitPolicy => app.config.submit_policy.label(),
        };
        lines.push(render_setting_row(item.label(), value, i == selected));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  ↑↓", Style::default().fg(Color::Yellow)),
        Span::styled(" Select | ", Style::default().fg(colors().muted)),
        Span::styled("←→", Style::default().fg(Color::Yellow)),
        Span::styled(" Change | ", Style::default().fg(colors().muted)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" Close", Style::default().fg(colors().muted)),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染单行设置项
fn render_setting_row(label: &'static str, value: &'static str, is_selected: bool) -> Line<'static> {
    let c = colors();
    let prefix = if is_selected { "▶ " } else { "  " };

    let label_style = if is_selected {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };

    let value_style = if is_selected {
        Style::default()
            .fg(c.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.accent)
    };

    // 值居中显示在 ◀ ▶ 之间
    let left_padding = VALUE_WIDTH.saturating_sub(value.width()) / 2;
    let value_display = pad_to_width(
        &format!("{:left_padding$}{value}", ""),
        VALUE_WIDTH,
    );

    let (open, close) = if is_selected { ("◀ ", " ▶") } else { ("  ", "  ") };

    Line::from(vec![
        Span::styled(prefix, label_style),
        Span::styled(pad_to_width(label, LABEL_WIDTH), label_style),
        Span::styled(": ", Style::default().fg(c.muted)),
        Span::styled(open, Style::default().fg(Color::Yellow)),
        Span::styled(value_display, value_style),
        Span::styled(close, Style::default().fg(Color::Yellow)),
    ])
}
