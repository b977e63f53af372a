//! 表单面板组件

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use record_manager_core::{Field, FormMode, Gender, ValidationError};

use crate::model::{App, FormFocus};
use crate::util::text::{fit_width, tail_width};
use crate::view::theme::Styles;

/// 输入框左侧缩进
const INDENT: &str = "   ";

/// 渲染表单面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 弹窗打开时不显示光标
    let has_focus = app.focus.is_form() && !app.modal.is_open();
    let focus = app.form_state.focus;
    let width = usize::from(area.width).saturating_sub(INDENT.len() + 1);

    let mut lines = vec![Line::styled(" To-do List", Styles::title())];
    if let FormMode::Editing(index) = app.form.mode() {
        lines.push(Line::styled(
            format!(" Updating record {}", index + 1),
            Styles::label(),
        ));
    } else {
        lines.push(Line::from(""));
    }

    for &field in Field::all() {
        let is_focused = has_focus && focus.as_field() == Some(field);
        push_input(
            &mut lines,
            field.label(),
            app.form.draft().get(field),
            app.form.errors().get(field),
            is_focused,
            width,
        );
    }

    push_gender(
        &mut lines,
        app.form.draft().gender,
        has_focus && focus == FormFocus::Gender,
    );

    lines.push(Line::from(""));
    let button_style = if has_focus && focus == FormFocus::Submit {
        Styles::selected()
    } else {
        Styles::input()
    };
    lines.push(Line::from(vec![
        Span::raw(INDENT),
        Span::styled(format!("[ {} ]", app.form.submit_label()), button_style),
    ]));

    frame.render_widget(Paragraph::new(lines), area);
}

/// 标签、输入值和行内错误
fn push_input(
    lines: &mut Vec<Line<'static>>,
    label: &'static str,
    value: &str,
    error: Option<ValidationError>,
    is_focused: bool,
    width: usize,
) {
    let label_style = if is_focused {
        Styles::input_focused()
    } else {
        Styles::label()
    };
    lines.push(Line::styled(format!(" {label}"), label_style));

    // 光标在末尾，聚焦时保留尾部
    let display = if is_focused {
        format!("{INDENT}{}▎", tail_width(value, width.saturating_sub(1)))
    } else {
        format!("{INDENT}{}", fit_width(value, width))
    };
    let value_style = if is_focused {
        Styles::input_focused()
    } else {
        Styles::input()
    };
    lines.push(Line::styled(display, value_style));

    match error {
        Some(err) => lines.push(Line::styled(
            format!("{INDENT}{}", fit_width(&err.to_string(), width)),
            Styles::error(),
        )),
        None => lines.push(Line::from("")),
    }
}

/// 两个选项的单选框
fn push_gender(lines: &mut Vec<Line<'static>>, current: Gender, is_focused: bool) {
    let label_style = if is_focused {
        Styles::input_focused()
    } else {
        Styles::label()
    };
    lines.push(Line::styled(" Gender", label_style));

    let mut spans = vec![Span::raw(INDENT)];
    for &gender in Gender::all() {
        let mark = if gender == current { "(•)" } else { "( )" };
        let style = if is_focused && gender == current {
            Styles::input_focused()
        } else {
            Styles::input()
        };
        spans.push(Span::styled(format!("{mark} {}", gender.label()), style));
        spans.push(Span::raw("  "));
    }
    lines.push(Line::from(spans));
}
