//! 记录列表组件

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use record_manager_core::{Field, Gender, Record, RowEditBuffer};
use unicode_width::UnicodeWidthStr;

use crate::model::{App, RowFocus};
use crate::util::text::{fit_width, pad_to_width, tail_width};
use crate::view::theme::Styles;

/// 行内编辑器标签宽度
const LABEL_WIDTH: usize = 14;

/// 渲染记录列表
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let records = app.form.records();
    let mut lines = vec![
        Line::styled(" Submitted Records:", Styles::title()),
        Line::from(""),
    ];

    if records.is_empty() {
        lines.push(Line::styled("   No records yet", Styles::label()));
        frame.render_widget(Paragraph::new(lines), area);
        return;
    }

    let has_focus = app.focus.is_records() && !app.modal.is_open();
    let width = usize::from(area.width);
    let mut selected_span = (0, 0);

    for (index, record) in records.iter().enumerate() {
        let is_selected = index == app.records.selected;
        let top = lines.len();

        let editing = app.form.store().edit_cursor() == Some(index);
        match app.form.row_editor() {
            Some(buffer) if editing => push_editor(
                &mut lines,
                buffer,
                app.form.draft().gender,
                has_focus.then_some(app.records.editor_focus),
                width,
            ),
            _ => push_record(&mut lines, index, record, has_focus && is_selected, width),
        }
        lines.push(Line::from(""));

        if is_selected {
            selected_span = (top, lines.len());
        }
    }

    // 滚动到选中记录可见
    let (top, bottom) = selected_span;
    let scroll = bottom.saturating_sub(usize::from(area.height)).min(top);
    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);
}

/// 只读视图
fn push_record(
    lines: &mut Vec<Line<'static>>,
    index: usize,
    record: &Record,
    is_selected: bool,
    width: usize,
) {
    let heading = format!(" Record {}:", index + 1);
    let heading_style = if is_selected {
        Styles::selected()
    } else {
        Styles::title()
    };
    let affordance_style = Styles::action(is_selected);
    lines.push(Line::from(vec![
        Span::styled(heading, heading_style),
        Span::raw("  "),
        Span::styled("✎ edit", affordance_style),
        Span::raw("  "),
        Span::styled("✗ delete", affordance_style),
    ]));

    let rows = [
        (Field::Name.label(), record.name.as_str()),
        (Field::Email.label(), record.email.as_str()),
        (Field::Phone.label(), record.phone.as_str()),
        ("Gender", record.gender.label()),
    ];
    for (label, value) in rows {
        let prefix = format!("   {label}: ");
        let value = fit_width(value, width.saturating_sub(prefix.width()));
        lines.push(Line::from(vec![
            Span::styled(prefix, Styles::label()),
            Span::styled(value, Styles::input()),
        ]));
    }
}

/// 行内编辑器
///
/// `focus` 为 `None` 表示面板没有焦点，不显示光标。
fn push_editor(
    lines: &mut Vec<Line<'static>>,
    buffer: &RowEditBuffer,
    gender: Gender,
    focus: Option<RowFocus>,
    width: usize,
) {
    lines.push(Line::from(vec![
        Span::styled(format!(" Record {}:", buffer.index() + 1), Styles::selected()),
        Span::styled("  editing", Styles::label()),
    ]));

    let input_width = width.saturating_sub(LABEL_WIDTH + 6);
    for &field in Field::all() {
        let is_focused = focus.and_then(RowFocus::as_field) == Some(field);
        let value = buffer.get(field);
        let (display, style) = if is_focused {
            (
                format!("{}▎", tail_width(value, input_width.saturating_sub(1))),
                Styles::input_focused(),
            )
        } else {
            (fit_width(value, input_width), Styles::input())
        };
        lines.push(Line::from(vec![
            Span::styled(
                pad_to_width(&format!("   {}", field.label()), LABEL_WIDTH),
                Styles::label(),
            ),
            Span::styled("[", Styles::label()),
            Span::styled(pad_to_width(&display, input_width), style),
            Span::styled("]", Styles::label()),
        ]));
    }

    // 性别取表单当前的选择
    lines.push(Line::from(vec![
        Span::styled(pad_to_width("   Gender", LABEL_WIDTH), Styles::label()),
        Span::styled(gender.label(), Styles::input()),
    ]));

    let save_style = if focus == Some(RowFocus::Save) {
        Styles::selected()
    } else {
        Styles::input()
    };
    lines.push(Line::from(vec![
        Span::raw("   "),
        Span::styled("[ Save ]", save_style),
    ]));
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::FocusPanel;
    use crate::test_utils::{add_record, draw_to_string, test_app};

    fn draw(app: &App) -> String {
        draw_to_string(84, 30, |frame| render(app, frame, frame.area()))
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let app = test_app();
        let screen = draw(&app);
        assert!(screen.contains("Submitted Records:"));
        assert!(screen.contains("No records yet"));
    }

    #[test]
    fn read_view_lists_every_field_with_affordances() {
        let mut app = test_app();
        add_record(&mut app, "Ann", "ann@x.com", Gender::Female);
        let screen = draw(&app);

        assert!(screen.contains("Record 1:"));
        assert!(screen.contains("✎ edit"));
        assert!(screen.contains("✗ delete"));
        assert!(screen.contains("Name: Ann"));
        assert!(screen.contains("Email: ann@x.com"));
        assert!(screen.contains("Phone Number: 12345678901"));
        assert!(screen.contains("Gender: Female"));
    }

    #[test]
    fn edited_row_shows_inline_editor_with_draft_gender() {
        let mut app = test_app();
        app.focus = FocusPanel::Records;
        add_record(&mut app, "Ann", "ann@x.com", Gender::Male);
        add_record(&mut app, "Bob", "bob@x.com", Gender::Male);
        app.records.selected = 1;
        app.form.begin_edit(1).unwrap();
        app.form.set_gender(Gender::Female);

        let screen = draw(&app);

        // 其他记录仍是只读视图
        assert!(screen.contains("Name: Ann"));
        assert!(screen.contains("Gender: Male"));

        // 编辑中的记录是行内编辑器
        assert!(screen.contains("Record 2:"));
        assert!(!screen.contains("Name: Bob"));
        assert!(screen.contains("[Bob▎"));
        assert!(screen.contains("[ Save ]"));
        let gender_line = format!("{}Female", pad_to_width("   Gender", LABEL_WIDTH));
        assert!(screen.contains(&gender_line));
    }
}
