//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FocusPanel, FormFocus, Modal};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前焦点和编辑状态生成快捷键提示
    let hints = get_hints(app);

    // 构建状态栏内容
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let content = Line::from(spans);
    let paragraph = Paragraph::new(content).style(Styles::bar());

    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    // 弹窗打开时只提示弹窗按键
    if let Some(ref modal) = app.modal.active {
        if let Modal::Settings { .. } = modal {
            hints.push(("↑↓", "Select"));
            hints.push(("←→", "Change"));
        }
        hints.push(("Esc", "Close"));
        return hints;
    }

    hints.push(("Tab", "Switch Panel"));

    match app.focus {
        FocusPanel::Form => {
            hints.push(("↑↓", "Field"));
            if app.form_state.focus == FormFocus::Gender {
                hints.push(("←→", "Gender"));
            }
            hints.push(("Enter", app.form.submit_label()));
        }
        FocusPanel::Records => {
            if app.form.row_editor().is_some() {
                hints.push(("↑↓", "Field"));
                hints.push(("Enter", "Save"));
                hints.push(("Esc", "Cancel"));
                hints.push(("Alt+↑↓", "Select"));
                hints.push(("Alt+e/d", "Edit/Delete"));
            } else {
                hints.push(("↑↓", "Select"));
                hints.push(("e", "Edit"));
                hints.push(("d", "Delete"));
            }
        }
    }

    hints.push(("Alt+s", "Settings"));
    hints.push(("Alt+h", "Help"));
    hints.push(("Alt+q", "Quit"));

    hints
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_utils::{add_record, test_app};
    use record_manager_core::Gender;

    #[test]
    fn form_hint_follows_submit_label() {
        let mut app = test_app();
        assert!(get_hints(&app).contains(&("Enter", "Submit")));

        add_record(&mut app, "Ann", "ann@x.com", Gender::Female);
        app.form.begin_edit(0).unwrap();
        assert!(get_hints(&app).contains(&("Enter", "Update")));
    }

    #[test]
    fn records_hints_switch_in_edit_mode() {
        let mut app = test_app();
        app.focus = FocusPanel::Records;
        add_record(&mut app, "Ann", "ann@x.com", Gender::Female);
        assert!(get_hints(&app).contains(&("e", "Edit")));

        app.form.begin_edit(0).unwrap();
        assert!(get_hints(&app).contains(&("Esc", "Cancel")));
    }

    #[test]
    fn modal_hides_panel_hints() {
        let mut app = test_app();
        app.modal.show_alert("Alert", "Missing Values");
        assert_eq!(get_hints(&app), vec![("Esc", "Close")]);
    }
}
