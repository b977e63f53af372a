//! 记录列表更新逻辑

use super::{report_error, sanitize_paste};
use crate::message::RecordsMessage;
use crate::model::{App, RowFocus};

/// 处理记录列表消息
pub fn update(app: &mut App, msg: RecordsMessage) {
    let len = app.form.records().len();

    match msg {
        // ========== 选择 ==========
        RecordsMessage::SelectPrevious => app.records.select_previous(),
        RecordsMessage::SelectNext => app.records.select_next(len),
        RecordsMessage::SelectFirst => app.records.select_first(),
        RecordsMessage::SelectLast => app.records.select_last(len),

        // ========== 编辑 / 删除 ==========
        RecordsMessage::Edit => {
            if len == 0 {
                return;
            }
            let index = app.records.selected;
            match app.form.begin_edit(index) {
                Ok(()) => {
                    app.records.editor_focus = RowFocus::Name;
                    app.set_status(format!("Editing record {}", index + 1));
                }
                Err(e) => report_error(app, &e),
            }
        }

        RecordsMessage::Delete => {
            if len == 0 {
                return;
            }
            let index = app.records.selected;
            match app.form.delete(index) {
                Ok(removed) => {
                    log::info!("Deleted record for {}", removed.name);
                    app.records.clamp(app.form.records().len());
                    app.set_status(format!("Record {} deleted", index + 1));
                }
                Err(e) => report_error(app, &e),
            }
        }

        // ========== 行内编辑器 ==========
        RecordsMessage::NextField => {
            app.records.editor_focus = app.records.editor_focus.next();
        }

        RecordsMessage::PrevField => {
            app.records.editor_focus = app.records.editor_focus.prev();
        }

        RecordsMessage::Input(ch) => {
            edit_focused(app, |value| value.push(ch));
        }

        RecordsMessage::Paste(text) => {
            let text = sanitize_paste(&text);
            edit_focused(app, |value| value.push_str(&text));
        }

        RecordsMessage::Backspace => {
            edit_focused(app, |value| {
                value.pop();
            });
        }

        RecordsMessage::Save => match app.form.save_row() {
            Ok(index) => {
                app.records.selected = index;
                app.set_status(format!("Record {} saved", index + 1));
            }
            Err(e) => report_error(app, &e),
        },

        RecordsMessage::CancelEdit => {
            if app.form.row_editor().is_some() {
                app.form.cancel_edit();
                app.set_status("Edit cancelled");
            }
        }
    }
}

/// 修改行内编辑器中获得焦点的输入框
fn edit_focused(app: &mut App, edit: impl FnOnce(&mut String)) {
    let Some(field) = app.records.editor_focus.as_field() else {
        return;
    };
    match app.form.row_editor_mut() {
        Ok(buffer) => edit(buffer.get_mut(field)),
        Err(e) => report_error(app, &e),
    }
}
