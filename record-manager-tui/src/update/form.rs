//! 表单更新逻辑

use record_manager_core::SubmitOutcome;

use super::{report_error, sanitize_paste};
use crate::message::FormMessage;
use crate::model::{App, FormFocus};

/// 处理表单消息
pub fn update(app: &mut App, msg: FormMessage) {
    let focus = app.form_state.focus;

    match msg {
        FormMessage::NextField => {
            app.form_state.focus = focus.next();
        }

        FormMessage::PrevField => {
            app.form_state.focus = focus.prev();
        }

        FormMessage::Input(ch) => {
            // 每次输入都会重新校验该字段
            if let Some(field) = focus.as_field() {
                app.form.push_char(field, ch);
            }
        }

        FormMessage::Paste(text) => {
            if let Some(field) = focus.as_field() {
                let value = format!("{}{}", app.form.draft().get(field), sanitize_paste(&text));
                app.form.set_field(field, value);
            }
        }

        FormMessage::Backspace => {
            if let Some(field) = focus.as_field() {
                app.form.pop_char(field);
            }
        }

        FormMessage::ToggleGender => {
            app.form.toggle_gender();
        }

        FormMessage::Submit => submit(app),
    }
}

/// 提交表单
fn submit(app: &mut App) {
    let report = match app.form.submit() {
        Ok(report) => report,
        Err(e) => {
            report_error(app, &e);
            return;
        }
    };

    match report.outcome {
        SubmitOutcome::Created(index) => {
            app.records.selected = index;
            app.form_state.focus = FormFocus::Name;
            app.set_status(format!("Record {} added", index + 1));
        }
        SubmitOutcome::Updated(index) => {
            app.records.selected = index;
            app.set_status(format!("Record {} updated", index + 1));
        }
        SubmitOutcome::Rejected => {
            app.set_status("Record not saved");
        }
    }

    // 校验失败时弹出阻塞式提示
    if report.missing_values {
        app.modal.show_alert("Alert", "Missing Values");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::backend::AppConfig;
    use crate::model::Modal;
    use crate::test_utils::{test_app, MemoryConfigService};
    use record_manager_core::{Field, FormMode, Gender, SubmitPolicy, ValidationError};

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            update(app, FormMessage::Input(ch));
        }
    }

    fn fill_form(app: &mut App, name: &str, email: &str, phone: &str) {
        app.form_state.focus = FormFocus::Name;
        type_text(app, name);
        update(app, FormMessage::NextField);
        type_text(app, email);
        update(app, FormMessage::NextField);
        type_text(app, phone);
    }

    #[test]
    fn typing_fills_focused_field_and_validates() {
        let mut app = test_app();
        type_text(&mut app, "Jane1");

        assert_eq!(app.form.draft().name, "Jane1");
        assert_eq!(app.form.errors().name, Some(ValidationError::NameFormat));

        update(&mut app, FormMessage::Backspace);
        assert_eq!(app.form.draft().name, "Jane");
        assert_eq!(app.form.errors().name, None);
    }

    #[test]
    fn typing_on_gender_or_button_is_ignored() {
        let mut app = test_app();
        app.form_state.focus = FormFocus::Submit;
        update(&mut app, FormMessage::Input('x'));
        update(&mut app, FormMessage::Backspace);
        assert_eq!(app.form.draft(), &record_manager_core::DraftFields::default());
    }

    #[test]
    fn paste_appends_to_focused_field() {
        let mut app = test_app();
        app.form_state.focus = FormFocus::Email;
        update(&mut app, FormMessage::Paste("jane@x.com\n".to_string()));

        assert_eq!(app.form.draft().email, "jane@x.com");
        assert_eq!(app.form.errors().email, None);
    }

    #[test]
    fn valid_submit_adds_record_without_alert() {
        let mut app = test_app();
        fill_form(&mut app, "Jane Doe", "Jane@X.com", "12345678901");
        app.form_state.focus = FormFocus::Gender;
        update(&mut app, FormMessage::ToggleGender);

        update(&mut app, FormMessage::Submit);

        assert!(!app.modal.is_open());
        assert_eq!(app.form.records().len(), 1);
        assert_eq!(app.form.records()[0].email, "jane@x.com");
        assert_eq!(app.form.records()[0].gender, Gender::Female);
        assert_eq!(app.form.draft().gender, Gender::Male);
        assert_eq!(app.form_state.focus, FormFocus::Name);
        assert_eq!(app.status_message.as_deref(), Some("Record 1 added"));
    }

    #[test]
    fn invalid_submit_alerts_and_still_adds_by_default() {
        let mut app = test_app();
        fill_form(&mut app, "Jane Doe", "jane@x.com", "123");

        update(&mut app, FormMessage::Submit);

        assert!(matches!(app.modal.active, Some(Modal::Alert { ref message, .. }) if message == "Missing Values"));
        assert_eq!(app.form.records().len(), 1);
    }

    #[test]
    fn invalid_submit_is_rejected_under_blocking_policy() {
        let config = AppConfig {
            submit_policy: SubmitPolicy::BlockOnErrors,
            ..AppConfig::default()
        };
        let mut app = App::new(Box::new(MemoryConfigService::with_config(config)));
        fill_form(&mut app, "Jane Doe", "jane@x.com", "123");

        update(&mut app, FormMessage::Submit);

        assert!(app.modal.is_open());
        assert!(app.form.records().is_empty());
        assert_eq!(app.form.draft().phone, "123");
        assert_eq!(app.status_message.as_deref(), Some("Record not saved"));
    }

    #[test]
    fn submit_while_editing_updates_record() {
        let mut app = test_app();
        fill_form(&mut app, "Jane Doe", "jane@x.com", "12345678901");
        update(&mut app, FormMessage::Submit);
        fill_form(&mut app, "John Roe", "john@x.com", "12345678901");
        update(&mut app, FormMessage::Submit);

        app.form.begin_edit(0).unwrap();
        fill_form(&mut app, "Ann Lee", "Ann@X.com", "10987654321");
        update(&mut app, FormMessage::Submit);

        assert_eq!(app.form.mode(), FormMode::Creating);
        assert_eq!(app.form.records().len(), 2);
        assert_eq!(app.form.records()[0].name, "Ann Lee");
        assert_eq!(app.form.records()[0].email, "Ann@X.com");
        // 更新不会清空草稿
        assert_eq!(app.form.draft().get(Field::Name), "Ann Lee");
        assert_eq!(app.status_message.as_deref(), Some("Record 1 updated"));
    }
}
