//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage, ModalMessage, RecordsMessage};
use crate::model::{App, FocusPanel, FormFocus, Modal};

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
        Event::Paste(text) => handle_paste(text, app),             // 粘贴
        _ => AppMessage::Noop,                                     // 窗口大小改变等，自动重绘
    }
}

/// 是否是可以输入到文本框的字符（允许 Shift 输入大写和符号）
fn is_text_input(key: &KeyEvent) -> bool {
    key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::SETTINGS.matches(&key) {
        return AppMessage::ShowSettings;
    }

    // Tab / Shift+Tab: 切换焦点面板
    if DefaultKeymap::SWITCH_PANEL.matches(&key) || key.code == KeyCode::BackTab {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    match app.focus {
        FocusPanel::Form => handle_form_keys(key, app.form_state.focus),
        FocusPanel::Records => {
            if app.form.row_editor().is_some() {
                handle_row_editor_keys(key)
            } else {
                handle_record_list_keys(key)
            }
        }
    }
}

/// 处理表单面板的按键
fn handle_form_keys(key: KeyEvent, focus: FormFocus) -> AppMessage {
    // Enter 在任何控件上都提交表单
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Form(FormMessage::Submit);
    }

    match key.code {
        // ↑: 上一个控件
        KeyCode::Up => AppMessage::Form(FormMessage::PrevField),

        // ↓: 下一个控件
        KeyCode::Down => AppMessage::Form(FormMessage::NextField),

        // ← → 空格: 切换性别（仅当焦点在性别单选时）
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') if focus == FormFocus::Gender => {
            AppMessage::Form(FormMessage::ToggleGender)
        }

        // Backspace: 删除字符
        KeyCode::Backspace => AppMessage::Form(FormMessage::Backspace),

        // 字符输入（仅当焦点在文本输入框时）
        KeyCode::Char(ch) if is_text_input(&key) && focus.as_field().is_some() => {
            AppMessage::Form(FormMessage::Input(ch))
        }

        _ => AppMessage::Noop,
    }
}

/// 处理记录列表的按键（未在行内编辑）
fn handle_record_list_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Records(RecordsMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Records(RecordsMessage::Delete);
    }

    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Records(RecordsMessage::SelectPrevious),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Records(RecordsMessage::SelectNext),
        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Records(RecordsMessage::SelectFirst),
        // End: 跳到最后一项
        KeyCode::End => AppMessage::Records(RecordsMessage::SelectLast),
        // Enter 或 e: 编辑
        KeyCode::Enter | KeyCode::Char('e') => AppMessage::Records(RecordsMessage::Edit),
        // Delete 或 d: 删除
        KeyCode::Delete | KeyCode::Char('d') => AppMessage::Records(RecordsMessage::Delete),
        // ?: 帮助
        KeyCode::Char('?') => AppMessage::ShowHelp,
        _ => AppMessage::Noop,
    }
}

/// 处理行内编辑器的按键
fn handle_row_editor_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::CANCEL_EDIT.matches(&key) {
        return AppMessage::Records(RecordsMessage::CancelEdit);
    }

    // 编辑中仍可选择、编辑、删除其他记录
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Records(RecordsMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Records(RecordsMessage::Delete);
    }
    if DefaultKeymap::SELECT_PREVIOUS.matches(&key) {
        return AppMessage::Records(RecordsMessage::SelectPrevious);
    }
    if DefaultKeymap::SELECT_NEXT.matches(&key) {
        return AppMessage::Records(RecordsMessage::SelectNext);
    }

    match key.code {
        // ↑: 上一个输入框
        KeyCode::Up => AppMessage::Records(RecordsMessage::PrevField),
        // ↓: 下一个输入框
        KeyCode::Down => AppMessage::Records(RecordsMessage::NextField),
        // Enter: 保存
        KeyCode::Enter => AppMessage::Records(RecordsMessage::Save),
        // Backspace: 删除字符
        KeyCode::Backspace => AppMessage::Records(RecordsMessage::Backspace),
        // 字符输入
        KeyCode::Char(ch) if is_text_input(&key) => AppMessage::Records(RecordsMessage::Input(ch)),
        _ => AppMessage::Noop,
    }
}

/// 处理粘贴：按当前焦点送到表单或行内编辑器
fn handle_paste(text: String, app: &App) -> AppMessage {
    if app.modal.is_open() {
        return AppMessage::Noop;
    }

    match app.focus {
        FocusPanel::Form => AppMessage::Form(FormMessage::Paste(text)),
        FocusPanel::Records if app.form.row_editor().is_some() => {
            AppMessage::Records(RecordsMessage::Paste(text))
        }
        FocusPanel::Records => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    // 根据弹窗类型处理按键
    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::Alert { .. } | Modal::Help => {
            // 提示和帮助弹窗只响应关闭按键
            match key.code {
                KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
                _ => AppMessage::Noop,
            }
        }
        Modal::Settings { .. } => handle_settings_keys(key),
    }
}

/// 处理设置弹窗的按键
fn handle_settings_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上一个设置项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Modal(ModalMessage::SelectPrevious),
        // ↓ 或 j: 下一个设置项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Modal(ModalMessage::SelectNext),
        // ←: 切换到上一个值
        KeyCode::Left => AppMessage::Modal(ModalMessage::TogglePrev),
        // → / Enter / 空格: 切换到下一个值
        KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => {
            AppMessage::Modal(ModalMessage::ToggleNext)
        }
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_utils::{add_record, key, key_with, test_app};
    use record_manager_core::Gender;

    #[test]
    fn release_events_are_ignored() {
        let app = test_app();
        let mut release = key(KeyCode::Char('a'));
        release.kind = KeyEventKind::Release;
        assert_eq!(handle_event(Event::Key(release), &app), AppMessage::Noop);
    }

    #[test]
    fn plain_letters_type_into_form() {
        let app = test_app();
        assert_eq!(
            handle_event(Event::Key(key(KeyCode::Char('q'))), &app),
            AppMessage::Form(FormMessage::Input('q'))
        );
        assert_eq!(
            handle_event(Event::Key(key_with(KeyCode::Char('J'), KeyModifiers::SHIFT)), &app),
            AppMessage::Form(FormMessage::Input('J'))
        );
    }

    #[test]
    fn global_shortcuts() {
        let app = test_app();
        assert_eq!(
            handle_event(Event::Key(key_with(KeyCode::Char('q'), KeyModifiers::ALT)), &app),
            AppMessage::Quit
        );
        assert_eq!(
            handle_event(Event::Key(key_with(KeyCode::Char('c'), KeyModifiers::CONTROL)), &app),
            AppMessage::Quit
        );
        assert_eq!(
            handle_event(Event::Key(key(KeyCode::Tab)), &app),
            AppMessage::ToggleFocus
        );
        assert_eq!(
            handle_event(Event::Key(key_with(KeyCode::Char('s'), KeyModifiers::ALT)), &app),
            AppMessage::ShowSettings
        );
    }

    #[test]
    fn enter_submits_from_any_form_control() {
        let mut app = test_app();
        for &focus in FormFocus::all() {
            app.form_state.focus = focus;
            assert_eq!(
                handle_event(Event::Key(key(KeyCode::Enter)), &app),
                AppMessage::Form(FormMessage::Submit)
            );
        }
    }

    #[test]
    fn gender_control_toggles_instead_of_typing() {
        let mut app = test_app();
        app.form_state.focus = FormFocus::Gender;
        assert_eq!(
            handle_event(Event::Key(key(KeyCode::Right)), &app),
            AppMessage::Form(FormMessage::ToggleGender)
        );
        assert_eq!(
            handle_event(Event::Key(key(KeyCode::Char(' '))), &app),
            AppMessage::Form(FormMessage::ToggleGender)
        );
        assert_eq!(
            handle_event(Event::Key(key(KeyCode::Char('x'))), &app),
            AppMessage::Noop
        );
    }

    #[test]
    fn record_list_keys_depend_on_edit_mode() {
        let mut app = test_app();
        app.focus = FocusPanel::Records;
        app.form.set_field(record_manager_core::Field::Name, "Jane");
        app.form.set_field(record_manager_core::Field::Email, "jane@x.com");
        app.form.set_field(record_manager_core::Field::Phone, "12345678901");
        app.form.submit().unwrap();

        assert_eq!(
            handle_event(Event::Key(key(KeyCode::Char('e'))), &app),
            AppMessage::Records(RecordsMessage::Edit)
        );
        assert_eq!(
            handle_event(Event::Key(key(KeyCode::Char('d'))), &app),
            AppMessage::Records(RecordsMessage::Delete)
        );

        app.form.begin_edit(0).unwrap();
        assert_eq!(
            handle_event(Event::Key(key(KeyCode::Char('e'))), &app),
            AppMessage::Records(RecordsMessage::Input('e'))
        );
        assert_eq!(
            handle_event(Event::Key(key(KeyCode::Enter)), &app),
            AppMessage::Records(RecordsMessage::Save)
        );
        assert_eq!(
            handle_event(Event::Key(key(KeyCode::Esc)), &app),
            AppMessage::Records(RecordsMessage::CancelEdit)
        );
    }

    #[test]
    fn row_editor_keeps_record_actions_on_alt() {
        let mut app = test_app();
        app.focus = FocusPanel::Records;
        add_record(&mut app, "Ann", "ann@x.com", Gender::Female);
        add_record(&mut app, "Bob", "bob@x.com", Gender::Male);
        app.form.begin_edit(0).unwrap();

        let alt = |code| Event::Key(key_with(code, KeyModifiers::ALT));
        assert_eq!(
            handle_event(alt(KeyCode::Down), &app),
            AppMessage::Records(RecordsMessage::SelectNext)
        );
        assert_eq!(
            handle_event(alt(KeyCode::Up), &app),
            AppMessage::Records(RecordsMessage::SelectPrevious)
        );
        assert_eq!(
            handle_event(alt(KeyCode::Char('e')), &app),
            AppMessage::Records(RecordsMessage::Edit)
        );
        assert_eq!(
            handle_event(alt(KeyCode::Char('d')), &app),
            AppMessage::Records(RecordsMessage::Delete)
        );
        // 不带修饰键的仍然是输入
        assert_eq!(
            handle_event(Event::Key(key(KeyCode::Char('d'))), &app),
            AppMessage::Records(RecordsMessage::Input('d'))
        );
        assert_eq!(
            handle_event(Event::Key(key(KeyCode::Down)), &app),
            AppMessage::Records(RecordsMessage::NextField)
        );
    }

    #[test]
    fn open_modal_captures_keys() {
        let mut app = test_app();
        app.modal.show_alert("Missing Values", "Please correct the highlighted fields.");
        assert_eq!(
            handle_event(Event::Key(key(KeyCode::Char('a'))), &app),
            AppMessage::Noop
        );
        assert_eq!(
            handle_event(Event::Key(key(KeyCode::Enter)), &app),
            AppMessage::Modal(ModalMessage::Close)
        );
        assert_eq!(
            handle_event(Event::Paste("text".to_string()), &app),
            AppMessage::Noop
        );
    }

    #[test]
    fn paste_goes_to_focused_input() {
        let app = test_app();
        assert_eq!(
            handle_event(Event::Paste("jane@x.com".to_string()), &app),
            AppMessage::Form(FormMessage::Paste("jane@x.com".to_string()))
        );
    }
}
