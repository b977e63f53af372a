//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod form;           // 表单子消息处理（输入、提交）
//!         mod records;        // 记录列表子消息处理（选择、编辑、删除、行内保存）
//!         mod modal;          // 弹窗子消息处理（提示、帮助、设置）
//!
//!         pub fn update(app: &mut App, msg: AppMessage) {...}
//!
//!     使用 match 进行穷举，其中每个 Message 变体都对应一个状态变更。
//!     复杂的子消息委托给子模块处理，子模块再调用 RecordForm 的方法。
//!
//!     RecordForm 返回的 CoreError 不会让程序退出：
//!     report_error() 记录日志并显示在状态栏。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod form;
mod modal;
mod records;

use record_manager_core::CoreError;

use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
                app.clear_status(); // 切换面板时清除状态消息
            }
        }

        AppMessage::Form(form_msg) => {
            form::update(app, form_msg);
        }

        AppMessage::Records(records_msg) => {
            records::update(app, records_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ShowSettings => {
            app.modal.show_settings();
        }

        AppMessage::Noop => {}
    }
}

/// 记录核心层错误并显示在状态栏
fn report_error(app: &mut App, err: &CoreError) {
    if err.is_expected() {
        log::warn!("{err}");
    } else {
        log::error!("{err}");
    }
    app.set_status(err.to_string());
}

/// 去掉粘贴内容中的换行等控制字符
fn sanitize_paste(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FocusPanel;
    use crate::test_utils::test_app;

    #[test]
    fn quit_sets_flag() {
        let mut app = test_app();
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn toggle_focus_blocked_by_modal() {
        let mut app = test_app();
        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.focus, FocusPanel::Records);

        app.modal.show_help();
        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.focus, FocusPanel::Records);
    }

    #[test]
    fn paste_drops_control_characters() {
        assert_eq!(sanitize_paste("jane@x.com\r\n"), "jane@x.com");
        assert_eq!(sanitize_paste("Jane\tDoe"), "JaneDoe");
    }
}
