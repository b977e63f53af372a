//! 弹窗更新逻辑

use crate::message::ModalMessage;
use crate::model::{App, Modal, SettingItem};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    // 提示和帮助弹窗只响应关闭
    if !matches!(app.modal.active, Some(Modal::Settings { .. })) {
        if msg == ModalMessage::Close {
            app.modal.close();
        }
        return;
    }
    let Some(Modal::Settings { selected }) = app.modal.active.as_mut() else {
        return;
    };

    let count = SettingItem::all().len();
    match msg {
        ModalMessage::Close => app.modal.close(),
        ModalMessage::SelectPrevious => {
            *selected = selected.checked_sub(1).unwrap_or(count - 1);
        }
        ModalMessage::SelectNext => {
            *selected = (*selected + 1) % count;
        }
        ModalMessage::TogglePrev => {
            if let Some(item) = SettingItem::from_index(*selected) {
                change_setting(app, item, false);
            }
        }
        ModalMessage::ToggleNext => {
            if let Some(item) = SettingItem::from_index(*selected) {
                change_setting(app, item, true);
            }
        }
    }
}

/// 切换设置项的取值，立即生效并保存
fn change_setting(app: &mut App, item: SettingItem, forward: bool) {
    match item {
        SettingItem::Theme => {
            let theme = app.config.theme;
            app.config.theme = if forward { theme.next() } else { theme.prev() };
        }
        SettingItem::SubmitPolicy => {
            let policy = app.config.submit_policy;
            app.config.submit_policy = if forward { policy.next() } else { policy.prev() };
        }
    }
    log::info!("Setting changed: {:?}", app.config);
    app.apply_config();
}
