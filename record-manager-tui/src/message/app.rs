//! 应用主消息枚举

use super::{FormMessage, ModalMessage, RecordsMessage};

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板（表单 ↔ 记录列表）
    ToggleFocus,

    /// 表单面板相关消息
    Form(FormMessage),

    /// 记录列表相关消息
    Records(RecordsMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 显示帮助
    ShowHelp,

    /// 显示设置
    ShowSettings,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
