//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,

    /// 上一个选项（设置项）
    SelectPrevious,

    /// 下一个选项（设置项）
    SelectNext,

    /// 当前设置项切换到上一个值
    TogglePrev,

    /// 当前设置项切换到下一个值
    ToggleNext,
}
