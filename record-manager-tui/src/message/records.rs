//! 记录列表消息
//!
//! 列表导航、编辑、删除，以及行内编辑器中的输入

/// 记录列表消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordsMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,

    // ========== 操作 ==========
    /// 编辑当前选中项（进入行内编辑）
    Edit,
    /// 删除当前选中项
    Delete,

    // ========== 行内编辑器 ==========
    /// 下一个输入框
    NextField,
    /// 上一个输入框
    PrevField,
    /// 输入字符
    Input(char),
    /// 粘贴文本
    Paste(String),
    /// 删除字符（Backspace）
    Backspace,
    /// 保存行内修改
    Save,
    /// 放弃行内修改
    CancelEdit,
}
