//! 表单面板消息

/// 表单面板消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    /// 下一个控件
    NextField,
    /// 上一个控件
    PrevField,
    /// 输入字符
    Input(char),
    /// 粘贴文本
    Paste(String),
    /// 删除字符（Backspace）
    Backspace,
    /// 切换性别单选
    ToggleGender,
    /// 提交 / 更新
    Submit,
}
