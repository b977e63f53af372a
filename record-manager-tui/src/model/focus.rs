//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧表单面板
    #[default]
    Form,
    /// 右侧记录列表
    Records,
}

impl FocusPanel {
    /// 切换到另一个面板
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Form => FocusPanel::Records,
            FocusPanel::Records => FocusPanel::Form,
        }
    }

    /// 是否是表单面板
    pub fn is_form(self) -> bool {
        matches!(self, FocusPanel::Form)
    }

    /// 是否是记录列表面板
    pub fn is_records(self) -> bool {
        matches!(self, FocusPanel::Records)
    }
}
