//! 弹窗/对话框状态

/// 设置项枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingItem {
    Theme,
    SubmitPolicy,
}

impl SettingItem {
    /// 获取所有设置项
    pub fn all() -> &'static [SettingItem] {
        &[SettingItem::Theme, SettingItem::SubmitPolicy]
    }

    /// 从索引获取设置项
    pub fn from_index(index: usize) -> Option<SettingItem> {
        Self::all().get(index).copied()
    }

    /// 显示名称
    pub fn label(self) -> &'static str {
        match self {
            SettingItem::Theme => "Theme",
            SettingItem::SubmitPolicy => "Invalid submit",
        }
    }
}

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 阻塞式提示，关闭前不响应其他按键
    Alert { title: String, message: String },

    /// 帮助
    Help,

    /// 设置
    Settings {
        /// 当前选中的设置项索引
        selected: usize,
    },
}

/// 弹窗状态容器
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否有弹窗打开
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 显示提示弹窗
    pub fn show_alert(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.active = Some(Modal::Alert {
            title: title.into(),
            message: message.into(),
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    /// 显示设置弹窗
    pub fn show_settings(&mut self) {
        self.active = Some(Modal::Settings { selected: 0 });
    }
}
