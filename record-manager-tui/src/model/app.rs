//! 应用主状态结构

use record_manager_core::RecordForm;

use super::{FocusPanel, FormState, ModalState, RecordsState};
use crate::backend::{AppConfig, ConfigService};
use crate::view::theme;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 表单与记录的核心状态
    pub form: RecordForm,

    /// 表单面板状态（当前输入框）
    pub form_state: FormState,

    /// 记录列表状态（选中项、行内编辑焦点）
    pub records: RecordsState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 当前配置
    pub config: AppConfig,

    /// 状态栏消息
    pub status_message: Option<String>,

    config_service: Box<dyn ConfigService>,
}

impl App {
    /// 创建新的应用实例，并从配置服务加载配置
    pub fn new(config_service: Box<dyn ConfigService>) -> Self {
        let config = config_service.load().unwrap_or_else(|e| {
            log::warn!("Failed to load config, using defaults: {e:#}");
            AppConfig::default()
        });
        theme::set_theme(config.theme);

        Self {
            should_quit: false,
            focus: FocusPanel::default(),
            form: RecordForm::with_policy(config.submit_policy),
            form_state: FormState::new(),
            records: RecordsState::new(),
            modal: ModalState::new(),
            config,
            status_message: None,
            config_service,
        }
    }

    /// 应用当前配置并写回文件
    pub fn apply_config(&mut self) {
        theme::set_theme(self.config.theme);
        self.form.set_policy(self.config.submit_policy);

        if let Err(e) = self.config_service.save(&self.config) {
            log::error!("Failed to save config: {e:#}");
            self.set_status("Failed to save settings");
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
