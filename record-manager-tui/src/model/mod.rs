//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Form / Records）
//!         pub mod state;      // 各面板与弹窗的状态
//!
//!     表单草稿、错误信息、记录列表与编辑游标都不在这里定义，
//!     而是由 record-manager-core 的 RecordForm 持有；
//!     Model 层只补充 “界面” 需要的状态：焦点在哪个输入框、选中第几条记录。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub focus: FocusPanel,              // 当前焦点
//!             pub form: RecordForm,               // 核心状态
//!             pub form_state: FormState,          // 表单面板焦点
//!             pub records: RecordsState,          // 记录列表选中项
//!             pub modal: ModalState,              // 弹窗状态
//!             pub config: AppConfig,              // 当前配置
//!             pub status_message: Option<String>, // 状态栏消息
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、两条写入路径
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     1. 表单提交：FormMessage::Submit → RecordForm::submit()
//!            不在编辑时追加记录；在编辑时用草稿整体替换被编辑的记录
//!
//!     2. 行内保存：RecordsMessage::Save → RecordForm::save_row()
//!            用行内输入框的值 + 表单当前选择的性别替换记录
//!
//!     两条路径的数据来源不同：草稿 vs 行内缓冲。
//!

mod app;
mod focus;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use state::{FormFocus, FormState, Modal, ModalState, RecordsState, RowFocus, SettingItem};
