//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁
//! 所有的用户操作和状态变更都通过 Message 来表达。
//! 相当于将形形色色的 Events 翻译成 Update 能够看懂的 Messages
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息 AppMessage
//!         mod form;           // 表单面板子消息
//!         mod records;        // 记录列表子消息
//!         mod modal;          // 弹窗子消息
//!
//!
//!     在 app::AppMessage 中进行主消息的枚举：
//!
//!         pub enum AppMessage {
//!             Quit,                           // 退出应用
//!             ToggleFocus,                    // 切换焦点面板
//!             Form(FormMessage),              // 表单子消息
//!             Records(RecordsMessage),        // 记录列表子消息
//!             Modal(ModalMessage),            // 弹窗子消息
//!             ShowHelp,                       // 显示帮助
//!             ShowSettings,                   // 显示设置
//!             Noop,                           // 无操作，用于代替 Option::None
//!         }
//!
//!
//! 最后，Event 将从 Message 处获取的消息传入 Update 层进行处理。
//!     去往 src/update/mod.rs 吧
//!

mod app;
mod form;
mod modal;
mod records;

pub use app::AppMessage;
pub use form::FormMessage;
pub use modal::ModalMessage;
pub use records::RecordsMessage;
