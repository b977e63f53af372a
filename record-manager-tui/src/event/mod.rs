//!
//! src/event/mod.rs
//! Event 层：输入事件处理
//!
//! 从 crossterm 读取原始终端事件，并根据当前状态翻译成 AppMessage。
//! Event 层只读取 App，不修改 App。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件轮询与分发
//!         mod keymap;         // 快捷键定义
//!
//!
//!     分发顺序（handler.rs::handle_key_event）：
//!         1. 只处理 Press 事件
//!         2. 有弹窗时，按键全部交给弹窗
//!         3. 全局快捷键：Ctrl+C / Alt+q 退出，Alt+h 帮助，Alt+s 设置，Tab 切换面板
//!         4. 按焦点面板分发：
//!             表单面板
//!                 ↑/↓         → FormMessage::PrevField / NextField
//!                 字符输入     → FormMessage::Input(c)
//!                 Backspace   → FormMessage::Backspace
//!                 ←/→/空格     → FormMessage::ToggleGender（焦点在性别时）
//!                 Enter       → FormMessage::Submit
//!             记录列表（未编辑）
//!                 ↑/↓/j/k     → RecordsMessage::SelectPrevious / SelectNext
//!                 e / Enter   → RecordsMessage::Edit
//!                 d / Delete  → RecordsMessage::Delete
//!             记录列表（行内编辑中）
//!                 ↑/↓         → RecordsMessage::PrevField / NextField
//!                 Enter       → RecordsMessage::Save
//!                 Esc         → RecordsMessage::CancelEdit
//!                 Alt+↑/↓     → RecordsMessage::SelectPrevious / SelectNext
//!                 Alt+e/Alt+d → RecordsMessage::Edit / Delete（作用于选中的记录）
//!
//!     粘贴（Event::Paste）按焦点变成 FormMessage::Paste / RecordsMessage::Paste。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
