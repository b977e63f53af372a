//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod terminal;       // 终端初始化和恢复
//!         mod logging;        // 日志写入文件
//!         pub mod text;       // 按显示宽度截断、补齐文本
//!
//!
//!     初始化终端：
//!         · enable_raw_mode()
//!             - 关闭行缓冲与回显，每个按键立即生效
//!         · EnterAlternateScreen
//!             - 切换到备用屏幕，退出后恢复原有内容
//!         · EnableBracketedPaste
//!             - 粘贴内容整体作为 Event::Paste 送达，可以直接填进输入框
//!
//!     恢复终端：
//!         无论程序是正常退出还是发生错误，都必须调用 restore_terminal()！
//!         否则终端会保持在原始模式，用户输入不会正常显示。
//!
//!     日志：
//!         ratatui 占用了 stdout，日志写到
//!         <data_local_dir>/record-manager-tui/record-manager-tui.log
//!

mod logging;
mod terminal;
pub mod text;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
