//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，把状态画到终端上，从不修改状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局：标题栏 + 表单 | 记录列表 + 状态栏
//!         pub mod theme;      // 主题和颜色
//!         mod components;     // 表单面板、记录列表、状态栏、弹窗
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 屏幕布局
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     ┌─────────────────────────────────────────────────────────────────┐
//!     │ Record Manager                                        (标题栏)  │
//!     ├────────────────────────┬────────────────────────────────────────┤
//!     │ To-do List             │ Submitted Records:                     │
//!     │                        │                                        │
//!     │ Name                   │ Record 1:                    ✎ edit    │
//!     │   Jane Doe▎            │   Name: Jane Doe             ✗ delete  │
//!     │ Email                  │   Email: jane@x.com                    │
//!     │   ...                  │   ...                                  │
//!     │ Gender                 │                                        │
//!     │   (•) Male ( ) Female  │ Record 2:                              │
//!     │                        │   Name  [Bob▎     ]                    │
//!     │   [ Submit ]           │   ...               [ Save ]           │
//!     ├────────────────────────┴────────────────────────────────────────┤
//!     │ Tab Switch Panel │ Enter Submit │ ...                 (状态栏)  │
//!     └─────────────────────────────────────────────────────────────────┘
//!
//!     弹窗（提示、帮助、设置）最后渲染，覆盖在最上层。
//!
//!     每一帧都会完整重绘，记录列表每次都遍历全部记录。
//!

mod components;
mod layout;
pub mod theme;

pub use layout::render;
