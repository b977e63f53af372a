//! UI 组件

pub mod form_panel;
pub mod modal;
pub mod record_list;
pub mod statusbar;
