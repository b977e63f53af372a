//! 面板与弹窗状态模块

mod form;
mod modal;
mod records;

pub use form::{FormFocus, FormState};
pub use modal::{Modal, ModalState, SettingItem};
pub use records::{RecordsState, RowFocus};
