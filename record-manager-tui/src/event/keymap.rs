//! 快捷键配置
//!
//! 定义快捷键映射。表单面板里的普通字符都是输入，
//! 所以全局操作一律带修饰键。

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const SETTINGS: KeyBinding = KeyBinding::alt(KeyCode::Char('s'));
    pub const SWITCH_PANEL: KeyBinding = KeyBinding::key(KeyCode::Tab);

    // 表单
    pub const SUBMIT: KeyBinding = KeyBinding::key(KeyCode::Enter);

    // 记录列表
    pub const ACTION_EDIT: KeyBinding = KeyBinding::alt(KeyCode::Char('e'));
    pub const ACTION_DELETE: KeyBinding = KeyBinding::alt(KeyCode::Char('d'));
    pub const CANCEL_EDIT: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 行内编辑时普通按键都是输入，选择其他记录要带 Alt
    pub const SELECT_PREVIOUS: KeyBinding = KeyBinding::alt(KeyCode::Up);
    pub const SELECT_NEXT: KeyBinding = KeyBinding::alt(KeyCode::Down);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_requires_exact_modifiers() {
        let alt_e = KeyEvent::new(KeyCode::Char('e'), KeyModifiers::ALT);
        let plain_e = KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE);

        assert!(DefaultKeymap::ACTION_EDIT.matches(&alt_e));
        assert!(!DefaultKeymap::ACTION_EDIT.matches(&plain_e));
    }
}
