//! 测试辅助

#![allow(clippy::unwrap_used)]

use std::sync::Mutex;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Frame, Terminal};
use record_manager_core::{Field, Gender};

use crate::backend::{AppConfig, ConfigService};
use crate::model::App;

/// 内存配置服务，记录最后一次保存的配置
#[derive(Default)]
pub struct MemoryConfigService {
    pub saved: Mutex<Option<AppConfig>>,
    initial: AppConfig,
}

impl MemoryConfigService {
    pub fn with_config(initial: AppConfig) -> Self {
        Self {
            saved: Mutex::new(None),
            initial,
        }
    }
}

impl ConfigService for MemoryConfigService {
    fn load(&self) -> Result<AppConfig> {
        Ok(self.initial)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        *self.saved.lock().unwrap() = Some(*config);
        Ok(())
    }
}

/// 使用默认配置的 App
pub fn test_app() -> App {
    App::new(Box::new(MemoryConfigService::default()))
}

/// 无修饰键的按键事件
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// 带修饰键的按键事件
pub fn key_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

/// 直接通过核心状态添加一条有效记录
pub fn add_record(app: &mut App, name: &str, email: &str, gender: Gender) {
    app.form.set_field(Field::Name, name);
    app.form.set_field(Field::Email, email);
    app.form.set_field(Field::Phone, "12345678901");
    app.form.set_gender(gender);
    app.form.submit().unwrap();
}

/// 在 TestBackend 上绘制一帧，按行返回屏幕文本
pub fn draw_to_string(width: u16, height: u16, draw: impl FnOnce(&mut Frame)) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(draw).unwrap();

    let buffer = terminal.backend().buffer();
    let mut screen = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            screen.push_str(buffer[(x, y)].symbol());
        }
        screen.push('\n');
    }
    screen
}
