//! 主题和样式定义

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU8, Ordering};

// 默认为 0 (Dark)，相应地，1 为 Light
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// 主题枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// 显示名称
    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    /// 获取下一个主题
    #[must_use]
    pub fn next(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// 获取上一个主题
    #[must_use]
    pub fn prev(self) -> Theme {
        self.next() // 只有两个选项，prev 和 next 相同
    }

    fn index(self) -> u8 {
        match self {
            Theme::Dark => 0,
            Theme::Light => 1,
        }
    }
}

/// 设置全局主题
pub fn set_theme(theme: Theme) {
    CURRENT_THEME.store(theme.index(), Ordering::SeqCst);
}

/// 获取当前主题的颜色方案
pub fn colors() -> ThemeColors {
    match CURRENT_THEME.load(Ordering::SeqCst) {
        0 => DARK,
        _ => LIGHT,
    }
}

/// 主题颜色
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    /// 聚焦边框、标题栏、当前输入框
    pub accent: Color,
    /// 选中记录、聚焦按钮
    pub selection_bg: Color,
    pub selection_fg: Color,
    /// 行内校验错误、提示弹窗边框
    pub invalid: Color,
    /// 标签、占位文字
    pub muted: Color,
    /// ✎ / ✗ 操作符号
    pub action: Color,
}

const DARK: ThemeColors = ThemeColors {
    bg: Color::Rgb(24, 26, 27),
    fg: Color::Rgb(220, 220, 214),
    border: Color::Rgb(70, 74, 76),
    accent: Color::Rgb(86, 182, 154),
    selection_bg: Color::Rgb(40, 92, 80),
    selection_fg: Color::White,
    invalid: Color::Rgb(235, 110, 100),
    muted: Color::Rgb(135, 138, 140),
    action: Color::Rgb(226, 192, 110),
};

const LIGHT: ThemeColors = ThemeColors {
    bg: Color::Rgb(248, 248, 244),
    fg: Color::Rgb(40, 44, 46),
    border: Color::Rgb(200, 202, 198),
    accent: Color::Rgb(24, 128, 104),
    selection_bg: Color::Rgb(206, 236, 226),
    selection_fg: Color::Black,
    invalid: Color::Rgb(196, 48, 48),
    muted: Color::Rgb(120, 122, 124),
    action: Color::Rgb(150, 100, 0),
};

/// 常用样式
pub struct Styles;

impl Styles {
    /// 面板边框样式
    pub fn border(focused: bool) -> Style {
        let c = colors();
        Style::default().fg(if focused { c.accent } else { c.border })
    }

    /// 选中记录 / 聚焦按钮
    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selection_bg)
            .fg(c.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(colors().fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 输入框标签
    pub fn label() -> Style {
        Style::default().fg(colors().muted)
    }

    /// 获得焦点的输入框
    pub fn input_focused() -> Style {
        Style::default()
            .fg(colors().accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn input() -> Style {
        Style::default().fg(colors().fg)
    }

    /// 行内校验错误
    pub fn error() -> Style {
        Style::default().fg(colors().invalid)
    }

    /// 记录上的 ✎ edit / ✗ delete
    pub fn action(selected: bool) -> Style {
        let style = Style::default().fg(colors().action);
        if selected {
            style.add_modifier(Modifier::BOLD)
        } else {
            style.add_modifier(Modifier::DIM)
        }
    }

    /// 标题栏和状态栏
    pub fn bar() -> Style {
        let c = colors();
        Style::default().bg(c.accent).fg(c.selection_fg)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(colors().selection_fg)
    }
}
