//! 主题和样式定义
//!
//! 配色方案在启动时按配置选定一次，之后所有渲染函数通过 `palette()` 读取。

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

static LIGHT: AtomicBool = AtomicBool::new(false);

/// 配置文件中的主题名
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// 设置当前主题
pub fn set_theme(theme: Theme) {
    LIGHT.store(theme == Theme::Light, Ordering::Relaxed);
}

/// 当前主题的配色
pub fn palette() -> Palette {
    if LIGHT.load(Ordering::Relaxed) {
        Palette::LIGHT
    } else {
        Palette::DARK
    }
}

/// 配色
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub text: Color,
    pub dim: Color,
    pub frame: Color,
    pub frame_active: Color,
    /// 标题栏、状态栏、当前导航项
    pub accent: Color,
    pub on_accent: Color,
    pub selection: Color,
    pub done: Color,
    pub warn: Color,
    pub danger: Color,
}

impl Palette {
    const DARK: Self = Self {
        text: Color::Rgb(220, 223, 228),
        dim: Color::Rgb(120, 126, 135),
        frame: Color::Rgb(60, 64, 72),
        frame_active: Color::Rgb(46, 160, 110),
        accent: Color::Rgb(46, 160, 110),
        on_accent: Color::Rgb(16, 20, 24),
        selection: Color::Rgb(34, 84, 64),
        done: Color::Rgb(110, 210, 150),
        warn: Color::Rgb(230, 180, 80),
        danger: Color::Rgb(235, 100, 90),
    };

    const LIGHT: Self = Self {
        text: Color::Rgb(36, 41, 47),
        dim: Color::Rgb(110, 119, 129),
        frame: Color::Rgb(208, 215, 222),
        frame_active: Color::Rgb(26, 127, 85),
        accent: Color::Rgb(26, 127, 85),
        on_accent: Color::White,
        selection: Color::Rgb(208, 240, 222),
        done: Color::Rgb(26, 127, 55),
        warn: Color::Rgb(154, 103, 0),
        danger: Color::Rgb(207, 34, 46),
    };
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 边框（焦点面板高亮）
    pub fn border(focused: bool) -> Style {
        let p = palette();
        Style::default().fg(if focused { p.frame_active } else { p.frame })
    }

    /// 选中项
    pub fn selected() -> Style {
        let p = palette();
        Style::default()
            .bg(p.selection)
            .fg(p.text)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(palette().text)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted() -> Style {
        Style::default().fg(palette().dim)
    }

    /// 标题栏 / 状态栏
    pub fn bar() -> Style {
        let p = palette();
        Style::default().bg(p.accent).fg(p.on_accent)
    }

    /// 状态栏中的传输错误通知，与普通提示区分开
    pub fn bar_error() -> Style {
        Style::default()
            .bg(palette().danger)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_key() -> Style {
        Style::default()
            .fg(palette().on_accent)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn hint_desc() -> Style {
        Style::default().fg(palette().on_accent)
    }

    /// 强调文字（当前导航项、焦点字段标签）
    pub fn accent() -> Style {
        Style::default()
            .fg(palette().accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(palette().text)
    }

    pub fn done() -> Style {
        Style::default().fg(palette().done)
    }

    pub fn warn() -> Style {
        Style::default()
            .fg(palette().warn)
            .add_modifier(Modifier::BOLD)
    }

    pub fn danger() -> Style {
        Style::default()
            .fg(palette().danger)
            .add_modifier(Modifier::BOLD)
    }
}
