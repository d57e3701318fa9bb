//! 底部状态栏组件

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};
use webspaces_core::{ViewId, WizardStep};

use crate::model::{App, FocusPanel, StatusKind};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 传输失败：整条状态栏显示错误，与阻塞提示区分
    if let Some(status) = &app.status
        && status.kind == StatusKind::Error
    {
        let line = Line::from(vec![
            Span::raw(" ✗ "),
            Span::raw(status.text.clone()),
            Span::raw("  (Alt+r to reload)"),
        ]);
        frame.render_widget(Paragraph::new(line).style(Styles::bar_error()), area);
        return;
    }

    let hints = get_hints(app);
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(separator());
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if app.busy.any_busy() {
        spans.push(separator());
        spans.push(Span::styled("Working...", Styles::hint_key()));
    }

    if let Some(status) = &app.status {
        spans.push(separator());
        spans.push(Span::styled(status.text.clone(), Styles::hint_key()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::bar());
    frame.render_widget(paragraph, area);
}

fn separator() -> Span<'static> {
    Span::styled(" │ ", Styles::hint_desc())
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    if app.shell_visible() {
        hints.push(("Tab", "Switch Panels"));
    }

    match app.focus {
        FocusPanel::Navigation if app.shell_visible() => {
            hints.push(("↑↓", "Navigation"));
            hints.push(("Enter", "Open"));
        }
        _ => match app.view() {
            ViewId::Home => hints.push(("Enter", "Log In")),
            ViewId::Login | ViewId::CreateRoot | ViewId::Ports => {
                hints.push(("↑↓", "Field"));
                hints.push(("Enter", "Next / Submit"));
            }
            ViewId::Configs => {
                hints.push(("↑↓", "Field"));
                hints.push(("Space", "Toggle SSL"));
                hints.push(("Enter", "Save"));
            }
            ViewId::Domains => hints.push(("Enter", "Add Domain")),
            ViewId::ChooseOs => {
                hints.push(("←→", "Select"));
                hints.push(("Enter", "Next"));
            }
            ViewId::Welcome | ViewId::Congrats => hints.push(("Enter", "Next")),
            ViewId::Dashboard => hints.push(("Enter", "Refresh")),
            ViewId::Terminal => {}
            ViewId::NotFound => hints.push(("Enter", "Home")),
        },
    }

    if WizardStep::from_view(app.view())
        .and_then(WizardStep::previous)
        .is_some()
    {
        hints.push(("Esc", "Previous"));
    }

    hints.push(("Alt+g", "Go To"));
    hints.push(("Alt+h", "Help"));
    hints.push(("Alt+q", "Quit"));

    hints
}
