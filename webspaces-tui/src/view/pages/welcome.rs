//! 向导第一步：欢迎

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::App;
use crate::view::components::form::button;
use crate::view::theme::Styles;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Welcome to your webspace!",
            Styles::accent(),
        )),
        Line::from(""),
        Line::from("  Before you start, a few things need setting up:"),
        Line::from(""),
    ];

    let steps = [
        ("Pick an operating system", app.wizard.os.is_some()),
        ("Set a root password", app.wizard.root_password_set),
    ];
    for (label, done) in steps {
        let (mark, style) = if done {
            ("✓", Styles::done())
        } else {
            ("•", Styles::muted())
        };
        lines.push(Line::styled(format!("    {mark} {label}"), style));
    }

    lines.push(Line::from(""));
    lines.push(button("Get Started", false));
    lines.push(Line::from(""));
    lines.push(Line::styled("  Enter or n to continue", Styles::muted()));

    frame.render_widget(Paragraph::new(lines), area);
}
