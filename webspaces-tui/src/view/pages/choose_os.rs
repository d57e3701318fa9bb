//! 向导：选择操作系统

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};
use webspaces_core::Action;
use webspaces_gateway::OsChoice;

use crate::model::{App, PageState};
use crate::view::components::form::button;
use crate::view::theme::Styles;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let PageState::ChooseOs(state) = &app.page else {
        return;
    };

    let mut spans = vec![Span::raw("  ")];
    for (i, os) in OsChoice::ALL.iter().enumerate() {
        let style = if i == state.selected {
            Styles::selected()
        } else {
            Styles::text()
        };
        spans.push(Span::styled(format!(" {} ", os.name()), style));
        spans.push(Span::raw(" "));
    }

    let mut lines = vec![
        Line::from(""),
        Line::from("  Which operating system should your webspace run?"),
        Line::from(""),
        Line::from(spans),
        Line::from(""),
    ];
    if app.wizard.os == Some(state.choice()) {
        lines.push(Line::styled("  (currently selected)", Styles::muted()));
        lines.push(Line::from(""));
    }
    lines.push(button("Next", app.busy.is_busy(Action::ChooseOs)));
    lines.push(Line::from(""));
    lines.push(Line::styled("  ←→ select │ Esc previous", Styles::muted()));

    frame.render_widget(Paragraph::new(lines), area);
}
