//! 向导：设置 root 密码

use ratatui::{Frame, layout::Rect, text::Line, widgets::Paragraph};
use webspaces_core::Action;

use crate::model::{App, PageState};
use crate::view::components::form;
use crate::view::theme::Styles;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let PageState::CreateRoot(state) = &app.page else {
        return;
    };

    let mut lines = vec![
        Line::from(""),
        Line::from("  Choose a password for the root user of your webspace."),
        Line::styled("  An SSH public key can be added now or later.", Styles::muted()),
        Line::from(""),
    ];
    lines.extend(form::lines(
        &state.form,
        app.focus.is_content(),
        "Next",
        app.busy.is_busy(Action::SetRootPassword),
    ));

    frame.render_widget(Paragraph::new(lines), area);
}
