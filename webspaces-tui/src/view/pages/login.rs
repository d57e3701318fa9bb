//! 登录视图

use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::Paragraph,
};
use webspaces_core::Action;

use crate::model::{App, PageState};
use crate::view::components::form;
use crate::view::theme::Styles;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let PageState::Login(state) = &app.page else {
        return;
    };

    let mut lines = vec![Line::from("")];
    lines.extend(form::lines(
        &state.form,
        app.focus.is_content(),
        "Log In",
        app.busy.is_busy(Action::Login),
    ));

    if let Some(error) = &state.error {
        lines.push(Line::from(""));
        lines.push(Line::styled(format!("  {error}"), Styles::danger()));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
