//! 配置视图

use ratatui::{Frame, layout::Rect, text::Line, widgets::Paragraph};
use webspaces_core::Action;

use crate::model::{App, PageState};
use crate::view::components::form;
use crate::view::theme::Styles;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let PageState::Configs(state) = &app.page else {
        return;
    };

    if !state.loaded {
        let text = if app.busy.is_busy(Action::FetchConfigs) {
            "  Loading configuration..."
        } else {
            "  Configuration unavailable. Press r to retry."
        };
        frame.render_widget(
            Paragraph::new(vec![Line::from(""), Line::styled(text, Styles::muted())]),
            area,
        );
        return;
    }

    form::render(
        &state.form,
        app.focus.is_content(),
        "Save",
        app.busy.is_busy(Action::SubmitConfigs),
        frame,
        area,
    );
}
