//! 首页视图

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::App;
use crate::view::components::form::button;
use crate::view::theme::Styles;

/// 渲染首页
pub fn render(_app: &App, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("Webspaces", Styles::accent())),
        Line::from(""),
        Line::from(Span::styled(
            "Your own container on the network, set up in a few steps",
            Styles::muted(),
        )),
        Line::from(""),
        button("Log In", false),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
