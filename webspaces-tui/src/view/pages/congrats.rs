//! 向导最后一步

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::App;
use crate::view::components::form::button;
use crate::view::theme::Styles;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let os = app
        .wizard
        .os
        .map_or_else(String::new, |os| format!(" running {}", os.name()));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("Congratulations!", Styles::done())),
        Line::from(""),
        Line::from(format!("Your webspace{os} is ready to use.")),
        Line::from(""),
        button("Finish", false),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
