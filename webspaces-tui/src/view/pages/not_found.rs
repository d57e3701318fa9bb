//! 未匹配路由

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::Line,
    widgets::Paragraph,
};

use crate::model::App;
use crate::view::theme::Styles;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::styled(app.route.status_code().to_string(), Styles::warn()),
        Line::from(""),
        Line::from("Couldn't find that page, sorry."),
        Line::from(r"¯\_(ツ)_/¯"),
        Line::from(""),
        Line::styled(format!("No route for {}", app.route.path), Styles::muted()),
        Line::styled("Press Enter to go home", Styles::muted()),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
