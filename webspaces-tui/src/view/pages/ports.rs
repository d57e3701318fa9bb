//! 端口映射视图：当前转发列表 + 新映射表单

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use webspaces_core::Action;

use crate::model::{App, PageState};
use crate::view::components::form;
use crate::view::theme::Styles;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let PageState::Ports(state) = &app.page else {
        return;
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(10)])
        .split(area);

    let block = Block::default()
        .title(format!(" Forwards ({}) ", state.forwards.len()))
        .title_bottom(Line::styled(" PgUp/PgDn select │ Del remove ", Styles::muted()))
        .borders(Borders::ALL)
        .border_style(Styles::border(false));

    if state.forwards.is_empty() {
        let text = if app.busy.is_busy(Action::FetchPorts) {
            "Loading forwards..."
        } else if state.loaded {
            "No ports forwarded"
        } else {
            "Forwards unavailable. Press r to retry."
        };
        frame.render_widget(
            Paragraph::new(Line::styled(text, Styles::muted())).block(block),
            layout[0],
        );
    } else {
        let removing = app.busy.is_busy(Action::RemovePort);
        let items: Vec<ListItem> = state
            .forwards
            .iter()
            .enumerate()
            .map(|(i, (external, internal))| {
                let item = ListItem::new(format!("{external:>5} → {internal}"));
                match (i == state.selected, removing) {
                    (true, false) => item.style(Styles::selected()),
                    (true, true) => item.style(Styles::muted()),
                    _ => item,
                }
            })
            .collect();
        frame.render_widget(List::new(items).block(block), layout[0]);
    }

    let mut lines = vec![
        Line::from(""),
        Line::styled(
            "  Forward two external ports to ports inside your webspace.",
            Styles::muted(),
        ),
        Line::from(""),
    ];
    lines.extend(form::lines(
        &state.form,
        app.focus.is_content(),
        "Save",
        app.busy.is_busy(Action::SubmitPorts),
    ));

    frame.render_widget(Paragraph::new(lines), layout[1]);
}
