//! 域名视图：已绑定域名列表 + 新域名输入

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
    let PageState::Domains(state) = &app.page else {
        return;
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(4)])
        .split(area);

    let block = Block::default()
        .title(format!(" Bound domains ({}) ", state.domains.len()))
        .borders(Borders::ALL)
        .border_style(Styles::border(false));

    if state.domains.is_empty() {
        let text = if app.busy.is_busy(Action::FetchDomains) {
            "Loading domains..."
        } else if state.loaded {
            "No domains yet"
        } else {
            "Domains unavailable. Press r to retry."
        };
        frame.render_widget(
            Paragraph::new(Line::styled(text, Styles::muted())).block(block),
            layout[0],
        );
    } else {
        let removing = app.busy.is_busy(Action::RemoveDomain);
        let items: Vec<ListItem> = state
            .domains
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let item = ListItem::new(format!("● {d}"));
                if i == state.selected {
                    item.style(if removing { Styles::muted() } else { Styles::selected() })
                } else {
                    item
                }
            })
            .collect();
        let block = block.title_bottom(Line::styled(" ↑↓ select │ Del unbind ", Styles::muted()));
        frame.render_widget(List::new(items).block(block), layout[0]);
    }

    form::render(
        &state.input,
        app.focus.is_content(),
        "Add",
        app.busy.is_busy(Action::AddDomain),
        frame,
        layout[1],
    );
}
