//! 终端视图：SSH 提示 + 控制台日志

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use webspaces_core::Action;

use crate::model::{App, PageState};
use crate::view::theme::Styles;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let PageState::Terminal(state) = &app.page else {
        return;
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    let intro = vec![
        Line::from(""),
        Line::from("  Open a shell in your webspace with: ssh root@<your webspace>"),
        Line::styled(
            "  Use the root password or SSH key set during setup.",
            Styles::muted(),
        ),
    ];
    frame.render_widget(Paragraph::new(intro), layout[0]);

    let block = Block::default()
        .title(" Console log ")
        .title_bottom(Line::styled(" Enter reload │ Del clear ", Styles::muted()))
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_content()));

    let paragraph = if !state.log.is_empty() {
        // 只显示末尾能放下的部分
        let visible = usize::from(layout[1].height.saturating_sub(2));
        let lines: Vec<Line> = state.log.lines().map(Line::raw).collect();
        let skip = lines.len().saturating_sub(visible);
        Paragraph::new(lines.into_iter().skip(skip).collect::<Vec<_>>())
    } else {
        let text = if app.busy.is_busy(Action::FetchLog) {
            "Loading console log..."
        } else if state.loaded {
            "The console log is empty"
        } else {
            "Console log unavailable. Press Enter to retry."
        };
        Paragraph::new(Line::styled(text, Styles::muted()))
    };
    frame.render_widget(paragraph.block(block).wrap(Wrap { trim: false }), layout[1]);
}
