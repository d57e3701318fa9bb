//! 左侧导航外壳组件

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::model::App;
use crate::view::theme::Styles;

/// 渲染导航外壳
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let is_focused = app.focus.is_navigation();

    let block = Block::default()
        .title(" Webspace ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(is_focused));

    let items: Vec<ListItem> = app
        .navigation
        .items
        .iter()
        .enumerate()
        .map(|(i, nav_item)| {
            let is_selected = i == app.navigation.selected;
            let prefix = if is_selected { "▶ " } else { "  " };
            let content = format!("{}{} {}", prefix, nav_item.icon, nav_item.label);

            // 当前挂载的视图加粗，焦点所在项高亮
            let style = if is_selected && is_focused {
                Styles::selected()
            } else if nav_item.view == app.view() {
                Styles::accent()
            } else {
                Styles::text()
            };

            ListItem::new(Line::from(Span::styled(content, style)))
        })
        .collect();

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    state.select(Some(app.navigation.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
