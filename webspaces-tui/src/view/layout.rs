//! 主布局渲染

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use webspaces_core::WizardStep;

use crate::model::App;

use super::components;
use super::registry::Registry;
use super::theme::Styles;

/// 渲染主布局
pub fn render(app: &App, registry: &Registry, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);

    if app.shell_visible() {
        // 左右分栏：导航外壳 + 路由视图
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(20), Constraint::Percentage(80)])
            .split(main_layout[1]);

        components::navigation::render(app, frame, columns[0]);
        render_view(app, registry, frame, columns[1]);
    } else {
        render_view(app, registry, frame, main_layout[1]);
    }

    components::statusbar::render(app, frame, main_layout[2]);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏：应用名 + 当前路径
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = vec![
        Span::raw(" Webspaces "),
        Span::raw("│ "),
        Span::raw(app.route.path.clone()),
    ];
    if app.route.is_not_found() {
        spans.push(Span::raw(format!(" ({})", app.route.status_code())));
    }
    if let Some(step) = WizardStep::from_view(app.view()) {
        spans.push(Span::raw(format!(
            "  · Setup {}/{}",
            step.ordinal(),
            WizardStep::ORDER.len()
        )));
    }
    let title = Paragraph::new(Line::from(spans))
        .style(Styles::bar());
    frame.render_widget(title, area);
}

/// 从注册表取出当前视图并渲染
fn render_view(app: &App, registry: &Registry, frame: &mut Frame, area: Rect) {
    let focused = app.focus.is_content() || !app.shell_visible();

    match registry.resolve(app.view()) {
        Ok(def) => {
            let block = Block::default()
                .title(format!(" {} ", def.title))
                .title_style(Styles::title())
                .borders(Borders::ALL)
                .border_style(Styles::border(focused));
            let inner = block.inner(area);
            frame.render_widget(block, area);
            (def.render)(app, frame, inner);
        }
        // 启动时已校验过，这里只兜底
        Err(err) => {
            let message = Paragraph::new(err.to_string())
                .style(Styles::danger())
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(message, area);
        }
    }
}
