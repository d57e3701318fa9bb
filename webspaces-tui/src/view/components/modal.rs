//! 弹窗组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::model::{App, Modal};
use crate::view::theme::Styles;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Alert { title, message } => render_alert(frame, title, message),
        Modal::Help => render_help(frame),
        Modal::GoTo { input } => render_goto(frame, input),
        Modal::ConfirmDelete { focus } => render_confirm_delete(frame, *focus),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 阻塞式提示
fn render_alert(frame: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(50, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Styles::warn());

    let lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Styles::title()),
        Line::from(""),
        Line::styled("Enter / Esc: OK", Styles::muted()),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_help(frame: &mut Frame) {
    let area = centered_rect(55, 20, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Styles::border(true));

    let entries = [
        ("Tab", "Switch between sidebar and page"),
        ("↑ / ↓", "Move between fields or items"),
        ("← / →", "Pick an operating system or action"),
        ("PgUp / PgDn", "Move between port forwards"),
        ("Del", "Unbind / remove / clear / delete"),
        ("Enter", "Next field / submit"),
        ("Space", "Toggle a checkbox"),
        ("Esc", "Close dialog / previous wizard step"),
        ("n / Alt+n", "Next wizard step"),
        ("p / Alt+p", "Previous wizard step"),
        ("g / Alt+g", "Go to a path"),
        ("r / Alt+r", "Reload the page data"),
        ("? / Alt+h", "This help"),
        ("Alt+q / Ctrl+c", "Quit"),
    ];

    let mut lines = vec![Line::from("")];
    for (key, desc) in entries {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {key:<16}"),
                Styles::accent(),
            ),
            Span::raw(desc),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "  Single-letter keys work when no text field is focused",
        Styles::muted(),
    ));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// 跳转弹窗
fn render_goto(frame: &mut Frame, input: &str) {
    let area = centered_rect(50, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Go To ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Styles::border(true));

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Path: ", Styles::muted()),
            Span::styled(format!("{input}▏"), Styles::selected()),
        ]),
        Line::from(""),
        Line::styled("  Enter: Go | Esc: Cancel", Styles::muted()),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// 确认删除 webspace
fn render_confirm_delete(frame: &mut Frame, focus: usize) {
    let area = centered_rect(46, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm Deletion ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Styles::danger());

    let (cancel, delete) = if focus == 1 {
        (Styles::text(), Styles::selected().patch(Styles::danger()))
    } else {
        (Styles::selected(), Styles::danger())
    };

    let lines = vec![
        Line::from(""),
        Line::styled("  Are you sure?", Styles::title()),
        Line::styled(
            "  Your webspace and all its data will be deleted.",
            Styles::muted(),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(" Cancel ", cancel),
            Span::raw("    "),
            Span::styled(" Delete ", delete),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
