//! 表单渲染：标签对齐 + 焦点高亮 + 提交按钮

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::model::{FieldValue, Form};
use crate::view::theme::Styles;

/// 渲染表单；`busy` 时按钮显示为禁用
pub fn render(
    form: &Form,
    focused: bool,
    submit_label: &str,
    busy: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let lines = lines(form, focused, submit_label, busy);
    frame.render_widget(Paragraph::new(lines), area);
}

/// 生成表单的行，便于页面在前后追加说明
pub fn lines(form: &Form, focused: bool, submit_label: &str, busy: bool) -> Vec<Line<'static>> {
    let label_width = form
        .fields
        .iter()
        .map(|f| f.label.width())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::new();
    for (i, field) in form.fields.iter().enumerate() {
        let is_focused = focused && i == form.focused;
        let padding = " ".repeat(label_width.saturating_sub(field.label.width()));
        let marker = if is_focused { "▶ " } else { "  " };

        let label_style = if is_focused {
            Styles::accent()
        } else {
            Styles::text()
        };

        let value = match &field.value {
            FieldValue::Text(s) if s.is_empty() => Span::styled(field.placeholder, Styles::muted()),
            FieldValue::Text(s) => Span::raw(s.clone()),
            FieldValue::Secret(s) if s.is_empty() => Span::styled(field.placeholder, Styles::muted()),
            FieldValue::Secret(s) => Span::raw("•".repeat(s.chars().count())),
            FieldValue::Toggle(on) => Span::raw(if *on { "[x]" } else { "[ ]" }),
        };
        let cursor = if is_focused && field.is_text() { "▏" } else { "" };

        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{}{padding}", field.label), label_style),
            Span::raw("  "),
            value,
            Span::styled(cursor, Styles::accent()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(button(submit_label, busy));
    lines
}

/// 按钮行；忙碌时禁用
pub fn button(label: &str, busy: bool) -> Line<'static> {
    if busy {
        Line::from(Span::styled("  [ Working... ]", Styles::muted()))
    } else {
        Line::from(Span::styled(format!("  [ {label} ]"), Styles::selected()))
    }
}
