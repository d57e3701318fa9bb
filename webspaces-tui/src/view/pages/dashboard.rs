//! 仪表盘视图

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};
use webspaces_core::Action;
use webspaces_gateway::WebspaceState;

use crate::model::state::{DashboardAction, DashboardState};
use crate::model::{App, PageState};
use crate::view::theme::Styles;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let PageState::Dashboard(state) = &app.page else {
        return;
    };

    let mut lines = vec![Line::from("")];

    match &state.status {
        Some(status) => lines.extend(status_lines(status)),
        None => {
            let text = if app.busy.is_busy(Action::FetchStatus) {
                "  Loading status..."
            } else {
                "  No status available. Select Refresh to retry."
            };
            lines.push(Line::styled(text, Styles::muted()));
        }
    }

    lines.push(Line::from(""));
    lines.push(action_row(app, state));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "  ←→ select │ Enter run │ Del delete webspace",
        Styles::muted(),
    ));

    frame.render_widget(Paragraph::new(lines), area);
}

fn status_lines(status: &WebspaceState) -> Vec<Line<'static>> {
    let state = if status.running {
        Span::styled("running", Styles::done())
    } else {
        Span::styled("stopped", Styles::warn())
    };
    let mut lines = vec![row("State", vec![state])];

    let rows = [
        (
            "Operating system",
            status.os.clone().unwrap_or_else(|| "unknown".to_string()),
        ),
        ("Uptime", format_uptime(status.uptime)),
        ("CPU time", format_cpu_time(status.usage.cpu)),
        ("Memory", format_bytes(status.usage.memory)),
        ("Processes", status.usage.processes.to_string()),
    ];
    for (label, value) in rows {
        lines.push(row(label, vec![Span::raw(value)]));
    }
    for (disk, used) in &status.usage.disks {
        lines.push(row(
            "Disk",
            vec![Span::raw(format!("{disk}: {}", format_bytes(*used)))],
        ));
    }
    lines
}

fn row(label: &str, mut value: Vec<Span<'static>>) -> Line<'static> {
    let mut spans = vec![Span::styled(format!("  {label:<18}"), Styles::title())];
    spans.append(&mut value);
    Line::from(spans)
}

/// 操作按钮行，在途的操作显示为灰色
fn action_row(app: &App, state: &DashboardState) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (i, action) in DashboardAction::ALL.iter().enumerate() {
        let busy = match action {
            DashboardAction::Refresh => app.busy.is_busy(Action::FetchStatus),
            DashboardAction::Power(power) => app.busy.is_busy(Action::Power(*power)),
            DashboardAction::Delete => app.busy.is_busy(Action::DeleteWebspace),
        };
        let style = if i == state.selected {
            Styles::selected()
        } else if busy {
            Styles::muted()
        } else if *action == DashboardAction::Delete {
            Styles::danger()
        } else {
            Styles::text()
        };
        spans.push(Span::styled(format!("[ {} ]", action.label()), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// 累计 CPU 时间（纳秒）
#[allow(clippy::cast_precision_loss)]
fn format_cpu_time(nanos: u64) -> String {
    let seconds = nanos as f64 / 1e9;
    if seconds < 60.0 {
        format!("{seconds:.2}s")
    } else {
        format!("{}m {:02}s", nanos / 60_000_000_000, (nanos / 1_000_000_000) % 60)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn format_uptime(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let (days, hours, minutes) = (total / 86_400, (total / 3_600) % 24, (total / 60) % 60);
    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m {}s", total % 60)
    }
}

#[allow(clippy::cast_precision_loss)]
fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}
