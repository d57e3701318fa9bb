//! 终端初始化和清理

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type Term = Terminal<CrosstermBackend<Stdout>>;

/// 进入原始模式和备用屏幕，并安装 panic 钩子
pub fn init_terminal() -> Result<Term> {
    install_panic_hook();
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(io::stdout()))?)
}

/// 恢复终端（无论主循环成功与否都必须调用）
pub fn restore_terminal(terminal: &mut Term) -> Result<()> {
    leave_screen()?;
    terminal.show_cursor()?;
    Ok(())
}

fn leave_screen() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

/// panic 时先离开备用屏幕，否则 panic 信息会被清掉
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = leave_screen();
        log::error!("[terminal] panic: {info}");
        previous(info);
    }));
}
