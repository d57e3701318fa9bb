//! 主循环

use std::time::Duration;

use anyhow::Result;

use crate::backend::{CoreService, Request};
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view::{self, Registry};

pub fn run(
    terminal: &mut Term,
    app: &mut App,
    registry: &Registry,
    backend: &mut CoreService,
    initial_path: &str,
) -> Result<()> {
    let requests = update::update(app, AppMessage::Navigate(initial_path.to_string()));
    dispatch(backend, requests);

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, registry, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 收取已完成的后台请求
        while let Some(remote) = backend.try_recv() {
            let requests = update::update(app, AppMessage::Remote(remote));
            dispatch(backend, requests);
        }

        // 4. 轮询事件（100ms 超时），翻译成消息并更新状态
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            let requests = update::update(app, msg);
            dispatch(backend, requests);
        }
    }

    Ok(())
}

fn dispatch(backend: &CoreService, requests: Vec<Request>) {
    for request in requests {
        backend.dispatch(request);
    }
}
