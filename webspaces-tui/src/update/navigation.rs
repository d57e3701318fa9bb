//! 导航外壳更新逻辑

use crate::backend::Request;
use crate::message::NavigationMessage;
use crate::model::App;

use super::route::navigate;

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) -> Vec<Request> {
    match msg {
        NavigationMessage::SelectPrevious => app.navigation.select_previous(),
        NavigationMessage::SelectNext => app.navigation.select_next(),
        NavigationMessage::SelectFirst => app.navigation.select_first(),
        NavigationMessage::SelectLast => app.navigation.select_last(),
        NavigationMessage::Confirm => {
            if let Some(item) = app.navigation.current_item() {
                let path = item.path;
                return navigate(app, path);
            }
        }
    }
    Vec::new()
}
