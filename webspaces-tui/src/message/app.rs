//! 应用主消息枚举

use super::{ContentMessage, ModalMessage, NavigationMessage, RemoteMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板（外壳 ↔ 内容）
    ToggleFocus,

    /// 导航外壳相关消息
    Navigation(NavigationMessage),

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 后台请求完成
    Remote(RemoteMessage),

    /// 导航到路径（解析后挂载）
    Navigate(String),

    /// 返回：关闭弹窗或回到上一个向导步骤
    GoBack,

    /// 重新执行当前视图的挂载请求
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 打开跳转弹窗
    OpenGoTo,

    /// 向导下一步（仅限不需要后端确认的步骤）
    WizardNext,

    /// 向导上一步
    WizardPrevious,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
