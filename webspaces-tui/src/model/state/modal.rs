//! 弹窗/对话框状态

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 阻塞式提示：后端拒绝或本地校验失败
    Alert { title: String, message: String },
    /// 快捷键帮助
    Help,
    /// 跳转到任意路径
    GoTo { input: String },
    /// 确认删除 webspace
    ConfirmDelete {
        /// 焦点：0=取消, 1=确认
        focus: usize,
    },
}

/// 弹窗状态容器
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn show_alert(&mut self, title: &str, message: &str) {
        self.active = Some(Modal::Alert {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    /// 显示跳转弹窗，预填当前路径
    pub fn show_goto(&mut self, current: &str) {
        self.active = Some(Modal::GoTo {
            input: current.to_string(),
        });
    }

    /// 显示确认删除弹窗，默认焦点在“取消”
    pub fn show_confirm_delete(&mut self) {
        self.active = Some(Modal::ConfirmDelete { focus: 0 });
    }

    /// 跳转弹窗的输入（若当前是跳转弹窗）
    pub fn goto_input_mut(&mut self) -> Option<&mut String> {
        match &mut self.active {
            Some(Modal::GoTo { input }) => Some(input),
            _ => None,
        }
    }
}
