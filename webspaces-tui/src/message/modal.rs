//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,

    /// 确认（跳转弹窗中为跳转，删除确认中按焦点执行，其余为关闭）
    Confirm,

    /// 切换确认弹窗的焦点（取消 / 确认）
    ToggleFocus,

    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,
}
