//! 内容面板消息
//!
//! 表单编辑、列表选择与提交

/// 内容面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    /// 上一个字段 / 上一个选项
    Previous,
    /// 下一个字段 / 下一个选项
    Next,
    /// 输入字符
    Input(char),
    /// 删除字符（Backspace）
    Backspace,
    /// 切换开关字段
    Toggle,
    /// 提交当前视图的主操作
    Submit,
    /// 列表中的上一项（PageUp）
    PreviousItem,
    /// 列表中的下一项（PageDown）
    NextItem,
    /// 删除选中项（Delete）
    Remove,
}
