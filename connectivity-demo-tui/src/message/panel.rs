//! 演示面板子消息

/// 面板消息（作用于当前面板页）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMessage {
    /// 进入运行视图
    Start,
    /// 执行检查序列
    Run,
    /// 聚焦下一个凭证输入字段
    NextField,
    /// 向聚焦字段输入字符
    Input(char),
    /// 删除聚焦字段的最后一个字符
    Backspace,
}
