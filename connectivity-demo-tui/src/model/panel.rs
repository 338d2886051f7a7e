//! 面板页面状态定义

use connectivity_demo_core::types::{DbCredentials, DemoAction, DemoConfig, PanelDisplay};

/// 凭证输入字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    Name,
    Key,
}

/// 一个面板页面的 UI 状态
///
/// `display` 是控制器显示状态的快照，由主循环每轮刷新；
/// 凭证输入字段属于纯 UI 状态，执行时才交给控制器。
pub struct PanelPane {
    /// 最近一次刷新的显示快照
    pub display: PanelDisplay,
    /// 该面板是否提供凭证输入（db-connect 动作）
    pub supports_credentials: bool,
    /// 当前聚焦的输入字段；`None` 时按键作为面板快捷键处理
    pub field_focus: Option<CredentialField>,
    /// 数据库名输入
    pub db_name: String,
    /// 数据库密钥输入
    pub db_key: String,
}

impl PanelPane {
    /// 根据面板配置创建初始状态
    #[must_use]
    pub fn new(config: &DemoConfig) -> Self {
        let supports_credentials = matches!(config.action, DemoAction::DbConnect { .. });
        Self {
            display: PanelDisplay::idle(config.diagram_disconnected.clone()),
            supports_credentials,
            field_focus: None,
            db_name: String::new(),
            db_key: String::new(),
        }
    }

    /// 聚焦下一个输入字段（None → Name → Key → None）
    pub fn focus_next_field(&mut self) {
        if !self.supports_credentials {
            return;
        }
        self.field_focus = match self.field_focus {
            None => Some(CredentialField::Name),
            Some(CredentialField::Name) => Some(CredentialField::Key),
            Some(CredentialField::Key) => None,
        };
    }

    /// 向当前聚焦的字段输入字符
    pub fn input(&mut self, c: char) {
        match self.field_focus {
            Some(CredentialField::Name) => self.db_name.push(c),
            Some(CredentialField::Key) => self.db_key.push(c),
            None => {}
        }
    }

    /// 删除当前聚焦字段的最后一个字符
    pub fn backspace(&mut self) {
        match self.field_focus {
            Some(CredentialField::Name) => {
                self.db_name.pop();
            }
            Some(CredentialField::Key) => {
                self.db_key.pop();
            }
            None => {}
        }
    }

    /// 执行时传给控制器的凭证；两个字段都填了才算
    #[must_use]
    pub fn credentials(&self) -> Option<DbCredentials> {
        if self.db_name.is_empty() || self.db_key.is_empty() {
            return None;
        }
        Some(DbCredentials {
            db_name: self.db_name.clone(),
            db_key: self.db_key.clone(),
        })
    }
}
