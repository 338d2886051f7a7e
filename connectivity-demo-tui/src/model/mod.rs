//! Model 层：应用状态定义
//!
//! Model 层是应用状态的“唯一真相来源”，只包含数据结构，不包含业务
//! 逻辑；所有状态变更都通过 Update 层来触发。
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Navigation / Content）
//!         mod navigation;     // 导航栏状态
//!         mod page;           // 页面路由状态
//!         mod panel;          // 面板页面状态（凭证输入、显示快照）
//!
//! 面板的权威显示状态住在 core 的 `PanelController` 里；这一层保存的
//! 是每轮主循环刷新的快照（`PanelPane.display`），以及纯 UI 所有的
//! 输入字段状态。

mod app;
mod focus;
mod navigation;
mod page;
mod panel;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavItem, NavigationState};
pub use page::Page;
pub use panel::{CredentialField, PanelPane};
