//! 公共 UI 组件

pub mod navigation;
pub mod statusbar;
