//! 页面视图

pub mod overview;
pub mod panel;
