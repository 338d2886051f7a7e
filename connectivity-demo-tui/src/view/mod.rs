//! View 层：UI 渲染
//!
//! 只读取 Model，渲染成 ratatui 组件；不修改任何状态。

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
