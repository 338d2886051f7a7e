//! Panel services.

mod panel;

pub use panel::PanelController;
