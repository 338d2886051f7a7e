//! Public types for the connectivity demo panels.

mod config;
mod outcome;
mod panel;

pub use config::{
    AddressSource, DbCredentials, DemoAction, DemoConfig, RunnerConfig, CONFIG_FILE_ENV,
};
pub use outcome::{ActionOutcome, ResolvePayload, Resolution};
pub use panel::{PanelDisplay, PanelState};
