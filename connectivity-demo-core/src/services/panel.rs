//! Demo panel controller.
//!
//! One controller owns one panel's lifecycle: idle display, the two-stage
//! check sequence (resolve, then act), and terminal success/error rendering.
//! All four default panels are instances of this type with different configs.
//!
//! Concurrency model: controllers are independent of each other; within one
//! panel the action request is only issued after the resolve request
//! completes. A re-triggered panel does not abort the superseded sequence —
//! it bumps the generation counter so the stale sequence's late display
//! writes are discarded instead of overwriting newer state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use log::debug;
use tokio::sync::RwLock;

use crate::error::{DemoError, DemoResult};
use crate::traits::DemoGateway;
use crate::types::{DbCredentials, DemoAction, DemoConfig, PanelDisplay, PanelState, Resolution};

/// Controller for a single demo panel.
pub struct PanelController {
    config: DemoConfig,
    gateway: Arc<dyn DemoGateway>,
    display: RwLock<PanelDisplay>,
    /// Request generation; display writes from older generations are stale.
    generation: AtomicU64,
}

impl PanelController {
    /// Create a controller for `config`, talking through `gateway`.
    pub fn new(config: DemoConfig, gateway: Arc<dyn DemoGateway>) -> DemoResult<Self> {
        config.validate()?;
        let display = RwLock::new(PanelDisplay::idle(config.diagram_disconnected.clone()));
        Ok(Self {
            config,
            gateway,
            display,
            generation: AtomicU64::new(0),
        })
    }

    /// Panel configuration.
    #[must_use]
    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// Clone of the current display state.
    pub async fn snapshot(&self) -> PanelDisplay {
        self.display.read().await.clone()
    }

    /// Clone of the current display state, for synchronous render loops.
    ///
    /// Must not be called from within an async context.
    #[must_use]
    pub fn blocking_snapshot(&self) -> PanelDisplay {
        self.display.blocking_read().clone()
    }

    /// Back to the idle description. Supersedes any in-flight sequence.
    pub async fn reset(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        let mut display = self.display.write().await;
        *display = PanelDisplay::idle(self.config.diagram_disconnected.clone());
    }

    /// Enter the running view: hide the description, clear prior results.
    /// Idempotent while already running.
    pub async fn start(&self) {
        let mut display = self.display.write().await;
        display.description_visible = false;
        display.running_visible = true;
        display.clear_results();
        display.state = PanelState::Running;
    }

    /// Execute the panel's check sequence.
    ///
    /// `credentials` overrides the configured db credentials for this call
    /// (frontends read them from the panel's input fields at call time).
    /// Failures are rendered into the panel's error region, never
    /// propagated; the spinner is hidden again on every path.
    pub async fn run(&self, credentials: Option<&DbCredentials>) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let disconnected = self.config.diagram_disconnected.clone();
        // The startup paint is generation-guarded too: a reset landing
        // between the bump above and this write supersedes the whole run.
        let started = self
            .apply(generation, move |display| {
                display.clear_results();
                display.description_visible = false;
                display.running_visible = true;
                display.diagram = disconnected;
                display.spinner_visible = true;
                display.state = PanelState::Running;
            })
            .await;
        if !started {
            return;
        }

        if let Err(err) = self.run_sequence(generation, credentials).await {
            if err.is_expected() {
                log::warn!("[PANEL {}] check failed: {err}", self.config.id);
            } else {
                log::error!("[PANEL {}] check failed: {err}", self.config.id);
            }
            let text = self.error_text(&err);
            self.apply(generation, move |display| display.show_error(text))
                .await;
        }

        // Guaranteed cleanup: the spinner never outlives its sequence.
        self.apply(generation, |display| {
            display.spinner_visible = false;
            display.checked_at = Some(Utc::now());
        })
        .await;
    }

    /// The resolve-then-act sequence. Returns the first failing stage's
    /// error; display updates along the way are generation-guarded.
    async fn run_sequence(
        &self,
        generation: u64,
        credentials: Option<&DbCredentials>,
    ) -> DemoResult<()> {
        if let Some(fqdn) = self.config.fqdn.clone() {
            let payload = self.gateway.resolve(&fqdn).await?;
            let resolution =
                Resolution::from_payload(&fqdn, &payload, self.config.address_source)?;
            let line = format!("service {fqdn} resolved to: {}", resolution.address);
            self.apply(generation, move |display| display.push_output(line))
                .await;
        }

        match &self.config.action {
            DemoAction::WebProxy { .. } | DemoAction::DbConnect { .. } => {
                let fqdn = self.config.fqdn.as_deref().ok_or_else(|| {
                    DemoError::ValidationError(format!(
                        "panel {} needs an fqdn for its action",
                        self.config.id
                    ))
                })?;
                let target = self.config.action.target_url(fqdn, credentials)?;
                let outcome = match &self.config.action {
                    DemoAction::DbConnect { .. } => self.gateway.db_connect(&target).await?,
                    _ => self.gateway.web_proxy(&target).await?,
                };
                let connected = self.config.diagram_connected.clone();
                self.apply(generation, move |display| {
                    display.error = None;
                    display.diagram = connected;
                    display.push_output(format!("Status:{}", outcome.status));
                    display.state = PanelState::Success;
                })
                .await;
            }
            DemoAction::FrameDump { path } => {
                let outcome = self.gateway.fetch_dump(path).await?;
                self.apply(generation, move |display| {
                    display.error = None;
                    display.frame = Some(outcome.message);
                    display.output_visible = false;
                    display.state = PanelState::Success;
                })
                .await;
            }
        }
        Ok(())
    }

    /// Error region text for a failed stage.
    fn error_text(&self, err: &DemoError) -> String {
        match err {
            DemoError::ActionFailed { message, .. } => {
                let fqdn = self.config.fqdn.as_deref().unwrap_or(&self.config.id);
                format!("service {fqdn} error: {message}")
            }
            other => other.to_string(),
        }
    }

    /// Apply `f` to the display unless `generation` has been superseded.
    async fn apply<F>(&self, generation: u64, f: F) -> bool
    where
        F: FnOnce(&mut PanelDisplay),
    {
        let mut display = self.display.write().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(
                "[PANEL {}] discarding stale display update (generation {generation})",
                self.config.id
            );
            return false;
        }
        f(&mut display);
        true
    }
}
