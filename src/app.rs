//! Shelf webapp controller.
//!
//! `ShelfApp` owns the page state (click tally, config, ready latch) and
//! turns page events into display updates in the Elm architecture style.
//! The browser layer owns the DOM, so everything here also runs under
//! native `cargo test`.

use crate::config::AppConfig;
use crate::counter::ClickCounter;
use crate::message::{DisplayUpdate, Message};

/// Render a CSS transform for a scale factor, e.g. `scale(1.2)`.
fn scale_css(scale: f32) -> String {
    format!("scale({})", scale)
}

/// Page controller: owns the counter and decides how the display reacts.
pub struct ShelfApp {
    /// Runtime configuration (element id, scales, delay, transition)
    config: AppConfig,
    /// Click tally for the page lifetime
    counter: ClickCounter,
    /// Whether the page-ready initializer already ran
    page_ready: bool,
}

impl ShelfApp {
    /// Create a controller with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a controller with the given configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            counter: ClickCounter::new(),
            page_ready: false,
        }
    }

    /// Configuration in effect for this page.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Current click total.
    pub fn clicks(&self) -> u64 {
        self.counter.count()
    }

    /// Apply a message and return the display update to carry out.
    ///
    /// Returns `None` when nothing should happen, e.g. a repeated
    /// page-ready delivery.
    pub fn update(&mut self, message: Message) -> Option<DisplayUpdate> {
        match message {
            Message::CountClicked => {
                let total = self.counter.record_click();
                log::debug!("Click {} recorded", total);
                Some(DisplayUpdate::CountChanged {
                    text: self.counter.label(),
                    scale: scale_css(self.config.pop_scale),
                    reset_delay_ms: self.config.reset_delay_ms,
                })
            }
            Message::ScaleResetDue => Some(DisplayUpdate::ScaleRested {
                scale: scale_css(self.config.rest_scale),
            }),
            Message::PageReady => {
                if self.page_ready {
                    log::debug!("Page ready delivered again, ignoring");
                    return None;
                }
                self.page_ready = true;
                log::info!("DOM fully loaded");
                Some(DisplayUpdate::TransitionReady {
                    transition: self.config.transition.clone(),
                })
            }
        }
    }
}

impl Default for ShelfApp {
    fn default() -> Self {
        Self::new()
    }
}
