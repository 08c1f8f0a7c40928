//! Message types for the Shelf webapp.
//!
//! All page events are represented as messages in the Elm architecture style:
//! the browser layer feeds a `Message` to the controller and applies the
//! `DisplayUpdate` the controller hands back.

/// Events delivered to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The counter element was clicked
    CountClicked,
    /// A scheduled scale reset elapsed
    ScaleResetDue,
    /// The page's structural content finished loading
    PageReady,
}

/// DOM mutation to apply in response to a message.
///
/// The controller never touches the DOM itself; these carry the final
/// strings the browser layer writes into the element, which keeps the
/// controller testable off the browser.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayUpdate {
    /// Show the new click total and pop the element
    CountChanged {
        /// Text for the counter element, e.g. `Clicks: 3`
        text: String,
        /// Transform applied immediately, e.g. `scale(1.2)`
        scale: String,
        /// Delay before the scale resets, in milliseconds
        reset_delay_ms: u32,
    },
    /// Settle the element back to its resting scale
    ScaleRested {
        /// Transform to rest at, e.g. `scale(1)`
        scale: String,
    },
    /// Install the transition so later scale changes animate
    TransitionReady {
        /// CSS transition value, e.g. `transform 0.2s ease`
        transition: String,
    },
}
