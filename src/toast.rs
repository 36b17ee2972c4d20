// SPDX-License-Identifier: MPL-2.0
//! The toast request model.
//!
//! A [`Toast`] is an immutable description of one notification to show:
//! message, visual state, positioning hints, directions, display duration,
//! an optional completion callback, and the [`ContextId`] of the requesting
//! screen. Once submitted it is presented at most once, and its completion
//! callback fires exactly once with the [`DismissalReason`].

use std::fmt;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::style::VisualState;
use crate::surface::ContextId;

/// Vertical placement of the toast on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Location {
    /// Top of the screen.
    Top,
    /// Bottom of the screen.
    #[default]
    Bottom,
}

/// Layout area the toast is positioned against. Passed through to the
/// surface untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutReference {
    /// The current presentation context.
    #[default]
    CurrentContext,
    /// The requesting screen itself.
    Sender,
}

/// Slide direction for entry or exit animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// To or from the left edge.
    Left,
    /// To or from the right edge.
    Right,
    /// To or from the nearest vertical edge, per [`Location`].
    #[default]
    Vertical,
}

/// How long a toast stays on screen before timing out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayDuration {
    /// 2 seconds.
    Short,
    /// 4 seconds.
    #[default]
    Average,
    /// 8 seconds.
    Long,
    /// An explicit duration; must be greater than zero.
    Custom(Duration),
}

impl DisplayDuration {
    /// The resolved time-to-live.
    #[must_use]
    pub fn length(&self) -> Duration {
        match self {
            DisplayDuration::Short => Duration::from_secs(2),
            DisplayDuration::Average => Duration::from_secs(4),
            DisplayDuration::Long => Duration::from_secs(8),
            DisplayDuration::Custom(duration) => *duration,
        }
    }

    /// Rejects zero-length durations.
    pub fn validate(&self) -> Result<()> {
        if self.length().is_zero() {
            Err(Error::InvalidDuration)
        } else {
            Ok(())
        }
    }
}

/// Why a dropped toast never made it to the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropCause {
    /// The requesting context no longer existed at dequeue time.
    ContextReleased,
    /// The requesting context was not attached to a visible screen at
    /// dequeue time.
    ContextDetached,
}

impl fmt::Display for DropCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropCause::ContextReleased => write!(f, "context released"),
            DropCause::ContextDetached => write!(f, "context detached"),
        }
    }
}

/// Why a toast stopped being displayed (or was never displayed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DismissalReason {
    /// The user tapped the toast.
    Tapped,
    /// The display duration elapsed.
    TimedOut,
    /// Dismissed through [`Manager::dismiss`](crate::Manager::dismiss).
    #[default]
    Programmatically,
    /// Dropped before display because the requesting context went away.
    Dropped(DropCause),
}

/// Callback invoked exactly once when a toast's lifecycle ends.
pub type CompletionHandler = Box<dyn FnOnce(DismissalReason)>;

/// One notification to show.
///
/// Built with [`Toast::new`] plus the `with_*` setters, then submitted via
/// [`Manager::show`](crate::Manager::show).
///
/// ```
/// use iced_toast::{ContextId, DisplayDuration, Toast, VisualState};
///
/// let context = ContextId::new();
/// let toast = Toast::new("Image saved", context)
///     .with_state(VisualState::Success)
///     .with_duration(DisplayDuration::Short)
///     .on_dismiss(|reason| println!("gone: {reason:?}"));
/// ```
pub struct Toast {
    message: String,
    state: VisualState,
    location: Location,
    layout_reference: LayoutReference,
    presenting_direction: Direction,
    dismissing_direction: Direction,
    duration: DisplayDuration,
    context: ContextId,
    completion: Option<CompletionHandler>,
    dismissal_reason: DismissalReason,
}

impl Toast {
    /// Creates a toast with default state, placement, and duration.
    pub fn new(message: impl Into<String>, context: ContextId) -> Self {
        Self {
            message: message.into(),
            state: VisualState::default(),
            location: Location::default(),
            layout_reference: LayoutReference::default(),
            presenting_direction: Direction::default(),
            dismissing_direction: Direction::default(),
            duration: DisplayDuration::default(),
            context,
            completion: None,
            dismissal_reason: DismissalReason::default(),
        }
    }

    /// Sets the visual state.
    #[must_use]
    pub fn with_state(mut self, state: VisualState) -> Self {
        self.state = state;
        self
    }

    /// Sets the on-screen location.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Sets the layout reference.
    #[must_use]
    pub fn with_layout_reference(mut self, layout_reference: LayoutReference) -> Self {
        self.layout_reference = layout_reference;
        self
    }

    /// Sets the entry animation direction.
    #[must_use]
    pub fn with_presenting_direction(mut self, direction: Direction) -> Self {
        self.presenting_direction = direction;
        self
    }

    /// Sets the exit animation direction.
    #[must_use]
    pub fn with_dismissing_direction(mut self, direction: Direction) -> Self {
        self.dismissing_direction = direction;
        self
    }

    /// Sets the display duration.
    #[must_use]
    pub fn with_duration(mut self, duration: DisplayDuration) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the completion callback, invoked exactly once with the reason
    /// the toast went away.
    #[must_use]
    pub fn on_dismiss(mut self, handler: impl FnOnce(DismissalReason) + 'static) -> Self {
        self.completion = Some(Box::new(handler));
        self
    }

    /// The message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The visual state.
    #[must_use]
    pub fn state(&self) -> &VisualState {
        &self.state
    }

    /// The on-screen location.
    #[must_use]
    pub fn location(&self) -> Location {
        self.location
    }

    /// The layout reference.
    #[must_use]
    pub fn layout_reference(&self) -> LayoutReference {
        self.layout_reference
    }

    /// The entry animation direction.
    #[must_use]
    pub fn presenting_direction(&self) -> Direction {
        self.presenting_direction
    }

    /// The exit animation direction.
    #[must_use]
    pub fn dismissing_direction(&self) -> Direction {
        self.dismissing_direction
    }

    /// The display duration.
    #[must_use]
    pub fn duration(&self) -> DisplayDuration {
        self.duration
    }

    /// The requesting context.
    #[must_use]
    pub fn context(&self) -> ContextId {
        self.context
    }

    /// The reason this toast will report when its lifecycle ends.
    #[must_use]
    pub fn dismissal_reason(&self) -> DismissalReason {
        self.dismissal_reason
    }

    pub(crate) fn set_dismissal_reason(&mut self, reason: DismissalReason) {
        self.dismissal_reason = reason;
    }

    /// Ends the lifecycle: fires the completion callback, if any, with the
    /// current dismissal reason. Consuming `self` makes a second invocation
    /// impossible.
    pub(crate) fn complete(mut self) {
        let reason = self.dismissal_reason;
        if let Some(handler) = self.completion.take() {
            handler(reason);
        }
    }
}

impl fmt::Debug for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toast")
            .field("message", &self.message)
            .field("state", &self.state)
            .field("location", &self.location)
            .field("layout_reference", &self.layout_reference)
            .field("presenting_direction", &self.presenting_direction)
            .field("dismissing_direction", &self.dismissing_direction)
            .field("duration", &self.duration)
            .field("context", &self.context)
            .field("dismissal_reason", &self.dismissal_reason)
            .finish_non_exhaustive()
    }
}
