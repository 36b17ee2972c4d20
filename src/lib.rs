// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` provides queued, self-dismissing toast notifications.
//!
//! A toast is a short transient message shown over the current screen. This
//! crate owns the part of that problem worth getting right: overlapping show
//! requests are serialized through a FIFO queue, at most one toast is on
//! screen at a time, every request's completion callback fires exactly once
//! with the reason the toast went away, and requests whose originating screen
//! has disappeared are dropped without ever touching the UI.
//!
//! Rendering stays behind two small collaborator traits so the queue logic is
//! independent of any concrete view hierarchy:
//!
//! - [`PresentationSurface`] shows and hides the actual toast view and
//!   answers whether a requesting context is still attached to a visible
//!   screen.
//! - [`DismissalTimer`] schedules the auto-dismiss deadline. [`TokioTimer`]
//!   is a ready-made implementation backed by `tokio::time`.
//!
//! The [`widget`] module provides Iced view and style functions for rendering
//! a presented toast.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod error;
pub mod manager;
pub mod style;
pub mod surface;
pub mod timer;
pub mod toast;
pub mod widget;

pub use error::{Error, Result};
pub use manager::{Event, Manager};
pub use style::{Style, VisualState, Width};
pub use surface::{ContextId, ContextState, PresentationSurface, SurfaceHandle};
pub use timer::{DismissalTimer, TimerToken, TokioTimer};
pub use toast::{
    CompletionHandler, Direction, DismissalReason, DisplayDuration, DropCause, LayoutReference,
    Location, Toast,
};
