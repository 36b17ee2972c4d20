// SPDX-License-Identifier: MPL-2.0
//! The presentation-side collaborator contract.
//!
//! The queue manager never builds views itself; it hands each toast to a
//! [`PresentationSurface`] and identifies the resulting on-screen instance by
//! a [`SurfaceHandle`]. Requesting screens are identified by a non-owning
//! [`ContextId`] whose liveness the surface answers on demand.

use crate::toast::Toast;
use std::sync::atomic::{AtomicU64, Ordering};

/// Non-owning identifier of the screen or view that requested a toast.
///
/// The embedding mints one `ContextId` per presentable screen and keeps it
/// alongside that screen's state. The manager stores the id only; liveness is
/// resolved through [`PresentationSurface::context_state`] at the moment the
/// request reaches the head of the queue, never earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(u64);

impl ContextId {
    /// Creates a new unique context id.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ContextId {
    fn default() -> Self {
        Self::new()
    }
}

/// Liveness of a requesting context, as reported by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    /// The context exists and is attached to a visible screen.
    Attached,
    /// The context exists but is not attached to a visible screen.
    Detached,
    /// The context no longer exists.
    Released,
}

/// Identifier of one on-screen toast instance, minted by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceHandle(u64);

impl SurfaceHandle {
    /// Creates a new unique surface handle.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for SurfaceHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Rendering collaborator that shows and hides toast views.
///
/// Implementations are UI-layer code: an Iced application, a test double, or
/// anything else that can put a message on screen. The manager guarantees it
/// calls [`begin_dismiss`](Self::begin_dismiss) at most once per handle;
/// implementations must still treat a repeated call as a no-op.
pub trait PresentationSurface {
    /// Reports the liveness of `context`. Queried at dequeue time only.
    fn context_state(&self, context: ContextId) -> ContextState;

    /// Begins the animated entry for `toast` and returns the handle
    /// identifying the on-screen instance.
    fn present(&mut self, toast: &Toast) -> SurfaceHandle;

    /// Begins the animated exit for `handle`.
    ///
    /// Once the exit finishes the embedding must deliver the completion to
    /// [`Manager::dismissal_finished`](crate::Manager::dismissal_finished)
    /// exactly once.
    fn begin_dismiss(&mut self, handle: SurfaceHandle, animated: bool);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_ids_are_unique() {
        assert_ne!(ContextId::new(), ContextId::new());
    }

    #[test]
    fn surface_handles_are_unique() {
        assert_ne!(SurfaceHandle::new(), SurfaceHandle::new());
    }
}
