// SPDX-License-Identifier: MPL-2.0
//! Toast presentation queue and lifecycle management.
//!
//! The [`Manager`] serializes overlapping show requests: it owns a FIFO
//! queue of pending [`Toast`]s and a single active-presentation slot. At
//! most one toast is on screen at a time; whenever a presentation ends, the
//! queue drains into the next valid request without an external trigger.
//!
//! All methods are synchronous and non-blocking, intended for a
//! single-threaded event loop. Asynchronous happenings (a timer firing, a
//! tap, the surface finishing its exit animation) re-enter the manager
//! through [`timer_fired`](Manager::timer_fired),
//! [`tapped`](Manager::tapped), and
//! [`dismissal_finished`](Manager::dismissal_finished) — or through
//! [`handle_event`](Manager::handle_event) for message-driven embeddings.
//! Dismissal triggers race; whichever arrives first wins, and the others
//! become no-ops.

use std::collections::VecDeque;

use log::{debug, trace};

use crate::error::Result;
use crate::surface::{ContextId, ContextState, PresentationSurface, SurfaceHandle};
use crate::timer::{DismissalTimer, TimerToken};
use crate::toast::{DismissalReason, DropCause, Toast};

/// Asynchronous happenings routed back into the manager by the embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A dismissal deadline elapsed.
    TimerFired(TimerToken),
    /// The user tapped the presented toast.
    Tapped(SurfaceHandle),
    /// The surface finished its exit animation.
    DismissalFinished(SurfaceHandle),
}

/// The toast currently on screen.
struct Active {
    toast: Toast,
    handle: SurfaceHandle,
    token: TimerToken,
    /// Set the instant a dismissal trigger wins; every later trigger is a
    /// no-op, so the surface's dismissal entry point is invoked at most once.
    dismissing: bool,
}

/// Serializes toast presentation over an injected surface and timer.
///
/// Construct one per embedding and keep it wherever the embedding keeps
/// long-lived state; tests instantiate isolated managers freely.
pub struct Manager<S, T> {
    surface: S,
    timer: T,
    queue: VecDeque<Toast>,
    active: Option<Active>,
    token_counter: u64,
}

impl<S: PresentationSurface, T: DismissalTimer> Manager<S, T> {
    /// Creates an idle manager around the given collaborators.
    pub fn new(surface: S, timer: T) -> Self {
        Self {
            surface,
            timer,
            queue: VecDeque::new(),
            active: None,
            token_counter: 0,
        }
    }

    /// Enqueues `toast` and presents it immediately if nothing else is on
    /// screen.
    ///
    /// Returns [`Error::InvalidDuration`](crate::Error::InvalidDuration) for
    /// a zero-length display duration; the toast is not enqueued and its
    /// completion callback is not invoked.
    pub fn show(&mut self, toast: Toast) -> Result<()> {
        toast.duration().validate()?;
        self.queue.push_back(toast);
        self.attempt_present();
        Ok(())
    }

    /// Explicitly dismisses the active toast, if it belongs to `context`.
    ///
    /// A no-op when nothing is presenting, when the active toast was
    /// requested by a different context, or when a dismissal is already
    /// underway.
    pub fn dismiss(&mut self, context: ContextId, animated: bool) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        if active.toast.context() != context || active.dismissing {
            return;
        }

        active.toast.set_dismissal_reason(DismissalReason::Programmatically);
        active.dismissing = true;
        let handle = active.handle;
        debug!("dismissing toast programmatically (handle {handle:?})");
        self.surface.begin_dismiss(handle, animated);
    }

    /// Delivers an elapsed dismissal deadline.
    ///
    /// Stray tokens — from a presentation that already ended, or delivered
    /// after another trigger won — are ignored.
    pub fn timer_fired(&mut self, token: TimerToken) {
        let Some(active) = self.active.as_mut() else {
            trace!("timer {token:?} fired while idle; ignoring");
            return;
        };
        if active.token != token || active.dismissing {
            trace!("timer {token:?} fired for an ended presentation; ignoring");
            return;
        }

        active.toast.set_dismissal_reason(DismissalReason::TimedOut);
        active.dismissing = true;
        let handle = active.handle;
        debug!("toast timed out (handle {handle:?})");
        self.surface.begin_dismiss(handle, true);
    }

    /// Delivers a tap on the presented toast.
    pub fn tapped(&mut self, handle: SurfaceHandle) {
        let Some(active) = self.active.as_mut() else {
            trace!("tap on {handle:?} while idle; ignoring");
            return;
        };
        if active.handle != handle || active.dismissing {
            trace!("tap on {handle:?} for an ended presentation; ignoring");
            return;
        }

        active.toast.set_dismissal_reason(DismissalReason::Tapped);
        active.dismissing = true;
        debug!("toast tapped (handle {handle:?})");
        self.surface.begin_dismiss(handle, true);
    }

    /// Delivers the surface's exit-animation completion, regardless of which
    /// trigger started the dismissal.
    ///
    /// Fires the toast's completion callback with the reason recorded when
    /// the winning trigger arrived, then drains the queue.
    pub fn dismissal_finished(&mut self, handle: SurfaceHandle) {
        let Some(active) = self.active.take_if(|active| active.handle == handle) else {
            trace!("dismissal completion for unknown handle {handle:?}; ignoring");
            return;
        };

        self.timer.cancel(active.token);
        debug!(
            "toast dismissed (handle {handle:?}, reason {:?})",
            active.toast.dismissal_reason()
        );
        active.toast.complete();
        self.attempt_present();
    }

    /// Dispatches an [`Event`] to the matching delivery method.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::TimerFired(token) => self.timer_fired(token),
            Event::Tapped(handle) => self.tapped(handle),
            Event::DismissalFinished(handle) => self.dismissal_finished(handle),
        }
    }

    /// Whether a toast is currently on screen.
    #[must_use]
    pub fn is_presenting(&self) -> bool {
        self.active.is_some()
    }

    /// Number of requests waiting behind the active toast.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// The injected presentation surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the injected presentation surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The injected dismissal timer.
    #[must_use]
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Pulls requests off the queue until one presents or the queue runs
    /// dry.
    ///
    /// Requests whose context is gone are completed with a `Dropped` reason
    /// and never touch the surface; the loop keeps going because several
    /// stale requests may sit in the queue consecutively.
    fn attempt_present(&mut self) {
        while self.active.is_none() {
            let Some(mut toast) = self.queue.pop_front() else {
                return;
            };

            let cause = match self.surface.context_state(toast.context()) {
                ContextState::Attached => None,
                ContextState::Detached => Some(DropCause::ContextDetached),
                ContextState::Released => Some(DropCause::ContextReleased),
            };
            if let Some(cause) = cause {
                debug!("dropping queued toast: {cause}");
                toast.set_dismissal_reason(DismissalReason::Dropped(cause));
                toast.complete();
                continue;
            }

            let token = self.next_timer_token();
            let delay = toast.duration().length();
            let handle = self.surface.present(&toast);
            self.timer.schedule_after(delay, token);
            debug!("presenting toast (handle {handle:?}, ttl {delay:?})");
            self.active = Some(Active {
                toast,
                handle,
                token,
                dismissing: false,
            });
        }
    }

    fn next_timer_token(&mut self) -> TimerToken {
        self.token_counter += 1;
        TimerToken::new(self.token_counter)
    }
}
