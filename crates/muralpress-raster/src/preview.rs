// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Preview supersession — last-request-wins bookkeeping for hosts that
// recompute the filtered preview whenever the source image or filter kind
// changes. The filter itself is pure; this tracker only decides whether a
// finished computation is still the one the user asked for.

use image::RgbaImage;
use tracing::debug;

/// Handle for one preview computation. Only the most recently issued
/// ticket may deliver its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewTicket(u64);

/// Tracks the current preview and discards stale completions.
///
/// There is no cancellation primitive: a superseded computation simply has
/// its delivery refused. A filtered buffer is never exposed until it has
/// been delivered in full.
#[derive(Debug, Default)]
pub struct PreviewTracker {
    latest: u64,
    preview: Option<RgbaImage>,
}

impl PreviewTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new preview computation, superseding any outstanding one.
    pub fn begin(&mut self) -> PreviewTicket {
        self.latest += 1;
        PreviewTicket(self.latest)
    }

    /// Deliver a finished preview. Returns `true` if it was installed,
    /// `false` if the ticket was superseded and the image discarded.
    pub fn deliver(&mut self, ticket: PreviewTicket, image: RgbaImage) -> bool {
        if ticket.0 != self.latest {
            debug!(
                ticket = ticket.0,
                latest = self.latest,
                "Discarding stale preview"
            );
            return false;
        }
        self.preview = Some(image);
        true
    }

    /// The most recently delivered, still-current preview.
    pub fn current(&self) -> Option<&RgbaImage> {
        self.preview.as_ref()
    }

    /// Drop the preview and invalidate all outstanding tickets. Called when
    /// a new source image is loaded; previous previews are never reused.
    pub fn reset(&mut self) {
        self.latest += 1;
        self.preview = None;
    }
}

// -- Tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn marker(value: u8) -> RgbaImage {
        RgbaImage::from_pixel(2, 2, Rgba([value, 0, 0, 255]))
    }

    #[test]
    fn current_ticket_delivers() {
        let mut tracker = PreviewTracker::new();
        let ticket = tracker.begin();

        assert!(tracker.deliver(ticket, marker(1)));
        assert_eq!(tracker.current().unwrap().get_pixel(0, 0).0[0], 1);
    }

    /// A ticket issued before the latest `begin` is stale: its result is
    /// discarded and the current preview untouched.
    #[test]
    fn superseded_ticket_is_discarded() {
        let mut tracker = PreviewTracker::new();
        let old = tracker.begin();
        let new = tracker.begin();

        assert!(tracker.deliver(new, marker(2)));
        assert!(!tracker.deliver(old, marker(1)));
        assert_eq!(tracker.current().unwrap().get_pixel(0, 0).0[0], 2);
    }

    /// Out-of-order completion: the newer request wins even when the older
    /// one finishes last.
    #[test]
    fn late_old_result_never_overwrites_newer() {
        let mut tracker = PreviewTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();

        // Second computation finishes first.
        assert!(tracker.deliver(second, marker(9)));
        // First finishes afterwards; it must be refused.
        assert!(!tracker.deliver(first, marker(3)));
        assert_eq!(tracker.current().unwrap().get_pixel(0, 0).0[0], 9);
    }

    #[test]
    fn reset_clears_preview_and_invalidates_tickets() {
        let mut tracker = PreviewTracker::new();
        let ticket = tracker.begin();
        assert!(tracker.deliver(ticket, marker(4)));

        let in_flight = tracker.begin();
        tracker.reset();

        assert!(tracker.current().is_none());
        assert!(!tracker.deliver(in_flight, marker(5)));
        assert!(tracker.current().is_none());
    }

    #[test]
    fn no_preview_until_first_delivery() {
        let mut tracker = PreviewTracker::new();
        assert!(tracker.current().is_none());
        let _ticket = tracker.begin();
        assert!(tracker.current().is_none());
    }
}
