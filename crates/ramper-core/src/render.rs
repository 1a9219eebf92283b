//! Sub-block rendering at event boundaries.
//!
//! Hosts deliver automation as a list of events, each at a sample offset
//! inside the buffer about to be rendered. Applying them all at the start of
//! the buffer smears their timing by up to a whole block.
//! [`render_with_events`] instead splits the buffer at every event offset,
//! renders each piece through a callback, and applies the events in between,
//! so each ramp starts on the exact sample the host asked for.
//!
//! ```text
//! frame:   0         2               6     8
//!          |---------|---------------|-----|
//! events:            ^ ramp a        ^ set b
//! render:  [0, 2)    [2, 6)          [6, 8)
//! ```

use crate::command::RampEvent;
use crate::params::RampedParameters;
use crate::sample::Sample;
use crate::types::FrameCount;

/// What happened during one [`render_with_events`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    /// Number of times the render callback ran.
    pub segments: usize,
    /// Events that reached a parameter.
    pub applied: usize,
    /// Events addressed to unknown parameters.
    pub unknown: usize,
}

/// Render `frame_count` frames, applying `events` at their sample offsets.
///
/// `render(params, start, len)` is called for each event-free run of frames
/// `[start, start + len)`; `len` is never zero. Inside the callback the
/// caller consumes parameter values per sample with
/// [`get_step()`](crate::RampedParameter::get_step), or advances the
/// parameters it did not read with
/// [`step_all_by()`](RampedParameters::step_all_by).
///
/// Events should be sorted by `sample_offset`. An event whose offset has
/// already been passed is applied at the current position; events at or
/// past `frame_count` are applied after the last segment, so they take
/// effect from the start of the next buffer.
pub fn render_with_events<S, P, F>(
    params: &mut P,
    frame_count: FrameCount,
    events: &[RampEvent],
    mut render: F,
) -> RenderSummary
where
    S: Sample,
    P: RampedParameters<S> + ?Sized,
    F: FnMut(&mut P, FrameCount, FrameCount),
{
    let mut summary = RenderSummary::default();
    let mut pending = events.iter().peekable();
    let mut cursor: FrameCount = 0;

    while cursor < frame_count {
        while let Some(event) = pending.next_if(|event| event.sample_offset <= cursor) {
            apply_event(params, event, &mut summary);
        }

        let next = pending
            .peek()
            .map_or(frame_count, |event| event.sample_offset.min(frame_count));
        render(params, cursor, next - cursor);
        summary.segments += 1;
        cursor = next;
    }

    for event in pending {
        apply_event(params, event, &mut summary);
    }

    if summary.unknown > 0 {
        log::warn!(
            "Discarded {} ramp events for unknown parameters",
            summary.unknown
        );
    }
    summary
}

#[inline]
fn apply_event<S, P>(params: &mut P, event: &RampEvent, summary: &mut RenderSummary)
where
    S: Sample,
    P: RampedParameters<S> + ?Sized,
{
    if params.apply(&event.command) {
        summary.applied += 1;
    } else {
        summary.unknown += 1;
    }
}
