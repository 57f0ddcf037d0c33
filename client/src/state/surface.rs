//! Video surface load tracking.
//!
//! The stream image can fire `load` more than once for the same `src`
//! (multipart streams in some browsers re-fire per part), or only once.
//! Bounds are reported to the page once per load generation; a new
//! generation starts whenever the image is (re)attached, and retiring the
//! image ends the current one so pending measurements stop.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use crate::util::rect::SurfaceBounds;

/// Animation frames to keep re-measuring a loaded surface that still
/// reports a zero size (about two seconds at 60 Hz).
pub const MAX_MEASURE_FRAMES: u32 = 120;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceLoad {
    generation: u64,
    loaded: bool,
    reported: bool,
}

impl SurfaceLoad {
    /// Start a new load generation and return its id.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.loaded = false;
        self.reported = false;
        self.generation
    }

    /// End the current generation without starting a usable one.
    pub fn retire(&mut self) {
        self.begin();
    }

    /// True while `generation` has loaded but its bounds are not reported yet.
    pub fn awaiting_report(&self, generation: u64) -> bool {
        generation == self.generation && self.loaded && !self.reported
    }

    /// Record a `load` event for `generation`. Stale generations are ignored.
    pub fn mark_loaded(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loaded = true;
        true
    }

    /// Next measurement attempt number, or `None` when measuring should stop:
    /// the bounds were reported, the generation is stale, or the frame
    /// budget is spent.
    pub fn next_attempt(&self, generation: u64, attempt: u32) -> Option<u32> {
        (self.awaiting_report(generation) && attempt < MAX_MEASURE_FRAMES).then_some(attempt + 1)
    }

    /// Decide whether a measurement should be reported to the page.
    ///
    /// Reports at most once per generation, and never for a zero-sized
    /// measurement. The caller re-measures on a later frame while
    /// [`SurfaceLoad::awaiting_report`] holds.
    pub fn take_report(&mut self, generation: u64, width: f64, height: f64) -> Option<SurfaceBounds> {
        if !self.awaiting_report(generation) {
            return None;
        }
        let bounds = SurfaceBounds::new(width, height)?;
        self.reported = true;
        Some(bounds)
    }
}
