//! Playback over a generated step sequence.
//!
//! Implements:
//! - Frame scrubbing (forward, back, seek, first, last)
//! - Play/pause state driven by a host clock via [`StepPlayer::advance`]
//! - Memoization of generated sequences by input content
//!
//! Sequences are shared as `Arc<[Step]>` so that a cached sequence and any
//! number of players can read the same frames without copying.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::algorithms::Algorithm;
use crate::error::{VizError, VizResult};
use crate::step::{ArrayElement, Step};

/// Default animation interval between frames.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);

/// Whether the player advances on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    /// Frame only changes on explicit navigation.
    #[default]
    Paused,
    /// Frame advances once per interval.
    Playing,
    /// Reached the last frame while playing.
    Finished,
}

/// Cursor over a step sequence.
#[derive(Debug, Clone)]
pub struct StepPlayer {
    steps: Arc<[Step]>,
    frame: usize,
    state: PlaybackState,
    interval: Duration,
    elapsed: Duration,
}

impl StepPlayer {
    /// Create a paused player at frame 0.
    #[must_use]
    pub fn new(steps: impl Into<Arc<[Step]>>) -> Self {
        Self {
            steps: steps.into(),
            frame: 0,
            state: PlaybackState::Paused,
            interval: DEFAULT_INTERVAL,
            elapsed: Duration::ZERO,
        }
    }

    /// Set the time between frames while playing.
    #[must_use]
    pub const fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether there is nothing to play.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Current frame index.
    #[must_use]
    pub const fn frame(&self) -> usize {
        self.frame
    }

    /// Current playback state.
    #[must_use]
    pub const fn state(&self) -> PlaybackState {
        self.state
    }

    /// Configured interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// The step at the current frame, `None` for an empty sequence.
    #[must_use]
    pub fn current(&self) -> Option<&Step> {
        self.steps.get(self.frame)
    }

    /// Shared handle to the whole sequence.
    #[must_use]
    pub fn steps(&self) -> Arc<[Step]> {
        Arc::clone(&self.steps)
    }

    /// Whether the cursor is on the last frame.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.frame + 1 >= self.steps.len()
    }

    /// Move one frame forward. Returns `false` at the end.
    pub fn step_forward(&mut self) -> bool {
        if self.at_end() {
            return false;
        }
        self.frame += 1;
        true
    }

    /// Move one frame back. Returns `false` at the start.
    pub fn step_back(&mut self) -> bool {
        if self.frame == 0 {
            return false;
        }
        self.frame -= 1;
        if self.state == PlaybackState::Finished {
            self.state = PlaybackState::Paused;
        }
        true
    }

    /// Jump to `frame`.
    ///
    /// # Errors
    ///
    /// Returns `VizError::FrameOutOfRange` if `frame` is past the last step.
    pub fn seek(&mut self, frame: usize) -> VizResult<&Step> {
        let len = self.steps.len();
        let step = self
            .steps
            .get(frame)
            .ok_or(VizError::FrameOutOfRange { frame, len })?;
        self.frame = frame;
        self.elapsed = Duration::ZERO;
        if self.state == PlaybackState::Finished && frame + 1 < len {
            self.state = PlaybackState::Paused;
        }
        Ok(step)
    }

    /// Jump to the first frame.
    pub fn first(&mut self) {
        self.frame = 0;
        self.elapsed = Duration::ZERO;
        if self.state == PlaybackState::Finished {
            self.state = PlaybackState::Paused;
        }
    }

    /// Jump to the last frame.
    pub fn last(&mut self) {
        self.frame = self.steps.len().saturating_sub(1);
        self.elapsed = Duration::ZERO;
    }

    /// Fraction of the sequence shown so far, in `0.0..=1.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        match self.steps.len() {
            0 => 0.0,
            1 => 1.0,
            len => self.frame as f64 / (len - 1) as f64,
        }
    }

    /// Start playing. Restarts from the first frame if already at the end.
    pub fn play(&mut self) {
        if self.steps.is_empty() {
            return;
        }
        if self.at_end() {
            self.frame = 0;
        }
        self.elapsed = Duration::ZERO;
        self.state = PlaybackState::Playing;
    }

    /// Stop advancing.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    /// Play if paused or finished, pause if playing.
    pub fn toggle(&mut self) {
        if self.state == PlaybackState::Playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Feed elapsed wall time while playing.
    ///
    /// Advances one frame per full interval and returns how many frames were
    /// advanced. Reaching the last frame switches to `Finished`.
    pub fn advance(&mut self, delta: Duration) -> usize {
        if self.state != PlaybackState::Playing {
            return 0;
        }
        if self.interval.is_zero() {
            let moved = self.steps.len().saturating_sub(1) - self.frame;
            self.frame += moved;
            self.state = PlaybackState::Finished;
            return moved;
        }

        self.elapsed += delta;
        let mut moved = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            if !self.step_forward() {
                break;
            }
            moved += 1;
        }
        if self.at_end() {
            self.state = PlaybackState::Finished;
            self.elapsed = Duration::ZERO;
        }
        moved
    }
}

/// Content key for a generated sequence.
///
/// Two requests with equal ids, values and target share a sequence even if
/// they come from different input buffers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    algorithm: Algorithm,
    elements: Vec<(String, i64)>,
    target: Option<i64>,
}

impl CacheKey {
    fn new(algorithm: Algorithm, input: &[ArrayElement], target: Option<i64>) -> Self {
        Self {
            algorithm,
            elements: input.iter().map(|e| (e.id.clone(), e.value)).collect(),
            target: if algorithm.is_search() { target } else { None },
        }
    }
}

/// Memoized step generation.
#[derive(Debug, Default)]
pub struct StepCache {
    entries: HashMap<CacheKey, Arc<[Step]>>,
    hits: u64,
    misses: u64,
}

impl StepCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sequence for this request, generating it on first use.
    ///
    /// # Errors
    ///
    /// Propagates generation errors (a search without a target). Failed
    /// requests are not cached.
    pub fn get_or_generate(
        &mut self,
        algorithm: Algorithm,
        input: &[ArrayElement],
        target: Option<i64>,
    ) -> VizResult<Arc<[Step]>> {
        let key = CacheKey::new(algorithm, input, target);
        if let Some(steps) = self.entries.get(&key) {
            self.hits += 1;
            tracing::trace!(algorithm = algorithm.slug(), "step cache hit");
            return Ok(Arc::clone(steps));
        }

        self.misses += 1;
        let steps: Arc<[Step]> = algorithm.steps(input, target)?.into();
        self.entries.insert(key, Arc::clone(&steps));
        Ok(steps)
    }

    /// Number of cached sequences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Requests served from the cache.
    #[must_use]
    pub const fn hits(&self) -> u64 {
        self.hits
    }

    /// Requests that generated a new sequence.
    #[must_use]
    pub const fn misses(&self) -> u64 {
        self.misses
    }

    /// Drop every cached sequence and reset counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::elements_from_values;

    fn player(values: &[i64]) -> StepPlayer {
        let steps = Algorithm::Bubble
            .steps(&elements_from_values(values), None)
            .expect("steps");
        StepPlayer::new(steps).with_interval(Duration::from_millis(100))
    }

    // =========================================================================
    // StepPlayer navigation
    // =========================================================================

    #[test]
    fn test_player_starts_paused_at_first_frame() {
        let p = player(&[3, 1, 2]);
        assert_eq!(p.frame(), 0);
        assert_eq!(p.state(), PlaybackState::Paused);
        assert_eq!(p.current().map(Step::values), Some(vec![3, 1, 2]));
    }

    #[test]
    fn test_step_forward_and_back() {
        let mut p = player(&[3, 1, 2]);
        assert!(!p.step_back());
        assert!(p.step_forward());
        assert_eq!(p.frame(), 1);
        assert!(p.step_back());
        assert_eq!(p.frame(), 0);
    }

    #[test]
    fn test_step_forward_stops_at_end() {
        let mut p = player(&[2, 1]);
        p.last();
        let end = p.frame();
        assert!(!p.step_forward());
        assert_eq!(p.frame(), end);
        assert!(p.current().is_some_and(Step::is_fully_sorted));
    }

    #[test]
    fn test_seek() {
        let mut p = player(&[3, 1, 2]);
        let len = p.len();
        assert!(p.seek(2).is_ok());
        assert_eq!(p.frame(), 2);
        assert!(matches!(
            p.seek(len),
            Err(VizError::FrameOutOfRange { frame, len: l }) if frame == len && l == len
        ));
        assert_eq!(p.frame(), 2);
    }

    #[test]
    fn test_progress() {
        let mut p = player(&[3, 1, 2]);
        assert!((p.progress() - 0.0).abs() < f64::EPSILON);
        p.last();
        assert!((p.progress() - 1.0).abs() < f64::EPSILON);

        let empty = StepPlayer::new(Vec::<Step>::new());
        assert!(empty.current().is_none());
        assert!((empty.progress() - 0.0).abs() < f64::EPSILON);
    }

    // =========================================================================
    // Play / pause
    // =========================================================================

    #[test]
    fn test_advance_only_while_playing() {
        let mut p = player(&[3, 1, 2]);
        assert_eq!(p.advance(Duration::from_secs(1)), 0);
        assert_eq!(p.frame(), 0);
    }

    #[test]
    fn test_advance_one_frame_per_interval() {
        let mut p = player(&[4, 3, 2, 1]);
        p.play();
        assert_eq!(p.advance(Duration::from_millis(50)), 0);
        assert_eq!(p.advance(Duration::from_millis(50)), 1);
        assert_eq!(p.advance(Duration::from_millis(250)), 2);
        assert_eq!(p.frame(), 3);
        assert_eq!(p.state(), PlaybackState::Playing);
    }

    #[test]
    fn test_advance_finishes_at_end() {
        let mut p = player(&[2, 1]);
        let len = p.len();
        p.play();
        p.advance(Duration::from_secs(60));
        assert_eq!(p.frame(), len - 1);
        assert_eq!(p.state(), PlaybackState::Finished);
    }

    #[test]
    fn test_play_from_end_restarts() {
        let mut p = player(&[2, 1]);
        p.last();
        p.play();
        assert_eq!(p.frame(), 0);
        assert_eq!(p.state(), PlaybackState::Playing);
    }

    #[test]
    fn test_toggle() {
        let mut p = player(&[3, 1, 2]);
        p.toggle();
        assert_eq!(p.state(), PlaybackState::Playing);
        p.toggle();
        assert_eq!(p.state(), PlaybackState::Paused);
    }

    #[test]
    fn test_step_back_after_finish_pauses() {
        let mut p = player(&[2, 1]);
        p.play();
        p.advance(Duration::from_secs(60));
        assert!(p.step_back());
        assert_eq!(p.state(), PlaybackState::Paused);
    }

    #[test]
    fn test_zero_interval_jumps_to_end() {
        let mut p = player(&[3, 1, 2]).with_interval(Duration::ZERO);
        p.play();
        p.advance(Duration::ZERO);
        assert!(p.at_end());
        assert_eq!(p.state(), PlaybackState::Finished);
    }

    // =========================================================================
    // StepCache
    // =========================================================================

    #[test]
    fn test_cache_hits_on_equal_content() {
        let mut cache = StepCache::new();
        let a = elements_from_values(&[3, 1, 2]);
        let b = elements_from_values(&[3, 1, 2]);

        let first = cache.get_or_generate(Algorithm::Merge, &a, None).expect("first");
        let second = cache.get_or_generate(Algorithm::Merge, &b, None).expect("second");

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_distinguishes_algorithm_and_target() {
        let mut cache = StepCache::new();
        let input = elements_from_values(&[1, 2, 3]);

        cache.get_or_generate(Algorithm::Merge, &input, None).expect("merge");
        cache.get_or_generate(Algorithm::Quick, &input, None).expect("quick");
        cache
            .get_or_generate(Algorithm::LinearSearch, &input, Some(2))
            .expect("search 2");
        cache
            .get_or_generate(Algorithm::LinearSearch, &input, Some(3))
            .expect("search 3");
        // target is irrelevant for sorts
        cache.get_or_generate(Algorithm::Merge, &input, Some(9)).expect("merge again");

        assert_eq!(cache.len(), 4);
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn test_cache_does_not_store_failures() {
        let mut cache = StepCache::new();
        let input = elements_from_values(&[1, 2, 3]);
        assert!(cache.get_or_generate(Algorithm::BinarySearch, &input, None).is_err());
        assert!(cache.is_empty());
        assert_eq!(cache.misses(), 1);

        cache.clear();
        assert_eq!(cache.misses(), 0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::input::elements_from_values;
    use proptest::prelude::*;

    proptest! {
        /// Frame never leaves the sequence no matter how time is fed.
        #[test]
        fn prop_frame_stays_in_range(
            values in prop::collection::vec(1i64..100, 2..12),
            ticks in prop::collection::vec(0u64..400, 0..40),
        ) {
            let steps = Algorithm::Insertion
                .steps(&elements_from_values(&values), None)
                .unwrap_or_default();
            let mut player = StepPlayer::new(steps).with_interval(Duration::from_millis(100));
            player.play();
            for ms in ticks {
                player.advance(Duration::from_millis(ms));
                prop_assert!(player.frame() < player.len());
            }
        }
    }
}
