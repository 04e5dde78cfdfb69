//! Viewport visibility tracking
//!
//! A [`VisibilityTracker`] turns raw intersection reports into a single
//! `visible` flag. The platform facility that produces those reports is
//! abstracted by [`ViewportObserver`], so the browser binding lives in the UI
//! layer and tests can script intersections by hand.
//!
//! Two reveal policies exist:
//! - [`RevealPolicy::Sticky`]: once a region has been seen it stays visible
//! - [`RevealPolicy::Toggle`]: the flag follows every threshold crossing
//!
//! When no observer can be registered the tracker fails open and reports the
//! region as visible, so content is never left hidden.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use leptos::logging::warn;

/// Fraction of a region that must be on screen before it counts as visible
pub const DEFAULT_THRESHOLD: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevealPolicy {
    /// Never hide again after the first reveal
    #[default]
    Sticky,
    /// Hide whenever the region leaves the viewport
    Toggle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityOptions {
    /// Visible fraction in `[0, 1]` that triggers a reveal
    pub threshold: f64,
    pub policy: RevealPolicy,
    /// CSS margin applied around the viewport, e.g. `"0px 0px -50px 0px"`
    pub root_margin: String,
}

impl VisibilityOptions {
    /// Options with the given threshold, clamped to `[0, 1]`.
    /// A NaN threshold falls back to [`DEFAULT_THRESHOLD`].
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            ..Self::default()
        }
    }

    pub fn with_policy(mut self, policy: RevealPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_root_margin(mut self, margin: impl Into<String>) -> Self {
        self.root_margin = margin.into();
        self
    }
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            policy: RevealPolicy::default(),
            root_margin: "0px".to_string(),
        }
    }
}

/// One intersection report for an observed region
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    /// Visible fraction of the region, `0.0..=1.0`
    pub ratio: f64,
    pub intersecting: bool,
}

impl Intersection {
    pub fn entered(ratio: f64) -> Self {
        Self {
            ratio,
            intersecting: true,
        }
    }

    pub fn left() -> Self {
        Self {
            ratio: 0.0,
            intersecting: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VisibilityEvent {
    Intersection(Intersection),
    /// No observer could be registered
    Unavailable,
    /// The owning component went away
    Detached,
}

/// Visibility state for one region
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityTracker {
    visible: bool,
    attached: bool,
    /// Set when the tracker failed open; nothing can hide the region afterwards
    forced: bool,
    policy: RevealPolicy,
    threshold: f64,
}

impl VisibilityTracker {
    pub fn new(options: &VisibilityOptions) -> Self {
        Self {
            visible: false,
            attached: true,
            forced: false,
            policy: options.policy,
            threshold: options.threshold,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    fn meets_threshold(&self, entry: &Intersection) -> bool {
        entry.intersecting && entry.ratio >= self.threshold
    }

    /// Apply an event. Returns `true` if the visible flag changed.
    pub fn handle(&mut self, event: VisibilityEvent) -> bool {
        if !self.attached {
            return false;
        }

        let before = self.visible;
        match event {
            VisibilityEvent::Intersection(entry) => {
                let hit = self.meets_threshold(&entry);
                self.visible = match self.policy {
                    _ if self.forced => true,
                    RevealPolicy::Sticky => self.visible || hit,
                    RevealPolicy::Toggle => hit,
                };
            }
            VisibilityEvent::Unavailable => {
                self.forced = true;
                self.visible = true;
            }
            VisibilityEvent::Detached => {
                self.attached = false;
            }
        }
        before != self.visible
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ObserverError {
    #[error("viewport observation is not supported on this platform")]
    Unsupported,

    #[error("failed to register viewport observer: {0}")]
    Registration(String),
}

/// Callback invoked by an observer for every intersection report
pub type IntersectionCallback = Box<dyn Fn(Intersection)>;

/// Registration guard returned by [`ViewportObserver::observe`].
///
/// Dropping it deregisters the observer; the release action runs at most once.
#[must_use = "dropping an Observation deregisters the observer"]
pub struct Observation {
    release: Option<Box<dyn FnOnce()>>,
}

impl Observation {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Deregister now
    pub fn disconnect(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl std::fmt::Debug for Observation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observation")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Platform capability that reports when a region intersects the viewport
pub trait ViewportObserver {
    /// Handle identifying a rendered region
    type Region;

    /// Register exactly one observation for `region`.
    fn observe(
        &self,
        region: &Self::Region,
        options: &VisibilityOptions,
        on_change: IntersectionCallback,
    ) -> Result<Observation, ObserverError>;
}

/// A region wired to an observer.
///
/// Dropping it detaches the tracker and deregisters the observer, after which
/// late intersection reports are ignored.
#[derive(Debug)]
pub struct TrackedRegion {
    tracker: Rc<RefCell<VisibilityTracker>>,
    observation: Option<Observation>,
}

impl TrackedRegion {
    pub fn is_visible(&self) -> bool {
        self.tracker.borrow().is_visible()
    }

    /// Whether an observer is registered (false after failing open)
    pub fn is_observing(&self) -> bool {
        self.observation.is_some()
    }
}

impl Drop for TrackedRegion {
    fn drop(&mut self) {
        self.tracker.borrow_mut().handle(VisibilityEvent::Detached);
        if let Some(observation) = self.observation.take() {
            observation.disconnect();
        }
    }
}

/// Observe `region` and push every change of its visible flag into `sink`.
///
/// If the observer cannot be registered the region is reported visible
/// immediately.
pub fn track_visibility<O, F>(
    observer: &O,
    region: &O::Region,
    options: &VisibilityOptions,
    sink: F,
) -> TrackedRegion
where
    O: ViewportObserver,
    F: Fn(bool) + 'static,
{
    let tracker = Rc::new(RefCell::new(VisibilityTracker::new(options)));
    let sink = Rc::new(sink);

    let weak: Weak<RefCell<VisibilityTracker>> = Rc::downgrade(&tracker);
    let callback_sink = Rc::clone(&sink);
    let callback: IntersectionCallback = Box::new(move |entry| {
        let Some(tracker) = weak.upgrade() else {
            return;
        };
        let changed = tracker
            .borrow_mut()
            .handle(VisibilityEvent::Intersection(entry));
        if changed {
            let visible = tracker.borrow().is_visible();
            callback_sink(visible);
        }
    });

    let observation = match observer.observe(region, options, callback) {
        Ok(observation) => Some(observation),
        Err(err) => {
            warn!("{err}; revealing region without animation");
            if tracker.borrow_mut().handle(VisibilityEvent::Unavailable) {
                sink(true);
            }
            None
        }
    };

    TrackedRegion {
        tracker,
        observation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sticky() -> VisibilityTracker {
        VisibilityTracker::new(&VisibilityOptions::default())
    }

    fn toggle() -> VisibilityTracker {
        VisibilityTracker::new(&VisibilityOptions::default().with_policy(RevealPolicy::Toggle))
    }

    #[test]
    fn test_options_clamp_threshold() {
        assert_eq!(VisibilityOptions::new(-1.0).threshold, 0.0);
        assert_eq!(VisibilityOptions::new(2.5).threshold, 1.0);
        assert_eq!(VisibilityOptions::new(0.25).threshold, 0.25);
        assert_eq!(VisibilityOptions::new(f64::NAN).threshold, DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_default_options() {
        let options = VisibilityOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.policy, RevealPolicy::Sticky);
        assert_eq!(options.root_margin, "0px");
    }

    #[test]
    fn test_starts_hidden() {
        let tracker = sticky();
        assert!(!tracker.is_visible());
        assert!(tracker.is_attached());
    }

    #[test]
    fn test_below_threshold_stays_hidden() {
        let mut tracker = sticky();
        assert!(!tracker.handle(VisibilityEvent::Intersection(Intersection::entered(0.05))));
        assert!(!tracker.is_visible());
    }

    #[test]
    fn test_threshold_reached_reveals() {
        let mut tracker = sticky();
        assert!(tracker.handle(VisibilityEvent::Intersection(Intersection::entered(0.1))));
        assert!(tracker.is_visible());
    }

    #[test]
    fn test_sticky_never_rehides() {
        let mut tracker = sticky();
        tracker.handle(VisibilityEvent::Intersection(Intersection::entered(1.0)));
        assert!(!tracker.handle(VisibilityEvent::Intersection(Intersection::left())));
        assert!(tracker.is_visible());
    }

    #[test]
    fn test_toggle_follows_crossings() {
        let mut tracker = toggle();
        assert!(tracker.handle(VisibilityEvent::Intersection(Intersection::entered(0.5))));
        assert!(tracker.handle(VisibilityEvent::Intersection(Intersection::left())));
        assert!(!tracker.is_visible());
        assert!(tracker.handle(VisibilityEvent::Intersection(Intersection::entered(0.5))));
        assert!(tracker.is_visible());
    }

    #[test]
    fn test_zero_threshold_any_intersection() {
        let mut tracker = VisibilityTracker::new(&VisibilityOptions::new(0.0));
        tracker.handle(VisibilityEvent::Intersection(Intersection::entered(0.0)));
        assert!(tracker.is_visible());
    }

    #[test]
    fn test_ratio_without_intersecting_flag_is_ignored() {
        let mut tracker = sticky();
        tracker.handle(VisibilityEvent::Intersection(Intersection {
            ratio: 0.9,
            intersecting: false,
        }));
        assert!(!tracker.is_visible());
    }

    #[test]
    fn test_unavailable_fails_open_even_for_toggle() {
        let mut tracker = toggle();
        assert!(tracker.handle(VisibilityEvent::Unavailable));
        tracker.handle(VisibilityEvent::Intersection(Intersection::left()));
        assert!(tracker.is_visible());
    }

    #[test]
    fn test_detached_ignores_everything() {
        let mut tracker = toggle();
        tracker.handle(VisibilityEvent::Detached);
        assert!(!tracker.handle(VisibilityEvent::Intersection(Intersection::entered(1.0))));
        assert!(!tracker.handle(VisibilityEvent::Unavailable));
        assert!(!tracker.is_visible());
        assert!(!tracker.is_attached());
    }

    #[test]
    fn test_observation_releases_once() {
        let count = Rc::new(std::cell::Cell::new(0));
        let counter = Rc::clone(&count);
        let observation = Observation::new(move || counter.set(counter.get() + 1));
        observation.disconnect();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_observation_releases_on_drop() {
        let count = Rc::new(std::cell::Cell::new(0));
        {
            let counter = Rc::clone(&count);
            let _observation = Observation::new(move || counter.set(counter.get() + 1));
        }
        assert_eq!(count.get(), 1);
    }
}
