use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Works,
    About,
    Contact,
    Hire,
}

impl Section {
    /// Page order. Navigation wraps from the last entry back to the first.
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Works,
        Self::About,
        Self::Contact,
        Self::Hire,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::Works => 1,
            Self::About => 2,
            Self::Contact => 3,
            Self::Hire => 4,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Works => "works",
            Self::About => "about",
            Self::Contact => "contact",
            Self::Hire => "hire",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Works => "Works",
            Self::About => "About",
            Self::Contact => "Contact",
            Self::Hire => "Hire",
        }
    }

    /// Neighbour in `direction`, wrapping at both ends.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let len = Self::ALL.len();
        let next = match direction {
            Direction::Forward => (self.index() + 1) % len,
            Direction::Backward => (self.index() + len - 1) % len,
        };
        Self::ALL[next]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown section '{s}'"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Blocks further wheel-driven transitions until a deadline passes.
///
/// Arming replaces any earlier deadline; `release` drops it immediately.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    until: Option<Instant>,
}

impl ScrollLock {
    pub fn arm(&mut self, now: Instant, cooldown: Duration) {
        self.until = Some(now + cooldown);
    }

    /// Returns whether the lock is still held at `now`, clearing it once expired.
    pub fn is_held(&mut self, now: Instant) -> bool {
        match self.until {
            Some(deadline) if now < deadline => true,
            Some(_) => {
                self.until = None;
                false
            }
            None => false,
        }
    }

    pub const fn release(&mut self) {
        self.until = None;
    }

    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.until.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavThresholds {
    pub wheel: f64,
    pub swipe: f64,
    pub cooldown: Duration,
}

impl Default for NavThresholds {
    fn default() -> Self {
        Self {
            wheel: 50.0,
            swipe: 50.0,
            cooldown: Duration::from_millis(800),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Navigator {
    active: Section,
    lock: ScrollLock,
    thresholds: NavThresholds,
    touch_start_y: Option<f64>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Section::Home, NavThresholds::default())
    }
}

impl Navigator {
    #[must_use]
    pub fn new(start: Section, thresholds: NavThresholds) -> Self {
        Self {
            active: start,
            lock: ScrollLock::default(),
            thresholds,
            touch_start_y: None,
        }
    }

    #[must_use]
    pub const fn active(&self) -> Section {
        self.active
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.active.index()
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.active == Section::ALL[0]
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.active == Section::ALL[Section::ALL.len() - 1]
    }

    pub fn set_active(&mut self, section: Section) {
        if self.active != section {
            tracing::debug!(from = %self.active, to = %section, "section changed");
        }
        self.active = section;
    }

    pub fn advance(&mut self, direction: Direction) -> Section {
        let next = self.active.step(direction);
        self.set_active(next);
        next
    }

    /// Feeds one wheel event. Returns the new section when a transition happened.
    pub fn on_wheel(&mut self, delta_y: f64, now: Instant) -> Option<Section> {
        if self.lock.is_held(now) {
            tracing::debug!(delta_y, "wheel ignored while locked");
            return None;
        }

        let direction = if delta_y > self.thresholds.wheel {
            Direction::Forward
        } else if delta_y < -self.thresholds.wheel {
            Direction::Backward
        } else {
            return None;
        };

        self.lock.arm(now, self.thresholds.cooldown);
        Some(self.advance(direction))
    }

    pub fn on_arrow(&mut self, direction: Direction) -> Section {
        self.advance(direction)
    }

    pub const fn on_touch_start(&mut self, y: f64) {
        self.touch_start_y = Some(y);
    }

    /// Completes a swipe. Upward swipes (start below end) move forward.
    pub fn on_touch_end(&mut self, y: f64) -> Option<Section> {
        let start = self.touch_start_y.take()?;
        let delta = start - y;
        if delta.abs() <= self.thresholds.swipe {
            return None;
        }
        let direction = if delta > 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        };
        Some(self.advance(direction))
    }

    /// Forgets a pending swipe start so the next release cannot complete it.
    pub const fn cancel_touch(&mut self) {
        self.touch_start_y = None;
    }

    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.lock.is_armed()
    }

    /// Drops any pending lock so no stale deadline outlives the page.
    pub const fn teardown(&mut self) {
        self.lock.release();
        self.cancel_touch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_wraps_in_both_directions() {
        for (i, section) in Section::ALL.into_iter().enumerate() {
            let fwd = section.step(Direction::Forward);
            let back = section.step(Direction::Backward);
            assert_eq!(fwd.index(), (i + 1) % 5);
            assert_eq!(back.index(), (i + 4) % 5);
        }
        assert_eq!(Section::Hire.step(Direction::Forward), Section::Home);
        assert_eq!(Section::Home.step(Direction::Backward), Section::Hire);
    }

    #[test]
    fn starts_at_home() {
        let nav = Navigator::default();
        assert_eq!(nav.active(), Section::Home);
        assert!(nav.is_first());
        assert!(!nav.is_last());
    }

    #[test]
    fn parses_section_names() {
        assert_eq!("works".parse::<Section>(), Ok(Section::Works));
        assert_eq!(" HIRE ".parse::<Section>(), Ok(Section::Hire));
        assert!("blog".parse::<Section>().is_err());
    }

    #[test]
    fn rapid_wheel_events_move_once() {
        let mut nav = Navigator::default();
        let t0 = Instant::now();
        assert_eq!(nav.on_wheel(120.0, t0), Some(Section::Works));
        assert_eq!(nav.on_wheel(120.0, t0 + Duration::from_millis(300)), None);
        assert_eq!(nav.on_wheel(-120.0, t0 + Duration::from_millis(799)), None);
        assert_eq!(nav.active(), Section::Works);
    }

    #[test]
    fn wheel_unlocks_after_cooldown() {
        let mut nav = Navigator::default();
        let t0 = Instant::now();
        nav.on_wheel(-80.0, t0);
        assert_eq!(nav.active(), Section::Hire);
        assert_eq!(
            nav.on_wheel(-80.0, t0 + Duration::from_millis(800)),
            Some(Section::Contact)
        );
    }

    #[test]
    fn small_wheel_delta_is_ignored_without_locking() {
        let mut nav = Navigator::default();
        let t0 = Instant::now();
        assert_eq!(nav.on_wheel(50.0, t0), None);
        assert_eq!(nav.on_wheel(-50.0, t0), None);
        assert!(!nav.is_locked());
        assert_eq!(nav.on_wheel(51.0, t0), Some(Section::Works));
    }

    #[test]
    fn arrows_bypass_wheel_lock() {
        let mut nav = Navigator::default();
        let t0 = Instant::now();
        nav.on_wheel(100.0, t0);
        assert_eq!(nav.on_arrow(Direction::Forward), Section::About);
        assert_eq!(nav.on_arrow(Direction::Backward), Section::Works);
    }

    #[test]
    fn swipe_needs_more_than_threshold() {
        let mut nav = Navigator::default();
        nav.on_touch_start(400.0);
        assert_eq!(nav.on_touch_end(350.0), None);

        nav.on_touch_start(400.0);
        assert_eq!(nav.on_touch_end(300.0), Some(Section::Works));

        nav.on_touch_start(300.0);
        assert_eq!(nav.on_touch_end(400.0), Some(Section::Home));
    }

    #[test]
    fn touch_end_without_start_is_ignored() {
        let mut nav = Navigator::default();
        assert_eq!(nav.on_touch_end(10.0), None);
        assert_eq!(nav.active(), Section::Home);
    }

    #[test]
    fn cancelled_touch_cannot_complete_a_swipe() {
        let mut nav = Navigator::default();
        nav.on_touch_start(400.0);
        nav.cancel_touch();
        assert_eq!(nav.on_touch_end(100.0), None);
        assert_eq!(nav.active(), Section::Home);
    }

    #[test]
    fn teardown_releases_lock() {
        let mut nav = Navigator::default();
        let t0 = Instant::now();
        nav.on_wheel(100.0, t0);
        assert!(nav.is_locked());
        nav.teardown();
        assert!(!nav.is_locked());
        assert_eq!(
            nav.on_wheel(100.0, t0 + Duration::from_millis(10)),
            Some(Section::About)
        );
    }
}
