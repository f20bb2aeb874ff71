use crate::carousel::Carousel;
use crate::config::{Config, PracticeConfig, ViewportConfig};
use crate::form::{CONFIRMATION, Field, IntakeForm};
use crate::section::{Direction, Navigator, Section};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Focus targets on the hire form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(Field),
    Service(usize),
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Confirmation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug)]
pub struct App {
    pub navigator: Navigator,
    pub carousel: Carousel,
    pub form: IntakeForm,
    pub practice: PracticeConfig,
    pub services: Vec<String>,
    pub viewport: ViewportConfig,
    pub nav_open: bool,
    pub nav_cursor: usize,
    pub window_width: u32,
    pub scroll_offset: u16,
    pub input_mode: InputMode,
    pub focus: FormFocus,
    pub notification: Option<Notification>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default(), Section::Home)
    }
}

impl App {
    #[must_use]
    pub fn new(config: Config, start: Section) -> Self {
        Self {
            navigator: Navigator::new(start, config.navigation.thresholds()),
            carousel: Carousel::new(config.works),
            form: IntakeForm::new(),
            practice: config.practice,
            services: config.services,
            viewport: config.viewport,
            nav_open: false,
            nav_cursor: start.index(),
            window_width: 0,
            scroll_offset: 0,
            input_mode: InputMode::Normal,
            focus: FormFocus::Field(Field::Name),
            notification: None,
        }
    }

    #[must_use]
    pub const fn active_section(&self) -> Section {
        self.navigator.active()
    }

    // --- Viewport ---

    pub fn on_resize(&mut self, columns: u16) {
        self.window_width = u32::from(columns) * self.viewport.cell_width_px;
        if self.window_width >= self.viewport.desktop_breakpoint {
            self.nav_open = false;
        }
    }

    #[must_use]
    pub const fn is_desktop(&self) -> bool {
        self.window_width >= self.viewport.desktop_breakpoint
    }

    #[must_use]
    pub const fn is_narrow(&self) -> bool {
        self.window_width < self.viewport.mobile_breakpoint
    }

    pub const fn scroll_content(&mut self, up: bool) {
        self.scroll_offset = if up {
            self.scroll_offset.saturating_sub(1)
        } else {
            self.scroll_offset.saturating_add(1)
        };
    }

    // --- Navigation ---

    pub const fn toggle_nav(&mut self) {
        self.nav_open = !self.nav_open;
        if self.nav_open {
            self.nav_cursor = self.navigator.index();
        }
    }

    pub fn set_active_section(&mut self, section: Section) {
        self.navigator.set_active(section);
        self.section_changed();
    }

    pub fn on_cta_click(&mut self) {
        self.set_active_section(Section::Hire);
    }

    pub fn nav_move(&mut self, direction: Direction) {
        self.nav_cursor = Section::ALL[self.nav_cursor].step(direction).index();
    }

    pub fn nav_confirm(&mut self) {
        self.set_active_section(Section::ALL[self.nav_cursor]);
    }

    /// Wheel scroll; `delta_y` is in pixels, positive meaning down.
    pub fn on_wheel(&mut self, delta_y: f64, now: Instant) {
        if self.nav_open {
            return;
        }
        if self.navigator.on_wheel(delta_y, now).is_some() {
            self.section_changed();
        }
    }

    pub fn on_arrow(&mut self, direction: Direction) {
        if self.nav_open {
            return;
        }
        self.navigator.on_arrow(direction);
        self.section_changed();
    }

    pub fn on_wheel_ticks(&mut self, ticks: i32, now: Instant) {
        let delta = f64::from(ticks) * f64::from(self.viewport.wheel_delta_per_tick);
        self.on_wheel(delta, now);
    }

    pub fn on_touch_start(&mut self, row: u16) {
        let y = f64::from(row) * f64::from(self.viewport.cell_height_px);
        self.navigator.on_touch_start(y);
    }

    pub fn on_touch_end(&mut self, row: u16) {
        let y = f64::from(row) * f64::from(self.viewport.cell_height_px);
        if self.navigator.on_touch_end(y).is_some() {
            self.section_changed();
        }
    }

    fn section_changed(&mut self) {
        self.nav_open = false;
        self.scroll_offset = 0;
        if self.active_section() != Section::Hire && self.input_mode == InputMode::Editing {
            self.stop_editing();
        }
    }

    #[must_use]
    pub const fn current_section_index(&self) -> usize {
        self.navigator.index()
    }

    #[must_use]
    pub fn is_first_section(&self) -> bool {
        self.navigator.is_first()
    }

    #[must_use]
    pub fn is_last_section(&self) -> bool {
        self.navigator.is_last()
    }

    /// The call-to-action is highlighted everywhere but the first and last sections.
    #[must_use]
    pub fn is_cta_active(&self) -> bool {
        !self.is_first_section() && !self.is_last_section()
    }

    // --- Form ---

    pub fn start_editing(&mut self) {
        if self.active_section() != Section::Hire {
            return;
        }
        self.input_mode = InputMode::Editing;
        self.focus = FormFocus::Field(Field::Name);
        self.form.focus(Field::Name);
    }

    pub fn stop_editing(&mut self) {
        self.leave_focus();
        self.input_mode = InputMode::Normal;
    }

    fn focus_order(&self) -> Vec<FormFocus> {
        let mut order = vec![
            FormFocus::Field(Field::Name),
            FormFocus::Field(Field::Email),
        ];
        order.extend((0..self.services.len()).map(FormFocus::Service));
        order.push(FormFocus::Submit);
        order
    }

    pub fn focus_step(&mut self, direction: Direction) {
        let order = self.focus_order();
        let len = order.len();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = match direction {
            Direction::Forward => (current + 1) % len,
            Direction::Backward => (current + len - 1) % len,
        };
        self.leave_focus();
        self.focus = order[next];
        if let FormFocus::Field(field) = self.focus {
            self.form.focus(field);
        }
    }

    fn leave_focus(&mut self) {
        if let FormFocus::Field(field) = self.focus {
            self.form.blur(field);
            if self.is_narrow() {
                self.scroll_offset = 0;
            }
        }
    }

    pub fn type_char(&mut self, c: char) {
        match self.focus {
            FormFocus::Field(field) => self.form.push_char(field, c),
            FormFocus::Service(_) if c == ' ' => self.toggle_focused_service(),
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        if let FormFocus::Field(field) = self.focus {
            self.form.pop_char(field);
        }
    }

    pub fn toggle_focused_service(&mut self) {
        if let FormFocus::Service(i) = self.focus
            && let Some(service) = self.services.get(i)
        {
            self.form.toggle_service(service);
        }
    }

    pub fn submit_form(&mut self) {
        match self.form.submit() {
            Ok(_) => {
                self.notify(NoticeKind::Confirmation, CONFIRMATION.to_string());
                self.stop_editing();
                self.focus = FormFocus::Field(Field::Name);
            }
            Err(e) => self.notify(NoticeKind::Error, e.to_string()),
        }
    }

    // --- Notifications ---

    fn notify(&mut self, kind: NoticeKind, message: String) {
        self.notification = Some(Notification { kind, message });
    }

    /// Mouse input is dropped while a notification shows, so a drag begun
    /// before it cannot be finished after it.
    pub fn dismiss_notification(&mut self) {
        self.notification = None;
        self.navigator.cancel_touch();
    }

    #[must_use]
    pub const fn is_blocked(&self) -> bool {
        self.notification.is_some()
    }

    // --- Lifecycle ---

    pub const fn teardown(&mut self) {
        self.navigator.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn app() -> App {
        let mut app = App::default();
        app.on_resize(80);
        app
    }

    fn fill_form(app: &mut App) {
        app.set_active_section(Section::Hire);
        app.start_editing();
        for c in "Ada".chars() {
            app.type_char(c);
        }
        app.focus_step(Direction::Forward);
        for c in "ada@example.com".chars() {
            app.type_char(c);
        }
    }

    #[test]
    fn resize_to_desktop_closes_nav() {
        let mut app = app();
        app.toggle_nav();
        assert!(app.nav_open);

        app.on_resize(100);
        assert_eq!(app.window_width, 800);
        assert!(app.nav_open);

        app.on_resize(128);
        assert_eq!(app.window_width, 1024);
        assert!(!app.nav_open);
    }

    #[test]
    fn selecting_a_section_closes_nav() {
        let mut app = app();
        app.toggle_nav();
        app.set_active_section(Section::About);
        assert_eq!(app.active_section(), Section::About);
        assert!(!app.nav_open);
    }

    #[test]
    fn nav_overlay_cursor_wraps_and_confirms() {
        let mut app = app();
        app.toggle_nav();
        app.nav_move(Direction::Backward);
        app.nav_confirm();
        assert_eq!(app.active_section(), Section::Hire);
    }

    #[test]
    fn cta_jumps_to_hire() {
        let mut app = app();
        app.on_cta_click();
        assert_eq!(app.active_section(), Section::Hire);
    }

    #[test]
    fn cta_inactive_on_first_and_last() {
        let mut app = app();
        assert!(!app.is_cta_active());
        app.set_active_section(Section::About);
        assert!(app.is_cta_active());
        app.set_active_section(Section::Hire);
        assert!(!app.is_cta_active());
    }

    #[test]
    fn wheel_and_keys_ignored_while_nav_open() {
        let mut app = app();
        app.toggle_nav();
        app.on_wheel(200.0, Instant::now());
        app.on_arrow(Direction::Forward);
        assert_eq!(app.active_section(), Section::Home);
        assert!(!app.navigator.is_locked());
    }

    #[test]
    fn swipe_still_works_while_nav_open() {
        let mut app = app();
        app.toggle_nav();
        app.on_touch_start(30);
        app.on_touch_end(20);
        assert_eq!(app.active_section(), Section::Works);
        assert!(!app.nav_open);
    }

    #[test]
    fn short_swipe_is_ignored() {
        let mut app = app();
        app.on_touch_start(10);
        app.on_touch_end(7);
        assert_eq!(app.active_section(), Section::Home);
    }

    #[test]
    fn wheel_ticks_are_debounced() {
        let mut app = app();
        let t0 = Instant::now();
        app.on_wheel_ticks(1, t0);
        app.on_wheel_ticks(1, t0 + Duration::from_millis(100));
        assert_eq!(app.active_section(), Section::Works);
        app.on_wheel_ticks(-1, t0 + Duration::from_millis(900));
        assert_eq!(app.active_section(), Section::Home);
    }

    #[test]
    fn invalid_submit_shows_error_and_keeps_data() {
        let mut app = app();
        fill_form(&mut app);
        app.submit_form();

        let notice = app.notification.clone().expect("notification");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, "Please select at least one therapy service");
        assert_eq!(app.form.data.name, "Ada");
        assert_eq!(app.input_mode, InputMode::Editing);
    }

    #[test]
    fn valid_submit_confirms_and_resets() {
        let mut app = app();
        fill_form(&mut app);
        app.focus_step(Direction::Forward);
        app.type_char(' ');
        assert_eq!(app.form.data.services.len(), 1);

        app.submit_form();
        let notice = app.notification.clone().expect("notification");
        assert_eq!(notice.kind, NoticeKind::Confirmation);
        assert_eq!(notice.message, CONFIRMATION);
        assert!(app.form.data.name.is_empty());
        assert!(app.form.data.services.is_empty());
        assert_eq!(app.input_mode, InputMode::Normal);

        app.dismiss_notification();
        assert!(!app.is_blocked());
    }

    #[test]
    fn focus_order_wraps() {
        let mut app = app();
        app.set_active_section(Section::Hire);
        app.start_editing();
        app.focus_step(Direction::Backward);
        assert_eq!(app.focus, FormFocus::Submit);
        app.focus_step(Direction::Forward);
        assert_eq!(app.focus, FormFocus::Field(Field::Name));
    }

    #[test]
    fn editing_only_starts_on_hire() {
        let mut app = app();
        app.start_editing();
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn leaving_hire_ends_editing() {
        let mut app = app();
        app.set_active_section(Section::Hire);
        app.start_editing();
        app.on_touch_start(0);
        app.on_touch_end(10);
        assert_eq!(app.active_section(), Section::Contact);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn blur_on_narrow_viewport_scrolls_to_top() {
        let mut app = app();
        assert!(app.is_narrow());
        app.set_active_section(Section::Hire);
        app.start_editing();
        app.scroll_offset = 4;
        app.focus_step(Direction::Forward);
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn dismissing_notification_drops_pending_swipe() {
        let mut app = app();
        app.set_active_section(Section::Hire);
        app.on_touch_start(30);
        app.start_editing();
        app.submit_form();
        assert!(app.is_blocked());

        app.dismiss_notification();
        app.on_touch_end(5);
        assert_eq!(app.active_section(), Section::Hire);
    }

    #[test]
    fn teardown_releases_wheel_lock() {
        let mut app = app();
        app.on_wheel(100.0, Instant::now());
        assert!(app.navigator.is_locked());
        app.teardown();
        assert!(!app.navigator.is_locked());
    }
}
