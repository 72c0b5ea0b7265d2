//! Decorative page effects
//!
//! State for the parts of the page that animate but carry no order logic:
//! the mobile navigation toggle, copy-to-clipboard toasts, the amount
//! counters and the hero typewriter. The renderer drives them with timers.

use std::time::Duration;

/// Interval between counter frames
pub const COUNTER_TICK: Duration = Duration::from_millis(16);

/// Mobile navigation menu (hamburger) state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following a navigation link always collapses the menu
    pub fn follow_link(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// A transient message in the bottom-right corner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

/// Message shown after a successful copy
pub const COPY_OK: &str = "Copied to clipboard!";
/// Message shown when the clipboard is unavailable
pub const COPY_FAILED: &str = "Failed to copy to clipboard";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastStack {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastStack {
    pub fn push(&mut self, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.items.push(Toast {
            id: self.next_id,
            message: message.into(),
        });
        self.next_id
    }

    /// Toast for the result of a clipboard write
    pub fn push_copy_result<E>(&mut self, result: &Result<(), E>) -> u64 {
        match result {
            Ok(()) => self.push(COPY_OK),
            Err(_) => self.push(COPY_FAILED),
        }
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        before != self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Parse a formatted amount such as `"13,000"`
pub fn parse_amount(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(|c| *c != ',').collect();
    digits.trim().parse().ok()
}

/// Format with comma thousands separators
pub fn format_thousands(value: u64) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Counts from zero up to a target over a fixed duration
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: u64, duration: Duration) -> Self {
        let frames = (duration.as_millis() as f64 / COUNTER_TICK.as_millis() as f64).max(1.0);
        Self {
            target,
            increment: target as f64 / frames,
            current: 0.0,
            done: target == 0,
        }
    }

    /// Advance one frame and return the text to display
    pub fn tick(&mut self) -> String {
        if !self.done {
            self.current += self.increment;
            if self.current >= self.target as f64 {
                self.current = self.target as f64;
                self.done = true;
            }
        }
        format_thousands(self.value())
    }

    pub fn value(&self) -> u64 {
        if self.done {
            self.target
        } else {
            self.current.floor() as u64
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

/// Reveals text one character per step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    shown: usize,
}

impl Typewriter {
    pub const START_DELAY: Duration = Duration::from_millis(500);
    pub const STEP: Duration = Duration::from_millis(150);

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown: 0,
        }
    }

    /// Reveal one more character. Returns false once everything is shown.
    pub fn step(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.shown += 1;
        true
    }

    /// The currently visible prefix
    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.shown) {
            Some((idx, _)) => &self.text[..idx],
            None => &self.text,
        }
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_menu() {
        let mut menu = NavMenu::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.follow_link();
        assert!(!menu.is_open());
        menu.follow_link();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_toasts_stack() {
        let mut toasts = ToastStack::default();
        let a = toasts.push_copy_result::<()>(&Ok(()));
        let b = toasts.push_copy_result(&Err("no clipboard"));
        let messages: Vec<_> = toasts.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec![COPY_OK, COPY_FAILED]);
        assert!(toasts.remove(a));
        assert!(toasts.remove(b));
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_amount_formatting() {
        assert_eq!(parse_amount("13,000"), Some(13000));
        assert_eq!(parse_amount("2,450"), Some(2450));
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_counter_reaches_target() {
        let mut counter = CounterAnimation::new(13000, Duration::from_millis(2000));
        let mut frames = 0;
        let mut last = String::new();
        while !counter.is_done() {
            last = counter.tick();
            frames += 1;
            assert!(frames < 1000);
        }
        assert_eq!(last, "13,000");
        assert_eq!(counter.value(), 13000);
        // 2000 ms / 16 ms
        assert!((124..=126).contains(&frames));
    }

    #[test]
    fn test_typewriter_is_char_safe() {
        let mut tw = Typewriter::new("Flash ⚡");
        assert_eq!(tw.visible(), "");
        while tw.step() {
            assert!("Flash ⚡".starts_with(tw.visible()));
        }
        assert_eq!(tw.visible(), "Flash ⚡");
        assert!(!tw.step());
    }
}
