//! Mood window: the last seven per-session sentiment signals.
//!
//! Fixed-size ring buffer with a single "oldest slot" pointer. The window
//! never grows or shrinks; `shift` overwrites the oldest slot and advances
//! the pointer.

use serde::{Deserialize, Serialize};

pub const MOOD_WINDOW_LEN: usize = 7;

/// Sentiment of one completed focus session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Mood {
    Down,
    #[default]
    Flat,
    Up,
}

impl Mood {
    /// Session length decides the signal: >=25 up, >=10 flat, else down.
    pub fn from_session_minutes(minutes: u32) -> Self {
        if minutes >= 25 {
            Mood::Up
        } else if minutes >= 10 {
            Mood::Flat
        } else {
            Mood::Down
        }
    }

    pub fn value(&self) -> i8 {
        match self {
            Mood::Down => -1,
            Mood::Flat => 0,
            Mood::Up => 1,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mood::Down => '_',
            Mood::Flat => '-',
            Mood::Up => '^',
        }
    }
}

impl From<Mood> for i8 {
    fn from(m: Mood) -> i8 {
        m.value()
    }
}

impl TryFrom<i8> for Mood {
    type Error = String;

    fn try_from(v: i8) -> Result<Self, Self::Error> {
        match v {
            -1 => Ok(Mood::Down),
            0 => Ok(Mood::Flat),
            1 => Ok(Mood::Up),
            other => Err(format!("mood value out of range: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodWindow {
    slots: [Mood; MOOD_WINDOW_LEN],
    /// Index of the oldest slot.
    oldest: usize,
}

impl Default for MoodWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl MoodWindow {
    /// All-flat window.
    pub fn new() -> Self {
        Self {
            slots: [Mood::Flat; MOOD_WINDOW_LEN],
            oldest: 0,
        }
    }

    /// Drop the oldest signal and append `mood` as the newest.
    pub fn shift(&mut self, mood: Mood) {
        self.slots[self.oldest] = mood;
        self.oldest = (self.oldest + 1) % MOOD_WINDOW_LEN;
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Mood> + '_ {
        (0..MOOD_WINDOW_LEN).map(move |i| self.slots[(self.oldest + i) % MOOD_WINDOW_LEN])
    }

    pub fn values(&self) -> [i8; MOOD_WINDOW_LEN] {
        let mut out = [0; MOOD_WINDOW_LEN];
        for (slot, mood) in out.iter_mut().zip(self.iter()) {
            *slot = mood.value();
        }
        out
    }

    pub fn newest(&self) -> Mood {
        self.slots[(self.oldest + MOOD_WINDOW_LEN - 1) % MOOD_WINDOW_LEN]
    }

    pub fn len(&self) -> usize {
        MOOD_WINDOW_LEN
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// One symbol per slot, oldest first, space separated: `_ - ^ ...`.
pub fn mood_line(window: &MoodWindow) -> String {
    window
        .iter()
        .map(|m| m.symbol().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_all_flat() {
        let w = MoodWindow::new();
        assert_eq!(w.values(), [0; 7]);
        assert_eq!(mood_line(&w), "- - - - - - -");
    }

    #[test]
    fn seven_ups_fill_the_window() {
        let mut w = MoodWindow::new();
        for _ in 0..7 {
            w.shift(Mood::Up);
        }
        assert_eq!(w.values(), [1; 7]);

        w.shift(Mood::Up);
        assert_eq!(w.values(), [1; 7]);
        assert_eq!(w.len(), 7);
    }

    #[test]
    fn shift_appends_newest_at_the_end() {
        let mut w = MoodWindow::new();
        w.shift(Mood::Up);
        w.shift(Mood::Down);
        assert_eq!(w.values(), [0, 0, 0, 0, 0, 1, -1]);
        assert_eq!(w.newest(), Mood::Down);
        assert_eq!(mood_line(&w), "- - - - - ^ _");
    }

    #[test]
    fn wraps_around_many_times() {
        let mut w = MoodWindow::new();
        for i in 0..20 {
            w.shift(if i % 2 == 0 { Mood::Up } else { Mood::Down });
        }
        // 13..=19 -> down, up, down, up, down, up, down
        assert_eq!(w.values(), [-1, 1, -1, 1, -1, 1, -1]);
    }

    #[test]
    fn session_minutes_thresholds() {
        assert_eq!(Mood::from_session_minutes(25), Mood::Up);
        assert_eq!(Mood::from_session_minutes(90), Mood::Up);
        assert_eq!(Mood::from_session_minutes(24), Mood::Flat);
        assert_eq!(Mood::from_session_minutes(10), Mood::Flat);
        assert_eq!(Mood::from_session_minutes(9), Mood::Down);
        assert_eq!(Mood::from_session_minutes(1), Mood::Down);
    }

    #[test]
    fn mood_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Mood::Down).unwrap(), "-1");
        let m: Mood = serde_json::from_str("1").unwrap();
        assert_eq!(m, Mood::Up);
        assert!(serde_json::from_str::<Mood>("2").is_err());
    }
}
