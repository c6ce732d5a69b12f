use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::utils::hash::{FastHashMap, FastHashSet};
use crate::utils::time::Timestamp;

/// Timings of the auto-repeat of a held key.
#[derive(Debug, Clone, Copy)]
pub struct KeyboardParams {
    /// How long a key must be held before it starts repeating.
    pub repeat_delay: Duration,
    /// Time between two repeats once a key is repeating.
    pub repeat_interval: Duration,
}

impl Default for KeyboardParams {
    fn default() -> Self {
        KeyboardParams {
            repeat_delay: Duration::from_millis(400),
            repeat_interval: Duration::from_millis(100),
        }
    }
}

/// Symbolic name for a keyboard key.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
pub enum Key {
    /// The '1' key over the letters.
    Key1,
    /// The '2' key over the letters.
    Key2,
    /// The '3' key over the letters.
    Key3,
    /// The '4' key over the letters.
    Key4,
    /// The '5' key over the letters.
    Key5,
    /// The '6' key over the letters.
    Key6,
    /// The '7' key over the letters.
    Key7,
    /// The '8' key over the letters.
    Key8,
    /// The '9' key over the letters.
    Key9,
    /// The '0' key over the 'O' and 'P' keys.
    Key0,

    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    /// The Escape key, next to F1.
    Escape,

    Left,
    Up,
    Right,
    Down,

    /// The Backspace key, right over Enter.
    Back,
    /// The Enter key.
    Return,
    /// The space bar.
    Space,
    Tab,

    LShift,
    RShift,
    LControl,
    RControl,
    LAlt,
    RAlt,

    Add,
    Subtract,
    Equals,
    Minus,
}

#[derive(Debug, Clone, Copy)]
struct Held {
    since: Timestamp,
    last_repeat: Option<Timestamp>,
}

/// Per-frame keyboard state. Presses, releases and repeats are only visible
/// during the frame they happened in.
pub struct Keyboard {
    held: FastHashMap<Key, Held>,
    presses: FastHashSet<Key>,
    releases: FastHashSet<Key>,
    repeats: FastHashSet<Key>,
    params: KeyboardParams,
}

impl Keyboard {
    pub fn new(params: KeyboardParams) -> Self {
        Keyboard {
            params,
            held: FastHashMap::default(),
            presses: FastHashSet::default(),
            releases: FastHashSet::default(),
            repeats: FastHashSet::default(),
        }
    }

    pub fn reset(&mut self) {
        self.held.clear();
        self.presses.clear();
        self.releases.clear();
        self.repeats.clear();
    }

    /// Ends the current frame, and collects the keys that repeat in the next one.
    pub fn advance(&mut self) {
        self.advance_to(Timestamp::now());
    }

    fn advance_to(&mut self, now: Timestamp) {
        self.presses.clear();
        self.releases.clear();
        self.repeats.clear();

        for (&key, held) in &mut self.held {
            let due = match held.last_repeat {
                None => (now - held.since) >= self.params.repeat_delay,
                Some(ts) => (now - ts) >= self.params.repeat_interval,
            };

            if due {
                held.last_repeat = Some(now);
                self.repeats.insert(key);
            }
        }
    }

    pub fn on_key_pressed(&mut self, key: Key) {
        // Platforms report auto-repeat as extra presses, those are ignored.
        if self.held.contains_key(&key) {
            return;
        }

        self.presses.insert(key);
        self.held.insert(
            key,
            Held {
                since: Timestamp::now(),
                last_repeat: None,
            },
        );
    }

    pub fn on_key_released(&mut self, key: Key) {
        if self.held.remove(&key).is_some() {
            self.releases.insert(key);
        }
    }

    #[inline]
    pub fn is_key_down(&self, key: Key) -> bool {
        self.held.contains_key(&key)
    }

    #[inline]
    pub fn is_key_press(&self, key: Key) -> bool {
        self.presses.contains(&key)
    }

    #[inline]
    pub fn is_key_release(&self, key: Key) -> bool {
        self.releases.contains(&key)
    }

    /// Checks if a held key fires a repeat in this frame.
    #[inline]
    pub fn is_key_repeat(&self, key: Key) -> bool {
        self.repeats.contains(&key)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn keyboard() -> Keyboard {
        Keyboard::new(KeyboardParams {
            repeat_delay: Duration::from_millis(400),
            repeat_interval: Duration::from_millis(100),
        })
    }

    #[test]
    fn press_once() {
        let mut kb = keyboard();
        kb.on_key_pressed(Key::Up);
        kb.on_key_pressed(Key::Up);
        assert!(kb.is_key_press(Key::Up));

        kb.advance();
        assert!(kb.is_key_down(Key::Up));
        assert!(!kb.is_key_press(Key::Up));

        kb.on_key_released(Key::Up);
        kb.on_key_released(Key::Down);
        assert!(kb.is_key_release(Key::Up));
        assert!(!kb.is_key_release(Key::Down));
    }

    #[test]
    fn repeat() {
        let mut kb = keyboard();
        kb.on_key_pressed(Key::Down);
        let since = kb.held[&Key::Down].since;

        kb.advance_to(since + Duration::from_millis(100));
        assert!(!kb.is_key_repeat(Key::Down));

        kb.advance_to(since + Duration::from_millis(400));
        assert!(kb.is_key_repeat(Key::Down));

        kb.advance_to(since + Duration::from_millis(450));
        assert!(!kb.is_key_repeat(Key::Down));

        kb.advance_to(since + Duration::from_millis(500));
        assert!(kb.is_key_repeat(Key::Down));

        kb.on_key_released(Key::Down);
        kb.advance_to(since + Duration::from_millis(1000));
        assert!(!kb.is_key_repeat(Key::Down));
    }
}
