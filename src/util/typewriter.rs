//! Typed-text effect for the hero headline.
//!
//! Cycles through a list of roles: type one character at a time, hold the
//! full text, delete it, move to the next role. `tick` performs one step and
//! returns the delay before the next one, so the caller owns the timer.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypewriterConfig {
    pub roles: &'static [&'static str],
    pub type_ms: u32,
    pub delete_ms: u32,
    pub hold_ms: u32,
    pub looped: bool,
    pub cursor: char,
}

impl TypewriterConfig {
    #[must_use]
    pub fn new(roles: &'static [&'static str]) -> Self {
        Self { roles, type_ms: 50, delete_ms: 30, hold_ms: 2000, looped: true, cursor: '|' }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Typing,
    Deleting,
    Done,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    config: TypewriterConfig,
    role: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    #[must_use]
    pub fn new(config: TypewriterConfig) -> Self {
        let phase = if config.roles.is_empty() { Phase::Done } else { Phase::Typing };
        Self { config, role: 0, shown: 0, phase }
    }

    /// Visible portion of the current role.
    #[must_use]
    pub fn text(&self) -> String {
        self.config
            .roles
            .get(self.role)
            .map(|role| role.chars().take(self.shown).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn cursor(&self) -> char {
        self.config.cursor
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Advance one step. Returns the delay in ms before the next call, or
    /// `None` once a non-looping sequence has finished.
    pub fn tick(&mut self) -> Option<u32> {
        let len = self.config.roles.get(self.role)?.chars().count();
        match self.phase {
            Phase::Done => None,
            Phase::Typing => {
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown < len {
                    return Some(self.config.type_ms);
                }
                let last = self.role + 1 == self.config.roles.len();
                if last && !self.config.looped {
                    self.phase = Phase::Done;
                    return None;
                }
                self.phase = Phase::Deleting;
                Some(self.config.hold_ms)
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown > 0 {
                    return Some(self.config.delete_ms);
                }
                self.role = (self.role + 1) % self.config.roles.len();
                self.phase = Phase::Typing;
                Some(self.config.type_ms)
            }
        }
    }

    /// `tick`, then hand the new text to `publish`. Stops (returns `None`)
    /// when `publish` reports the receiver is gone.
    pub fn advance(&mut self, publish: impl FnOnce(String) -> bool) -> Option<u32> {
        let next = self.tick();
        if publish(self.text()) { next } else { None }
    }
}
