//! Graph-wide configuration flags and their scoped overrides.

use std::cell::Cell;

/// Named boolean switches consulted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// Record function nodes when operators run. On by default.
    EnableBackprop,
}

impl Flag {
    const COUNT: usize = 1;

    fn index(self) -> usize {
        match self {
            Flag::EnableBackprop => 0,
        }
    }

    fn default_value(self) -> bool {
        match self {
            Flag::EnableBackprop => true,
        }
    }
}

/// Mutable flag storage owned by a [`Graph`](crate::autograd::Graph).
///
/// Flags live in `Cell`s so they can be flipped through a shared reference
/// while variables borrow the graph. This also makes the owning graph `!Sync`.
#[derive(Debug)]
pub struct Config {
    flags: [Cell<bool>; Flag::COUNT],
}

impl Default for Config {
    fn default() -> Self {
        Config {
            flags: [Cell::new(Flag::EnableBackprop.default_value())],
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, flag: Flag) -> bool {
        self.flags[flag.index()].get()
    }

    pub fn set(&self, flag: Flag, value: bool) {
        self.flags[flag.index()].set(value);
    }

    pub fn is_backprop_enabled(&self) -> bool {
        self.get(Flag::EnableBackprop)
    }

    /// Sets `flag` to `value` until the returned guard is dropped, then
    /// restores the value it had before.
    ///
    /// The restore happens in `Drop`, so it also runs on early return through
    /// `?` and while unwinding from a panic.
    #[must_use = "the previous value is restored as soon as the guard is dropped"]
    pub fn using(&self, flag: Flag, value: bool) -> ConfigGuard<'_> {
        let previous = self.get(flag);
        self.set(flag, value);
        ConfigGuard {
            config: self,
            flag,
            previous,
        }
    }
}

/// Restores a flag to its captured value on drop.
#[derive(Debug)]
pub struct ConfigGuard<'a> {
    config: &'a Config,
    flag: Flag,
    previous: bool,
}

impl ConfigGuard<'_> {
    /// The value the flag will be restored to.
    pub fn previous(&self) -> bool {
        self.previous
    }
}

impl Drop for ConfigGuard<'_> {
    fn drop(&mut self) {
        self.config.set(self.flag, self.previous);
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
