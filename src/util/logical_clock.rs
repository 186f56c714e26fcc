/// Logical clock.
///
/// Whenever a replacer needs to order events (last access, load time), it uses
/// ticks of this clock as timestamps. The clock is owned by a single replacer,
/// so no synchronization is involved.
#[derive(Debug, Default)]
pub struct LogicalClock {
    now: u64,
}

impl LogicalClock {
    /// Creates a new clock starting at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { now: 0 }
    }

    /// Advances the clock and returns the new time.
    ///
    /// Whenever maximum value is reached, the function returns `None`.
    pub fn tick(&mut self) -> Option<u64> {
        self.now = self.now.checked_add(1)?;
        Some(self.now)
    }
}
