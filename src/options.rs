//! Game configuration options.

use core::time::Duration;

/// Configuration options for a game.
///
/// The engine itself never waits; these values tell a
/// [`ComputerTurnDriver`](crate::ComputerTurnDriver) and a
/// [`Presenter`](crate::Presenter) how to pace the table.
///
/// ```
/// use core::time::Duration;
/// use twentyone::GameOptions;
///
/// let options = GameOptions::default()
///     .with_step_interval(Duration::from_millis(500))
///     .with_banner_duration(Duration::from_secs(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Delay between two computer cards.
    pub step_interval: Duration,
    /// How long the result banner stays visible.
    pub banner_duration: Duration,
    /// How long the banner for an exact 21 stays visible.
    pub perfect_banner_duration: Duration,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            step_interval: Duration::from_millis(800),
            banner_duration: Duration::from_secs(3),
            perfect_banner_duration: Duration::from_secs(1),
        }
    }
}

impl GameOptions {
    /// Sets the delay between two computer cards.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_step_interval(Duration::ZERO);
    /// assert_eq!(options.step_interval, Duration::ZERO);
    /// ```
    #[must_use]
    pub const fn with_step_interval(mut self, interval: Duration) -> Self {
        self.step_interval = interval;
        self
    }

    /// Sets how long the result banner stays visible.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_banner_duration(Duration::from_secs(5));
    /// assert_eq!(options.banner_duration, Duration::from_secs(5));
    /// ```
    #[must_use]
    pub const fn with_banner_duration(mut self, duration: Duration) -> Self {
        self.banner_duration = duration;
        self
    }

    /// Sets how long the exact-21 banner stays visible.
    #[must_use]
    pub const fn with_perfect_banner_duration(mut self, duration: Duration) -> Self {
        self.perfect_banner_duration = duration;
        self
    }
}
