//! Demo table configuration.

/// Configuration for a demo deal.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckrs::TableOptions;
///
/// let options = TableOptions::default()
///     .with_players(4)
///     .with_hand_size(5);
/// assert_eq!(options.cards_needed(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableOptions {
    /// Number of players dealt a hand.
    pub players: usize,
    /// Cards dealt to each player.
    pub hand_size: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            players: 2,
            hand_size: 2,
        }
    }
}

impl TableOptions {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::TableOptions;
    ///
    /// let options = TableOptions::default().with_players(6);
    /// assert_eq!(options.players, 6);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Sets the number of cards per hand.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::TableOptions;
    ///
    /// let options = TableOptions::default().with_hand_size(5);
    /// assert_eq!(options.hand_size, 5);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Total number of cards the deal takes from the deck.
    #[must_use]
    pub const fn cards_needed(&self) -> usize {
        self.players.saturating_mul(self.hand_size)
    }
}
