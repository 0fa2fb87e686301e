//! Port choosing the background colour of a new card.

use crate::domain::CardColor;

/// Chooses a colour for each new card.
pub trait CardColorPicker: Send + Sync {
    /// Return the colour for the next card.
    fn pick(&self) -> CardColor;
}

/// Picks uniformly at random from [`CardColor::ALL`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomCardColorPicker;

impl CardColorPicker for RandomCardColorPicker {
    fn pick(&self) -> CardColor {
        use rand::seq::SliceRandom;

        CardColor::ALL
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(CardColor::Blue)
    }
}

/// Always returns the same colour; used by tests.
#[derive(Debug, Clone, Copy)]
pub struct FixtureCardColorPicker(pub CardColor);

impl CardColorPicker for FixtureCardColorPicker {
    fn pick(&self) -> CardColor {
        self.0
    }
}
