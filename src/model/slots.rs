//! Slot machine reels.

use rand::Rng;

/// Symbols that can land on a reel.
pub const SYMBOLS: [&str; 6] = ["🍎", "🍇", "💎", "7️⃣", "🍒", "🍋"];

/// Symbol shown on every reel before the first frame.
pub const SPINNING_SYMBOL: &str = "🔄";

/// Number of throwaway frames shown before the result.
pub const ANIMATION_FRAMES: usize = 3;

/// The three symbols showing on the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reels(pub [&'static str; 3]);

impl Reels {
    pub fn spinning() -> Self {
        Self([SPINNING_SYMBOL; 3])
    }

    /// Draws each reel independently and uniformly from [`SYMBOLS`].
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(std::array::from_fn(|_| {
            SYMBOLS[rng.random_range(0..SYMBOLS.len())]
        }))
    }

    pub fn is_jackpot(&self) -> bool {
        let [a, b, c] = self.0;
        a == b && b == c
    }

    /// Formats the reels as `[ a | b | c ]`.
    pub fn display(&self) -> String {
        format!("**[ {} ]**", self.0.join(" | "))
    }
}

/// One play of the slot machine: the animation frames followed by the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSpin {
    pub frames: Vec<Reels>,
    pub result: Reels,
}

impl SlotSpin {
    pub fn is_win(&self) -> bool {
        self.result.is_jackpot()
    }
}
