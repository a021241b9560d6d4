use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex};

use crate::model::slots::{Reels, SlotSpin, ANIMATION_FRAMES};

/// Draws slot machine spins from a shared RNG.
#[derive(Clone)]
pub struct SlotMachine {
    rng: Arc<Mutex<StdRng>>,
}

impl SlotMachine {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Draws the animation frames and the final result up front.
    ///
    /// Every frame and the result are independent draws; the frames are only for show.
    pub fn spin(&self) -> SlotSpin {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());

        let frames = (0..ANIMATION_FRAMES)
            .map(|_| Reels::draw(&mut *rng))
            .collect();
        let result = Reels::draw(&mut *rng);

        SlotSpin { frames, result }
    }
}

impl Default for SlotMachine {
    fn default() -> Self {
        Self::new()
    }
}
