//! Registry of live blackjack games.
//!
//! Each `/blackjack` invocation starts a session keyed by the command's interaction
//! id. Sessions expire after a period without an action from their owner; expired
//! sessions are dropped lazily when touched and by the periodic sweep in
//! `scheduler::session_expiry`.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::{
    error::AppError,
    model::{
        blackjack::{Action, BlackjackGame, GameSnapshot},
        card::Deck,
    },
};

/// Identifies a session. This is the id of the interaction that started the game.
pub type SessionId = u64;

struct Session {
    owner: u64,
    game: BlackjackGame,
    expires_at: Instant,
}

impl Session {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// What happened to an action sent to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// No live session with that id; it finished, timed out, or never existed.
    Expired,
    /// Someone other than the owner pressed a button. Nothing changed.
    Ignored,
    InProgress(GameSnapshot),
    /// The game reached its outcome and the session was removed.
    Finished(GameSnapshot),
}

#[derive(Clone)]
pub struct BlackjackService {
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
    rng: Arc<Mutex<StdRng>>,
    ttl: Duration,
}

impl BlackjackService {
    /// Creates a registry whose sessions expire `ttl` after their last action.
    pub fn new(ttl: Duration) -> Self {
        Self::with_rng(ttl, StdRng::from_os_rng())
    }

    /// Creates a registry that shuffles with the given RNG.
    pub fn with_rng(ttl: Duration, rng: StdRng) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            rng: Arc::new(Mutex::new(rng)),
            ttl,
        }
    }

    /// Deals a new game and registers it for `owner`.
    ///
    /// # Arguments
    /// - `session_id` - Id of the interaction that started the game
    /// - `owner` - Discord user id of the only user allowed to act on the game
    ///
    /// # Returns
    /// - `Ok(GameSnapshot)` - The opening hands
    /// - `Err(AppError::GameErr)` - The deck could not be dealt
    pub async fn start(
        &self,
        session_id: SessionId,
        owner: u64,
    ) -> Result<GameSnapshot, AppError> {
        let deck = {
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            Deck::shuffled(&mut *rng)
        };
        let game = BlackjackGame::deal(deck)?;
        let snapshot = GameSnapshot::from(&game);

        let session = Session {
            owner,
            game,
            expires_at: Instant::now() + self.ttl,
        };
        self.sessions.write().await.insert(session_id, session);

        tracing::debug!("Started blackjack session {} for user {}", session_id, owner);

        Ok(snapshot)
    }

    /// Applies a player's action to a session.
    ///
    /// Actions from anyone but the owner are ignored without touching the game or its
    /// expiry. An accepted action that leaves the game running pushes the expiry back
    /// by the full timeout.
    ///
    /// # Returns
    /// - `Ok(ActionResult)` - See [`ActionResult`] for each case
    /// - `Err(AppError::GameErr)` - The game rejected the action
    pub async fn act(
        &self,
        session_id: SessionId,
        actor: u64,
        action: Action,
    ) -> Result<ActionResult, AppError> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        let Some(session) = sessions.get_mut(&session_id) else {
            return Ok(ActionResult::Expired);
        };

        if session.is_expired(now) {
            sessions.remove(&session_id);
            return Ok(ActionResult::Expired);
        }

        if session.owner != actor {
            tracing::debug!(
                "Ignoring {} from user {} on session {} owned by {}",
                action.as_str(),
                actor,
                session_id,
                session.owner
            );
            return Ok(ActionResult::Ignored);
        }

        session.game.apply(action)?;
        let snapshot = GameSnapshot::from(&session.game);

        if session.game.is_finished() {
            sessions.remove(&session_id);
            return Ok(ActionResult::Finished(snapshot));
        }

        session.expires_at = now + self.ttl;
        Ok(ActionResult::InProgress(snapshot))
    }

    /// Removes every expired session.
    ///
    /// # Returns
    /// - Number of sessions removed
    pub async fn sweep_expired(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(now));

        before - sessions.len()
    }

    pub async fn active_sessions(&self) -> usize {
        self.sessions.read().await.len()
    }
}
