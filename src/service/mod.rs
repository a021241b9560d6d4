//! Business logic between the bot layer and the models / persistence.
//!
//! Services are cheap to construct: stateful ones (`BlackjackService`, `SlotMachine`,
//! the HTTP lookups) are cloned out of `BotState`, while the ones over the config
//! store borrow it for the duration of a single event.

pub mod activity;
pub mod blackjack;
pub mod bypass;
pub mod forum_log;
pub mod roblox;
pub mod slots;
