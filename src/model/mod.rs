//! Domain models shared by the services and the bot layer.

pub mod blackjack;
pub mod bot_config;
pub mod card;
pub mod lookup;
pub mod slots;

#[cfg(test)]
mod test;
