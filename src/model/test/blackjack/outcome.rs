use super::*;

/// Tests the outcome table for final scores.
///
/// Expected: player bust loses even against a dealer bust, otherwise the
/// higher non-bust score wins and equal scores tie
#[test]
fn determines_outcome_from_scores() {
    assert_eq!(Outcome::determine(22, 19), Outcome::Bust);
    assert_eq!(Outcome::determine(18, 22), Outcome::PlayerWins);
    assert_eq!(Outcome::determine(20, 18), Outcome::PlayerWins);
    assert_eq!(Outcome::determine(17, 19), Outcome::DealerWins);
    assert_eq!(Outcome::determine(19, 19), Outcome::Tie);
}

#[test]
fn player_bust_loses_to_dealer_bust() {
    assert_eq!(Outcome::determine(25, 23), Outcome::Bust);
}

#[test]
fn outcome_messages() {
    assert_eq!(Outcome::Bust.message(), "❌ **Bust! You lose.**");
    assert_eq!(Outcome::PlayerWins.message(), "✅ **You win!**");
    assert_eq!(Outcome::DealerWins.message(), "❌ **Dealer wins.**");
    assert_eq!(Outcome::Tie.message(), "🤝 **Tie.**");
}
