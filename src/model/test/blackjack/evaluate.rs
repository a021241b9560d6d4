use super::*;

/// Tests the reference scores for aces and busts.
///
/// Expected: two aces score 12, ace-king scores 21, 10-9-5 busts at 24
#[test]
fn scores_reference_hands() {
    assert_eq!(evaluate(&cards(&[Rank::Ace, Rank::Ace])), 12);
    assert_eq!(evaluate(&cards(&[Rank::Ace, Rank::King])), 21);
    assert_eq!(evaluate(&cards(&[Rank::Ten, Rank::Nine, Rank::Five])), 24);
}

#[test]
fn face_cards_count_ten() {
    assert_eq!(evaluate(&cards(&[Rank::Jack, Rank::Queen])), 20);
    assert_eq!(evaluate(&cards(&[Rank::King, Rank::Two])), 12);
}

/// Tests that only as many aces are demoted as needed.
///
/// Expected: A-A-9 keeps one ace at 11 (21), A-A-A-K demotes all three (13)
#[test]
fn demotes_aces_one_at_a_time() {
    assert_eq!(evaluate(&cards(&[Rank::Ace, Rank::Ace, Rank::Nine])), 21);
    assert_eq!(
        evaluate(&cards(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::King])),
        13
    );
}

#[test]
fn empty_hand_scores_zero() {
    assert_eq!(evaluate(&[]), 0);
}

/// Tests that every card contributes at least one point.
///
/// Checks every three-card combination of ranks.
///
/// Expected: score is never below the number of cards
#[test]
fn score_is_at_least_card_count() {
    for a in Rank::ALL {
        for b in Rank::ALL {
            for c in Rank::ALL {
                let hand = cards(&[a, b, c]);
                assert!(evaluate(&hand) >= hand.len() as u32, "{hand:?}");
            }
        }
    }
}

/// Tests that drawing onto a hard hand never lowers the score.
///
/// A soft hand can drop when a drawn card forces its ace down to 1 (A-9 is 20,
/// A-9-5 is 15), so the check is limited to hands with no ace counted as 11.
///
/// Expected: score after the draw is at least the score before
#[test]
fn drawing_never_lowers_a_hard_hand() {
    for a in Rank::ALL {
        for b in Rank::ALL {
            let hand = cards(&[a, b]);
            let hard_total: u32 = hand
                .iter()
                .map(|c| match c.rank {
                    Rank::Ace => 1,
                    rank => rank.base_value(),
                })
                .sum();

            if evaluate(&hand) != hard_total {
                continue;
            }

            for drawn in Rank::ALL {
                let mut bigger = hand.clone();
                bigger.push(card(drawn));
                assert!(evaluate(&bigger) >= evaluate(&hand), "{bigger:?}");
            }
        }
    }
}

#[test]
fn soft_hand_can_drop_after_a_draw() {
    assert_eq!(evaluate(&cards(&[Rank::Ace, Rank::Nine])), 20);
    assert_eq!(evaluate(&cards(&[Rank::Ace, Rank::Nine, Rank::Five])), 15);
}
