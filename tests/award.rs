use poker_ledger::chips::Chips;
use poker_ledger::table::{ActionError, ActionOutcome, HistoryVerb, Phase, Table};

fn c(cents: u64) -> Chips {
    Chips::from_cents(cents)
}

// Blinds 0.50/1.00; a limped first round, then C raises and D folds.
fn ten_dollar_pot() -> Table {
    let mut t = Table::new(c(50), c(100)).unwrap();
    for n in ["A", "B", "C", "D"] {
        t.add_player(n, Chips::from_major(100)).unwrap();
    }
    t.post_blind("A").unwrap();
    t.post_blind("B").unwrap();
    t.call("C").unwrap();
    t.call("D").unwrap();
    t.call("A").unwrap();
    assert_eq!(t.check("B"), Ok(ActionOutcome::RoundClosed { round: 2, seat: 2 }));
    t.raise("C", c(200)).unwrap();
    t.fold("D").unwrap();
    t.call("A").unwrap();
    assert_eq!(t.call("B"), Ok(ActionOutcome::RoundClosed { round: 3, seat: 2 }));
    t
}

#[test]
fn three_way_split_carries_the_odd_cent() {
    let mut t = ten_dollar_pot();
    assert_eq!(t.pot(), Chips::from_major(10));
    let total = t.chips_in_play();

    for n in ["C", "A", "B"] {
        assert_eq!(t.toggle_player_selected(n), Ok(true));
    }
    let summary = t.award_pot().unwrap();

    assert_eq!(summary.reward, c(333));
    assert_eq!(summary.change, c(1));
    assert_eq!(summary.winners, vec!["A".to_string(), "B".to_string(), "C".to_string()]);
    assert_eq!(t.pot(), c(1));
    assert_eq!(t.players()[0].stack(), c(10_033));
    assert_eq!(t.players()[3].stack(), Chips::from_major(99));
    assert_eq!(t.chips_in_play(), total);

    let last = t.history_recent(3);
    assert!(last.iter().all(|e| e.verb == HistoryVerb::Split && e.amount == Some(c(333))));
}

#[test]
fn award_resets_for_the_next_hand() {
    let mut t = ten_dollar_pot();
    t.toggle_player_selected("C").unwrap();
    t.award_pot().unwrap();

    assert_eq!(t.phase(), Phase::AwaitingSmallBlind);
    assert_eq!(t.round(), 1);
    assert_eq!(t.dealer(), 1);
    assert_eq!(t.turn(), 1);
    assert_eq!(t.amount_to_call(), Chips::ZERO);
    assert_eq!(t.min_raise(), c(50));
    assert!(!t.is_all_in());
    assert_eq!(t.effective_all_in(), None);
    for p in t.players() {
        assert!(!p.folded());
        assert!(!p.selected());
        assert!(p.current_amount_bet().is_zero());
        assert!(p.committed().is_zero());
    }
    assert!(t.legal_actions_at(1).small_blind);
}

#[test]
fn folded_players_cannot_win() {
    let mut t = ten_dollar_pot();
    assert_eq!(t.toggle_player_selected("D"), Err(ActionError::PlayerFolded("D".into())));
    assert_eq!(
        t.toggle_player_selected("Nobody"),
        Err(ActionError::UnknownPlayer("Nobody".into()))
    );
}

#[test]
fn deselecting_a_winner() {
    let mut t = ten_dollar_pot();
    assert_eq!(t.toggle_player_selected("A"), Ok(true));
    assert_eq!(t.toggle_player_selected("A"), Ok(false));
    let before = t.clone();
    assert_eq!(t.award_pot(), Err(ActionError::NoWinnersSelected));
    assert_eq!(t, before);
}

#[test]
fn button_moves_round_the_table() {
    let mut t = Table::default();
    for n in ["A", "B", "C"] {
        t.add_player(n, Chips::from_major(100)).unwrap();
    }
    for expected_dealer in [1, 2, 0, 1] {
        let sb = t.players()[t.turn()].name().to_string();
        t.post_blind(&sb).unwrap();
        let bb = t.players()[t.turn()].name().to_string();
        t.post_blind(&bb).unwrap();
        let first = t.players()[t.turn()].name().to_string();
        t.fold(&first).unwrap();
        let next = t.players()[t.turn()].name().to_string();
        assert_eq!(t.fold(&next), Ok(ActionOutcome::HandComplete));
        t.toggle_player_selected(&bb).unwrap();
        t.award_pot().unwrap();
        assert_eq!(t.dealer(), expected_dealer);
    }
    assert_eq!(t.chips_in_play(), Chips::from_major(300));
}

#[test]
fn all_in_winner_busts_the_loser() {
    let mut t = Table::default();
    t.add_player("A", Chips::from_major(50)).unwrap();
    t.add_player("B", Chips::from_major(50)).unwrap();
    t.add_player("C", Chips::from_major(50)).unwrap();
    t.post_blind("A").unwrap();
    t.post_blind("B").unwrap();
    t.fold("C").unwrap();
    t.go_all_in("A").unwrap();
    t.go_all_in("B").unwrap();
    assert_eq!(t.phase(), Phase::HandComplete);

    t.toggle_player_selected("A").unwrap();
    t.award_pot().unwrap();

    assert_eq!(t.players()[0].stack(), Chips::from_major(100));
    assert!(t.players()[1].folded());
    // Button moves to B, who is busted, so it lands on C.
    assert_eq!(t.dealer(), 2);
    assert_eq!(t.turn(), 2);
}
