use poker_ledger::chips::Chips;
use poker_ledger::table::{ActionOutcome, Phase, Table};

fn d(n: u64) -> Chips {
    Chips::from_major(n)
}

fn table(names: &[&str]) -> Table {
    let mut t = Table::default();
    for n in names {
        t.add_player(n, d(100)).unwrap();
    }
    t
}

fn blinds_in(t: &mut Table) {
    let sb = t.players()[t.turn()].name().to_string();
    t.post_blind(&sb).unwrap();
    let bb = t.players()[t.turn()].name().to_string();
    t.post_blind(&bb).unwrap();
}

#[test]
fn limped_pot_closes_after_big_blind_checks() {
    let mut t = table(&["A", "B", "C"]);
    blinds_in(&mut t);

    assert_eq!(t.call("C"), Ok(ActionOutcome::Advanced { seat: 0 }));
    assert_eq!(t.call("A"), Ok(ActionOutcome::Advanced { seat: 1 }));
    assert_eq!(t.check("B"), Ok(ActionOutcome::RoundClosed { round: 2, seat: 2 }));

    assert_eq!(t.round(), 2);
    assert_eq!(t.pot(), d(6));
    assert_eq!(t.amount_to_call(), Chips::ZERO);
    assert_eq!(t.min_raise(), d(2));
    assert!(t.first_turn());
    assert!(t.players().iter().all(|p| p.current_amount_bet().is_zero()));
}

#[test]
fn checked_around_round_closes_at_first_to_act() {
    let mut t = table(&["A", "B", "C"]);
    blinds_in(&mut t);
    t.call("C").unwrap();
    t.call("A").unwrap();
    t.check("B").unwrap();

    assert_eq!(t.check("C"), Ok(ActionOutcome::Advanced { seat: 0 }));
    assert!(!t.first_turn());
    assert_eq!(t.check("A"), Ok(ActionOutcome::Advanced { seat: 1 }));
    assert_eq!(t.check("B"), Ok(ActionOutcome::RoundClosed { round: 3, seat: 2 }));
    assert_eq!(t.pot(), d(6));
}

#[test]
fn big_blind_raise_reopens_action() {
    let mut t = table(&["A", "B", "C"]);
    blinds_in(&mut t);
    t.call("C").unwrap();
    t.call("A").unwrap();

    assert_eq!(t.raise("B", d(4)), Ok(ActionOutcome::Advanced { seat: 2 }));
    assert_eq!(t.amount_to_call(), d(6));
    assert_eq!(t.min_raise(), d(4));
    t.call("C").unwrap();
    assert_eq!(t.call("A"), Ok(ActionOutcome::RoundClosed { round: 2, seat: 2 }));
    assert_eq!(t.pot(), d(18));
}

#[test]
fn folded_seats_are_skipped() {
    let mut t = table(&["A", "B", "C"]);
    blinds_in(&mut t);
    assert_eq!(t.fold("C"), Ok(ActionOutcome::Advanced { seat: 0 }));
    t.call("A").unwrap();
    assert_eq!(t.check("B"), Ok(ActionOutcome::RoundClosed { round: 2, seat: 0 }));
    assert_eq!(t.players_still_in(), 2);

    t.check("A").unwrap();
    assert_eq!(t.turn(), 1);
}

#[test]
fn last_player_standing_completes_the_hand() {
    let mut t = table(&["A", "B", "C"]);
    blinds_in(&mut t);
    t.fold("C").unwrap();
    assert_eq!(t.fold("A"), Ok(ActionOutcome::HandComplete));
    assert_eq!(t.phase(), Phase::HandComplete);
    assert_eq!(t.pot(), d(3));
    assert!(!t.legal_actions_at(t.turn()).any());
}

#[test]
fn all_in_seats_never_get_the_turn() {
    let mut t = Table::default();
    t.add_player("A", d(100)).unwrap();
    t.add_player("B", d(100)).unwrap();
    t.add_player("C", d(100)).unwrap();
    t.add_player("D", d(20)).unwrap();
    blinds_in(&mut t);
    t.call("C").unwrap();
    t.go_all_in("D").unwrap();
    assert_eq!(t.amount_to_call(), d(20));

    t.fold("A").unwrap();
    assert_eq!(t.turn(), 1);
    t.go_all_in("B").unwrap();
    assert_eq!(t.turn(), 2);
    assert_eq!(t.fold("C"), Ok(ActionOutcome::HandComplete));
    assert_eq!(t.pot(), d(1 + 100 + 2 + 20));
}

#[test]
fn everyone_all_in_runs_straight_to_complete() {
    let mut t = table(&["A", "B"]);
    blinds_in(&mut t);
    t.go_all_in("A").unwrap();
    assert_eq!(t.go_all_in("B"), Ok(ActionOutcome::HandComplete));
    assert_eq!(t.pot(), d(200));
    assert_eq!(t.effective_all_in(), Some(d(98)));
}
