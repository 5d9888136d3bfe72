use poker_ledger::chips::Chips;
use poker_ledger::table::{ActionError, Phase, Table};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Step {
    PostBlind,
    Check,
    Call,
    Raise(u64),
    AllIn,
    Fold,
    Award,
}

fn any_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => Just(Step::PostBlind),
        3 => Just(Step::Check),
        4 => Just(Step::Call),
        3 => (1u64..2_000).prop_map(Step::Raise),
        1 => (u64::MAX - 10_000..=u64::MAX).prop_map(Step::Raise),
        1 => Just(Step::AllIn),
        2 => Just(Step::Fold),
        1 => Just(Step::Award),
    ]
}

prop_compose! {
    fn any_table()(
        small in 1u64..=200,
        factor in 1u64..=3,
        stacks in prop::collection::vec(50u64..=30_000, 2..=6),
    ) -> Table {
        let big = Chips::from_cents(small * factor);
        let mut t = Table::new(Chips::from_cents(small), big).unwrap();
        for (i, s) in stacks.iter().enumerate() {
            t.add_player(&format!("P{i}"), Chips::from_cents(*s)).unwrap();
        }
        t
    }
}

fn any_steps(max: usize) -> impl Strategy<Value = Vec<Step>> {
    prop::collection::vec(any_step(), 1..max)
}

fn apply(t: &mut Table, step: Step) -> Result<(), ActionError> {
    let name = t.players()[t.turn()].name().to_string();
    match step {
        Step::PostBlind => t.post_blind(&name).map(|_| ()),
        Step::Check => t.check(&name).map(|_| ()),
        Step::Call => t.call(&name).map(|_| ()),
        Step::Raise(cents) => t.raise(&name, Chips::from_cents(cents)).map(|_| ()),
        Step::AllIn => t.go_all_in(&name).map(|_| ()),
        Step::Fold => t.fold(&name).map(|_| ()),
        Step::Award => {
            let Some(winner) = t.players().iter().find(|p| !p.folded()) else {
                return Err(ActionError::NoWinnersSelected);
            };
            let winner = winner.name().to_string();
            t.toggle_player_selected(&winner)?;
            t.award_pot().map(|_| ())
        }
    }
}

proptest! {
    #[test]
    fn chips_are_conserved(mut t in any_table(), steps in any_steps(80)) {
        let total = t.chips_in_play();
        for step in steps {
            let _ = apply(&mut t, step);
            prop_assert_eq!(t.chips_in_play(), total);
        }
    }

    #[test]
    fn rejected_actions_change_nothing(mut t in any_table(), steps in any_steps(80)) {
        for step in steps {
            let before = t.clone();
            if apply(&mut t, step).is_err() && !matches!(step, Step::Award) {
                prop_assert_eq!(&t, &before);
            }
        }
    }

    #[test]
    fn min_raise_and_call_only_grow_within_a_round(mut t in any_table(), steps in any_steps(80)) {
        for step in steps {
            let (phase, round, min_raise, to_call) =
                (t.phase(), t.round(), t.min_raise(), t.amount_to_call());
            let accepted = apply(&mut t, step).is_ok();
            let same_round = t.phase() == Phase::Betting && t.round() == round;
            if accepted && phase == Phase::Betting && same_round {
                prop_assert!(t.min_raise() >= min_raise);
                prop_assert!(t.amount_to_call() >= to_call);
            }
        }
    }

    #[test]
    fn turn_always_lands_on_a_player_who_can_act(mut t in any_table(), steps in any_steps(80)) {
        for step in steps {
            let _ = apply(&mut t, step);
            prop_assert!(t.turn() < t.players().len());
            if t.phase() == Phase::Betting {
                let p = &t.players()[t.turn()];
                prop_assert!(!p.folded() && !p.all_in());
            }
            for (seat, p) in t.players().iter().enumerate() {
                if seat != t.turn() || p.folded() {
                    prop_assert!(!t.legal_actions_at(seat).any());
                }
            }
        }
    }

    #[test]
    fn offered_actions_are_accepted(mut t in any_table(), steps in any_steps(60)) {
        for step in steps {
            let seat = t.turn();
            let name = t.players()[seat].name().to_string();
            let legal = t.legal_actions_at(seat);

            let blind_due = legal.small_blind || legal.big_blind;
            prop_assert_eq!(blind_due, t.clone().post_blind(&name).is_ok());
            prop_assert_eq!(legal.check, t.clone().check(&name).is_ok());
            prop_assert_eq!(legal.call, t.clone().call(&name).is_ok());
            prop_assert_eq!(legal.raise, t.clone().raise(&name, t.min_raise()).is_ok());
            prop_assert_eq!(legal.all_in, t.clone().go_all_in(&name).is_ok());
            prop_assert_eq!(legal.fold, t.clone().fold(&name).is_ok());

            let _ = apply(&mut t, step);
        }
    }
}
