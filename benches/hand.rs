use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use poker_ledger::chips::Chips;
use poker_ledger::table::Table;

fn seated(n: usize) -> Table {
    let mut t = Table::default();
    for i in 0..n {
        t.add_player(&format!("P{i}"), Chips::from_major(1_000)).unwrap();
    }
    t
}

fn acting(t: &Table) -> String {
    t.players()[t.turn()].name().to_string()
}

// Blinds, a raise, everyone calls, three checked rounds, award.
fn play_hand(t: &mut Table) {
    let sb = acting(t);
    t.post_blind(&sb).unwrap();
    let bb = acting(t);
    t.post_blind(&bb).unwrap();
    let opener = acting(t);
    t.raise(&opener, Chips::from_major(4)).unwrap();
    while t.round() == 1 {
        let name = acting(t);
        t.call(&name).unwrap();
    }
    while t.round() < 5 {
        let name = acting(t);
        t.check(&name).unwrap();
    }
    t.toggle_player_selected(&opener).unwrap();
    t.award_pot().unwrap();
}

fn bench_full_hand(c: &mut Criterion) {
    let mut g = c.benchmark_group("full_hand");
    for n in [2usize, 6, 9] {
        g.bench_with_input(BenchmarkId::new("players", n), &n, |b, &n| {
            b.iter_batched(
                || seated(n),
                |mut t| play_hand(black_box(&mut t)),
                BatchSize::SmallInput,
            )
        });
    }
    g.finish();
}

fn bench_legal_actions(c: &mut Criterion) {
    let mut t = seated(9);
    let sb = acting(&t);
    t.post_blind(&sb).unwrap();
    let bb = acting(&t);
    t.post_blind(&bb).unwrap();
    c.bench_function("legal_actions_9_seats", |b| {
        b.iter(|| (0..9).map(|s| black_box(&t).legal_actions_at(s).any()).filter(|x| *x).count())
    });
}

criterion_group!(benches, bench_full_hand, bench_legal_actions);
criterion_main!(benches);
