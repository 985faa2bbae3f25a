use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use scoreboard_terminal::ranking::rank_teams;
use scoreboard_terminal::state::TeamStore;

fn sample_store(n: i64) -> TeamStore {
    (0..n).fold(TeamStore::new(), |store, i| {
        store.add(&format!("Team {i}"), &format!("T{i}"), (i * 7919) % 101)
    })
}

fn bench_rank_teams(c: &mut Criterion) {
    let store = sample_store(500);
    c.bench_function("rank_teams_500", |b| {
        b.iter(|| {
            let ranking = rank_teams(black_box(&store));
            black_box(ranking.len());
        })
    });
}

fn bench_score_updates(c: &mut Criterion) {
    let store = sample_store(500);
    let ids: Vec<_> = store.teams().iter().map(|t| t.id).collect();
    c.bench_function("increment_then_rank", |b| {
        b.iter(|| {
            let mut store = store.clone();
            for id in ids.iter().step_by(25) {
                store = store.increment(*id);
            }
            black_box(rank_teams(&store).len());
        })
    });
}

criterion_group!(benches, bench_rank_teams, bench_score_updates);
criterion_main!(benches);
