use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use eurovision_contest::Contest;
use eurovision_types::RANKING_SIZE;

/// Names are letters-only, so encode the index in base 26.
fn state_name(i: usize) -> String {
    let mut n = i;
    let mut name = String::from("state ");
    loop {
        name.push((b'a' + (n % 26) as u8) as char);
        n /= 26;
        if n == 0 {
            break;
        }
    }
    name
}

fn make_contest(states: usize, judges: usize) -> Contest {
    let mut contest = Contest::new();
    for i in 0..states {
        contest
            .add_state(i as i64, &state_name(i), "song")
            .unwrap();
    }
    for giver in 0..states {
        for offset in 1..=3 {
            let taker = (giver + offset * 7) % states;
            if taker != giver {
                contest
                    .change_vote(giver as i64, taker as i64, offset as i64)
                    .unwrap();
            }
        }
    }
    for j in 0..judges {
        let ranking: [i64; RANKING_SIZE] =
            std::array::from_fn(|slot| ((j + slot * 3) % states) as i64);
        // Skip rankings that collide on a small state count.
        let _ = contest.add_judge(j as i64, "judge", &ranking);
    }
    contest
}

fn bench_run_contest(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_contest");
    for states in [26, 100, 1000] {
        let contest = make_contest(states, 20);
        group.bench_with_input(BenchmarkId::new("blended", states), &states, |b, _| {
            b.iter(|| black_box(contest.run_contest(black_box(50)).unwrap()));
        });
    }
    group.finish();
}

fn bench_audience_favorite(c: &mut Criterion) {
    let mut group = c.benchmark_group("audience_favorite");
    for states in [26, 100, 1000] {
        let contest = make_contest(states, 0);
        group.bench_with_input(BenchmarkId::new("audience", states), &states, |b, _| {
            b.iter(|| black_box(contest.run_audience_favorite().unwrap()));
        });
    }
    group.finish();
}

fn bench_friendly_states(c: &mut Criterion) {
    let contest = make_contest(1000, 0);
    c.bench_function("friendly_states_1000", |b| {
        b.iter(|| black_box(contest.run_friendly_states().unwrap()));
    });
}

fn bench_remove_state(c: &mut Criterion) {
    c.bench_function("remove_state_cascade", |b| {
        b.iter_batched(
            || make_contest(200, 20),
            |mut contest| {
                contest.remove_state(black_box(7)).unwrap();
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_run_contest,
    bench_audience_favorite,
    bench_friendly_states,
    bench_remove_state,
);
criterion_main!(benches);
