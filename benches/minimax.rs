use mastermind_solver::commands::solve_code;
use mastermind_solver::core::{Code, Feedback, Rules, universe};
use mastermind_solver::solver::eliminate;
use mastermind_solver::solver::minimax::{
    TieBreak, calculate_max_remaining, select_best_guess, select_best_guess_sequential,
};
use mastermind_solver::solver::{Breaker, MinimaxStrategy};

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(2));
    targets =
        comparing_codes,
        enumerating_universe,
        scoring_opening_worst_case,
        selecting_second_guess_parallel,
        selecting_second_guess_sequential,
        solving_classic_game,
}

fn code(value: u64) -> Code {
    Code::from_integer(value, Rules::CLASSIC).expect("valid classic code")
}

/// Candidates left after the 1122 opening scored one black peg
fn after_opening() -> (Vec<Code>, Vec<Code>) {
    let all = universe(Rules::CLASSIC);
    let mut candidates = all.clone();
    eliminate(&mut candidates, &code(1122), Feedback::new(1, 0));
    (all, candidates)
}

fn comparing_codes(c: &mut criterion::Criterion) {
    let answer = code(4421);
    let guess = code(1234);
    c.bench_function("compare two classic codes", |b| {
        b.iter(|| criterion::black_box(answer).compare(criterion::black_box(&guess)))
    });
}

fn enumerating_universe(c: &mut criterion::Criterion) {
    c.bench_function("enumerate the 6^4 universe", |b| {
        b.iter(|| universe(Rules::CLASSIC).len())
    });
}

fn scoring_opening_worst_case(c: &mut criterion::Criterion) {
    let all = universe(Rules::CLASSIC);
    c.bench_function("worst case of 1122 over 1296 codes", |b| {
        b.iter(|| calculate_max_remaining(&code(1122), &all))
    });
}

fn selecting_second_guess_parallel(c: &mut criterion::Criterion) {
    let (all, candidates) = after_opening();
    let past = [code(1122)];
    c.bench_function("minimax second guess (rayon)", |b| {
        b.iter(|| select_best_guess(&all, &candidates, &past, TieBreak::PreferCandidates))
    });
}

fn selecting_second_guess_sequential(c: &mut criterion::Criterion) {
    let (all, candidates) = after_opening();
    let past = [code(1122)];
    c.bench_function("minimax second guess (sequential)", |b| {
        b.iter(|| {
            select_best_guess_sequential(&all, &candidates, &past, TieBreak::PreferCandidates)
        })
    });
}

fn solving_classic_game(c: &mut criterion::Criterion) {
    let secret = code(3632);
    c.bench_function("solve 3632 with minimax", |b| {
        b.iter(|| {
            let mut breaker = Breaker::with_rules(Rules::CLASSIC, MinimaxStrategy::new());
            solve_code(secret, &mut breaker, 10).expect("game completes")
        })
    });
}
