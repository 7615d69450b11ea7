//! Minimax-based guess selection
//!
//! Selects the universe code that minimizes the worst-case remaining candidates.

use super::calculator::calculate_max_remaining;
use crate::core::Code;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// How to choose among codes sharing the smallest worst case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Prefer codes that are still candidates, then enumeration order (Knuth)
    #[default]
    PreferCandidates,
    /// First code in enumeration order
    EnumerationOrder,
}

/// Select best guess by minimizing worst-case remaining candidates
///
/// Every universe code not in `past_guesses` is scored. Returns the winning
/// code and its worst case, or `None` if every code has been guessed.
///
/// The scan runs in parallel, but the reduction key is
/// `(worst case, tie rank, universe index)`, so the winner is always the one
/// [`select_best_guess_sequential`] picks.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Rules, universe};
/// use mastermind_solver::solver::minimax::{TieBreak, select_best_guess};
///
/// let all = universe(Rules::CLASSIC);
/// let (best, worst) =
///     select_best_guess(&all, &all, &[], TieBreak::EnumerationOrder).unwrap();
///
/// assert_eq!(best.to_string(), "1122");
/// assert_eq!(worst, 256);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    universe: &'a [Code],
    candidates: &[Code],
    past_guesses: &[Code],
    tie_break: TieBreak,
) -> Option<(&'a Code, usize)> {
    let guessed: FxHashSet<&Code> = past_guesses.iter().collect();
    let candidate_set = candidate_lookup(candidates, tie_break);

    universe
        .par_iter()
        .enumerate()
        .filter(|(_, code)| !guessed.contains(code))
        .map(|(index, code)| {
            let worst = calculate_max_remaining(code, candidates);
            let rank = tie_rank(code, &candidate_set, tie_break);
            ((worst, rank, index), code)
        })
        .min_by_key(|(key, _)| *key)
        .map(|((worst, _, _), code)| (code, worst))
}

/// Single-threaded reference for [`select_best_guess`]
#[must_use]
pub fn select_best_guess_sequential<'a>(
    universe: &'a [Code],
    candidates: &[Code],
    past_guesses: &[Code],
    tie_break: TieBreak,
) -> Option<(&'a Code, usize)> {
    let guessed: FxHashSet<&Code> = past_guesses.iter().collect();
    let candidate_set = candidate_lookup(candidates, tie_break);

    let mut best: Option<((usize, usize), &'a Code)> = None;
    for code in universe.iter().filter(|code| !guessed.contains(code)) {
        let worst = calculate_max_remaining(code, candidates);
        let key = (worst, tie_rank(code, &candidate_set, tie_break));
        // Strict comparison keeps the earliest code on ties
        if best.is_none_or(|(best_key, _)| key < best_key) {
            best = Some((key, code));
        }
    }

    best.map(|((worst, _), code)| (code, worst))
}

fn candidate_lookup(candidates: &[Code], tie_break: TieBreak) -> FxHashSet<&Code> {
    match tie_break {
        TieBreak::PreferCandidates => candidates.iter().collect(),
        TieBreak::EnumerationOrder => FxHashSet::default(),
    }
}

fn tie_rank(code: &Code, candidate_set: &FxHashSet<&Code>, tie_break: TieBreak) -> usize {
    match tie_break {
        TieBreak::PreferCandidates => usize::from(!candidate_set.contains(code)),
        TieBreak::EnumerationOrder => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, Rules, universe};
    use crate::solver::eliminate;

    fn code(value: u64) -> Code {
        Code::from_integer(value, Rules::CLASSIC).unwrap()
    }

    #[test]
    fn selects_lowest_max_remaining() {
        let guesses = [code(6666), code(1234)];
        let candidates = [code(1111), code(1222), code(1233), code(1234)];
        assert_eq!(calculate_max_remaining(&code(6666), &candidates), 4);
        assert_eq!(calculate_max_remaining(&code(1234), &candidates), 1);

        let (best, max_remaining) =
            select_best_guess(&guesses, &candidates, &[], TieBreak::EnumerationOrder).unwrap();

        // A strictly smaller worst case beats the earlier code
        assert_eq!(*best, code(1234));
        assert_eq!(max_remaining, 1);

        let (best, _) =
            select_best_guess_sequential(&guesses, &candidates, &[], TieBreak::EnumerationOrder)
                .unwrap();
        assert_eq!(*best, code(1234));
    }

    #[test]
    fn ties_resolved_by_enumeration_order() {
        let pool = [code(5555), code(6666)];
        let candidates = [code(1111)];

        let (best, max) =
            select_best_guess(&pool, &candidates, &[], TieBreak::EnumerationOrder).unwrap();

        assert_eq!(*best, code(5555));
        assert_eq!(max, 1);
    }

    #[test]
    fn ties_prefer_candidates_when_asked() {
        // Both split {1111, 2222} perfectly; only 2222 could be the secret
        let pool = [code(1333), code(2222)];
        let candidates = [code(1111), code(2222)];

        let (ordered, _) =
            select_best_guess(&pool, &candidates, &[], TieBreak::EnumerationOrder).unwrap();
        let (preferred, _) =
            select_best_guess(&pool, &candidates, &[], TieBreak::PreferCandidates).unwrap();

        assert_eq!(*ordered, code(1333));
        assert_eq!(*preferred, code(2222));
    }

    #[test]
    fn skips_past_guesses() {
        let all = universe(Rules::CLASSIC);

        let (best, worst) =
            select_best_guess(&all, &all, &[code(1122)], TieBreak::EnumerationOrder).unwrap();

        // Next code of the same two-pair shape
        assert_eq!(*best, code(1133));
        assert_eq!(worst, 256);
    }

    #[test]
    fn returns_none_when_everything_guessed() {
        let pool = [code(1111), code(2222)];
        let candidates = [code(1111)];

        assert!(select_best_guess(&pool, &candidates, &pool, TieBreak::default()).is_none());
        assert!(select_best_guess(&[], &candidates, &[], TieBreak::default()).is_none());
    }

    #[test]
    fn parallel_matches_sequential() {
        let all = universe(Rules::CLASSIC);
        let secret = code(3632);

        for tie_break in [TieBreak::PreferCandidates, TieBreak::EnumerationOrder] {
            let mut candidates = all.clone();
            let mut guesses = vec![code(1122)];
            eliminate(&mut candidates, &guesses[0], secret.compare(&guesses[0]));

            while candidates.len() > 1 {
                let parallel = select_best_guess(&all, &candidates, &guesses, tie_break);
                let sequential =
                    select_best_guess_sequential(&all, &candidates, &guesses, tie_break);
                assert_eq!(parallel, sequential);

                let (next, _) = parallel.unwrap();
                let feedback: Feedback = secret.compare(next);
                guesses.push(*next);
                eliminate(&mut candidates, next, feedback);
            }

            assert_eq!(candidates, vec![secret]);
        }
    }
}
