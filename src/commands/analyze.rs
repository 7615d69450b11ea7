//! Code analysis command
//!
//! Shows how a guess splits the full universe by feedback.

use crate::core::{Code, Feedback, Rules, universe};
use crate::error::CodeError;
use crate::solver::minimax::{TieBreak, group_by_feedback, select_best_guess};

/// Result of analyzing a code as an opening guess
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub code: Code,
    pub total_candidates: usize,
    /// Feedback groups, largest first
    pub partitions: Vec<(Feedback, usize)>,
    pub worst_case: usize,
    pub expected_remaining: f64,
    /// Best opening by minimax and its worst case, for comparison
    pub best: (Code, usize),
}

/// Analyze `code_text` as a first guess against the whole universe
///
/// # Errors
/// Returns `CodeError` if the text is not a valid code under `rules`.
///
/// # Examples
/// ```
/// use mastermind_solver::commands::analyze_code;
/// use mastermind_solver::core::Rules;
///
/// let result = analyze_code("1122", Rules::CLASSIC).unwrap();
/// assert_eq!(result.worst_case, 256);
/// assert_eq!(result.total_candidates, 1296);
/// ```
pub fn analyze_code(code_text: &str, rules: Rules) -> Result<AnalysisResult, CodeError> {
    let code = Code::parse(code_text, rules)?;
    let all = universe(rules);

    let mut partitions: Vec<(Feedback, usize)> = group_by_feedback(&code, &all).into_iter().collect();
    partitions.sort_by_key(|&(feedback, count)| (std::cmp::Reverse(count), feedback));

    let total = all.len();
    let worst_case = partitions.first().map_or(0, |&(_, count)| count);
    let expected_remaining = partitions
        .iter()
        .map(|&(_, count)| (count * count) as f64)
        .sum::<f64>()
        / total as f64;

    let best = select_best_guess(&all, &all, &[], TieBreak::EnumerationOrder)
        .map_or((code, worst_case), |(best, worst)| (*best, worst));

    Ok(AnalysisResult {
        code,
        total_candidates: total,
        partitions,
        worst_case,
        expected_remaining,
        best,
    })
}
