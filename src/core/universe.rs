//! Enumeration of every code for a set of rules

use super::{Code, Rules};

/// Iterates all codes from the minimum to the maximum in successor order
pub struct CodeIterator {
    next: Option<Code>,
}

impl CodeIterator {
    #[must_use]
    pub fn new(rules: Rules) -> Self {
        Self {
            next: Some(Code::first(rules)),
        }
    }
}

impl Iterator for CodeIterator {
    type Item = Code;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let successor = current.successor();
        // successor() is a fixed point on the last code
        self.next = (successor != current).then_some(successor);
        Some(current)
    }
}

/// Build the full code universe (`colors^length` codes) in enumeration order
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Rules, universe};
///
/// let all = universe(Rules::CLASSIC);
/// assert_eq!(all.len(), 1296);
/// assert_eq!(all[0].to_string(), "1111");
/// assert_eq!(all[1295].to_string(), "6666");
/// ```
#[must_use]
pub fn universe(rules: Rules) -> Vec<Code> {
    let mut codes = Vec::with_capacity(rules.universe_size());
    codes.extend(CodeIterator::new(rules));
    codes
}
