//! Simple interactive CLI modes
//!
//! Text-based sessions over any reader and writer:
//! - play: a human breaks a hidden secret
//! - assist: the computer breaks a secret the human keeps in their head

use super::solve::{RoundStep, SolveResult};
use crate::core::{Code, CodeMaker, Feedback};
use crate::error::{BreakerError, SessionError, StrategyError};
use crate::output::formatters::feedback_to_pegs;
use crate::solver::{Breaker, HumanStrategy, Strategy, filter_by_history};
use std::io::{BufRead, Write};

/// How an assist session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistOutcome {
    /// Perfect feedback was entered after this many rounds
    Solved { rounds: usize },
    /// The round budget ran out first
    OutOfRounds,
    /// The human quit
    Quit,
}

/// A human plays the breaker against `maker`
///
/// Guesses are read from `input`; prompts and feedback go to `output`.
/// Typing "quit" (or closing input) ends the game early with
/// `success = false`.
///
/// # Errors
/// Returns `SessionError` on I/O failure.
pub fn run_human<R: BufRead, W: Write>(
    maker: &CodeMaker,
    max_rounds: usize,
    input: R,
    output: W,
) -> Result<SolveResult, SessionError> {
    let rules = maker.rules();
    let strategy = HumanStrategy::new(rules, input, output);
    let mut breaker = Breaker::with_rules(rules, strategy);
    let mut rounds = Vec::new();

    writeln!(
        breaker.strategy_mut().output_mut(),
        "Break the secret: {rules}, {max_rounds} rounds. Type 'quit' to give up."
    )?;

    for _ in 0..max_rounds {
        let candidates_before = breaker.candidates().len();
        let guess = match breaker.guess() {
            Ok(guess) => guess,
            Err(BreakerError::Strategy(StrategyError::InputClosed)) => break,
            Err(e) => return Err(e.into()),
        };
        let feedback = maker.judge(&guess);
        let candidates_after = breaker.apply_feedback(feedback)?;

        writeln!(
            breaker.strategy_mut().output_mut(),
            "  {guess}  {}  ({feedback})",
            feedback_to_pegs(feedback, rules)
        )?;

        rounds.push(RoundStep {
            guess,
            feedback,
            candidates_before,
            candidates_after,
        });

        if feedback.is_perfect(rules) {
            writeln!(
                breaker.strategy_mut().output_mut(),
                "Solved in {} rounds!",
                rounds.len()
            )?;
            return Ok(SolveResult {
                success: true,
                secret: *maker.secret(),
                rounds,
            });
        }
    }

    writeln!(
        breaker.strategy_mut().output_mut(),
        "The secret was {}.",
        maker.secret()
    )?;
    Ok(SolveResult {
        success: false,
        secret: *maker.secret(),
        rounds,
    })
}

/// The computer breaks a secret; the human types the feedback
///
/// Feedback is read as "2 1", "2,1" or peg notation such as "BBW-".
/// Malformed feedback is reported and asked for again.
///
/// # Errors
/// Returns `SessionError` on I/O failure, when input closes mid-game, or when
/// the entered feedback contradicts itself (no code fits every answer).
pub fn run_assist<S: Strategy, R: BufRead, W: Write>(
    breaker: &mut Breaker<S>,
    max_rounds: usize,
    mut input: R,
    mut output: W,
) -> Result<AssistOutcome, SessionError> {
    let rules = breaker.rules();
    writeln!(
        output,
        "Think of a secret ({rules}). Answer each guess with black and white pegs, \
         e.g. '2 1' or 'BBW-'. Type 'quit' to stop."
    )?;

    while breaker.round() < max_rounds {
        let guess = breaker.guess()?;
        writeln!(
            output,
            "Round {}: {} candidates left, I guess {guess}",
            breaker.round() + 1,
            breaker.candidates().len()
        )?;

        let Some(feedback) = read_feedback(&mut input, &mut output, breaker)? else {
            writeln!(output, "Bye!")?;
            return Ok(AssistOutcome::Quit);
        };

        match breaker.apply_feedback(feedback) {
            Ok(remaining) => {
                if feedback.is_perfect(rules) {
                    writeln!(output, "Got it in {} rounds!", breaker.round())?;
                    return Ok(AssistOutcome::Solved {
                        rounds: breaker.round(),
                    });
                }
                if remaining <= 10 {
                    let listed: Vec<String> =
                        breaker.candidates().iter().map(ToString::to_string).collect();
                    writeln!(output, "  still possible: {}", listed.join(" "))?;
                }
            }
            Err(err @ BreakerError::CandidatesExhausted { .. }) => {
                let history: Vec<(_, _)> = breaker.history().collect();
                if let Some(round) = first_contradiction(breaker, &history) {
                    writeln!(
                        output,
                        "No code fits your answers; round {round} contradicts the rounds before it."
                    )?;
                }
                return Err(err.into());
            }
            Err(err) => return Err(err.into()),
        }
    }

    writeln!(output, "Out of rounds.")?;
    Ok(AssistOutcome::OutOfRounds)
}

/// Read feedback until it parses; `None` means the human quit
fn read_feedback<S: Strategy, R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    breaker: &Breaker<S>,
) -> Result<Option<Feedback>, SessionError> {
    loop {
        write!(output, "Feedback: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }

        match line.trim().to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => return Ok(None),
            "win" | "solved" | "yes" => return Ok(Some(Feedback::perfect(breaker.rules()))),
            _ => {}
        }

        match Feedback::parse(&line, breaker.rules()) {
            Ok(feedback) => return Ok(Some(feedback)),
            Err(e) => writeln!(output, "Invalid feedback: {e}")?,
        }
    }
}

/// First round (1-based) after which no universe code fits the answers
fn first_contradiction<S: Strategy>(
    breaker: &Breaker<S>,
    history: &[(Code, Feedback)],
) -> Option<usize> {
    (1..=history.len()).find(|&n| filter_by_history(breaker.universe(), &history[..n]).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rules;
    use crate::solver::{FirstCandidateStrategy, MinimaxStrategy};

    fn code(value: u64) -> Code {
        Code::from_integer(value, Rules::CLASSIC).unwrap()
    }

    #[test]
    fn human_play_solves() {
        let maker = CodeMaker::new(code(1234));
        let input = "1122\nnope\n1234\n".as_bytes();
        let mut output = Vec::new();

        let result = run_human(&maker, 10, input, &mut output).unwrap();

        assert!(result.success);
        assert_eq!(result.rounds_played(), 2);
        assert_eq!(result.rounds[0].feedback, Feedback::new(1, 1));
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("1122  ●○··"));
        assert!(text.contains("Invalid code"));
        assert!(text.contains("Solved in 2 rounds!"));
    }

    #[test]
    fn human_play_quits() {
        let maker = CodeMaker::new(code(1234));
        let mut output = Vec::new();

        let result = run_human(&maker, 10, "5555\nquit\n".as_bytes(), &mut output).unwrap();

        assert!(!result.success);
        assert_eq!(result.rounds_played(), 1);
        assert!(String::from_utf8(output).unwrap().contains("The secret was 1234."));
    }

    #[test]
    fn human_play_out_of_rounds() {
        let maker = CodeMaker::new(code(6543));
        let input = "1111\n2222\n3333\n".as_bytes();

        let result = run_human(&maker, 2, input, Vec::new()).unwrap();

        assert!(!result.success);
        assert_eq!(result.rounds_played(), 2);
    }

    #[test]
    fn assist_solves_with_honest_feedback() {
        let secret = code(3632);
        let mut breaker = Breaker::with_rules(Rules::CLASSIC, MinimaxStrategy::new());

        // Precompute the answers an honest human would type
        let mut replay = Breaker::with_rules(Rules::CLASSIC, MinimaxStrategy::new());
        let mut lines = String::new();
        loop {
            let guess = replay.guess().unwrap();
            let feedback = secret.compare(&guess);
            lines.push_str(&format!("{} {}\n", feedback.exact(), feedback.color_only()));
            replay.apply_feedback(feedback).unwrap();
            if feedback.is_perfect(Rules::CLASSIC) {
                break;
            }
        }

        let mut output = Vec::new();
        let outcome = run_assist(&mut breaker, 10, lines.as_bytes(), &mut output).unwrap();

        assert_eq!(
            outcome,
            AssistOutcome::Solved {
                rounds: replay.round()
            }
        );
        assert!(String::from_utf8(output).unwrap().contains("I guess 1122"));
    }

    #[test]
    fn assist_accepts_peg_notation_and_reprompts() {
        let universe = vec![code(6666), code(5555), code(4444)];
        let mut breaker = Breaker::new(universe, MinimaxStrategy::new()).unwrap();
        let mut output = Vec::new();

        // The 1122 opening scores nothing against all three, then 6666 is guessed
        let input = "----\n??\nBBBB\n".as_bytes();
        let outcome = run_assist(&mut breaker, 10, input, &mut output).unwrap();

        assert_eq!(outcome, AssistOutcome::Solved { rounds: 2 });
        assert!(String::from_utf8(output).unwrap().contains("Invalid feedback"));
    }

    #[test]
    fn assist_reports_contradiction() {
        let mut breaker = Breaker::with_rules(Rules::CLASSIC, MinimaxStrategy::new());
        let mut output = Vec::new();

        // Input runs out mid-game
        let result = run_assist(&mut breaker, 10, "0 0\n".as_bytes(), &mut output);
        assert!(matches!(result, Err(SessionError::InputClosed)));

        let mut breaker = Breaker::new(vec![code(1111), code(2222)], FirstCandidateStrategy).unwrap();
        let result = run_assist(&mut breaker, 10, "0 1\n".as_bytes(), &mut output);

        assert!(matches!(
            result,
            Err(SessionError::Breaker(BreakerError::CandidatesExhausted { .. }))
        ));
        assert!(String::from_utf8(output).unwrap().contains("round 1 contradicts"));
    }

    #[test]
    fn assist_quit_and_out_of_rounds() {
        let mut breaker = Breaker::with_rules(Rules::CLASSIC, MinimaxStrategy::new());
        let outcome = run_assist(&mut breaker, 10, "quit\n".as_bytes(), Vec::new()).unwrap();
        assert_eq!(outcome, AssistOutcome::Quit);

        let mut breaker = Breaker::with_rules(Rules::CLASSIC, MinimaxStrategy::new());
        let outcome = run_assist(&mut breaker, 1, "0 0\n".as_bytes(), Vec::new()).unwrap();
        assert_eq!(outcome, AssistOutcome::OutOfRounds);
    }
}
