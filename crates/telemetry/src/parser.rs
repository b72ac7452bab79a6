//! Trajectory extraction
//!
//! [`TrajectoryParser`] scans a log line by line, keeping the running
//! `(time, bound, objective)` of the solve:
//!
//! 1. Each word is classified; tokens before the first progress prefix of a
//!    line are ignored.
//! 2. Time tokens overwrite the running time after monotonic repair.
//! 3. Window tokens overwrite bound and objective; the first one of the parse
//!    also fixes the domain bound.
//! 4. At the end of an event line one sample is recorded and the running
//!    values carry into the next line. A terminal line records a final sample
//!    and ends the scan.

use crate::classify::{classify_word, LineState, Token};
use crate::gap::optimality_gap;
use solverstats_core::{ProgressSample, Trajectory};
use tracing::{debug, trace, warn};

/// What a fed line did to the trajectory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Not a progress line
    Ignored,
    /// An event line; one sample recorded
    Sampled,
    /// The terminal line; the final sample was recorded
    Terminated,
    /// The log already terminated; the line was not looked at
    AfterTerminal,
}

/// Apply the monotonic-time policy to a freshly read time.
///
/// A time that does not move past `previous` is replaced with `previous + 1`
/// in strict mode and with `previous` otherwise.
///
/// ```
/// use solverstats_telemetry::repair_time;
///
/// assert_eq!(repair_time(5000, 3000, false), 5000);
/// assert_eq!(repair_time(5000, 3000, true), 5001);
/// assert_eq!(repair_time(5000, 9000, true), 9000);
/// ```
pub fn repair_time(previous: u64, value: u64, strict: bool) -> u64 {
    if value > previous {
        value
    } else if strict {
        previous.saturating_add(1)
    } else {
        previous
    }
}

/// Incremental progress-log parser
#[derive(Debug, Clone)]
pub struct TrajectoryParser {
    strict: bool,
    time_ms: u64,
    bound: i64,
    objective: i64,
    domain_bound: Option<i64>,
    samples: Vec<ProgressSample>,
    terminated: bool,
    undefined_gaps: usize,
}

impl TrajectoryParser {
    /// Create a parser; `strict` makes repaired times strictly increasing
    pub fn new(strict: bool) -> Self {
        TrajectoryParser {
            strict,
            time_ms: 0,
            bound: 0,
            objective: 0,
            domain_bound: None,
            samples: Vec::new(),
            terminated: false,
            undefined_gaps: 0,
        }
    }

    /// True once a terminal line was seen
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Samples recorded so far
    pub fn samples(&self) -> &[ProgressSample] {
        &self.samples
    }

    /// Scan one line
    pub fn feed_line(&mut self, line: &str) -> LineOutcome {
        if self.terminated {
            return LineOutcome::AfterTerminal;
        }

        let mut state = LineState::Idle;
        for word in line.split_whitespace() {
            let token = classify_word(word);
            state = state.advance(token);
            if state.is_active() {
                self.apply(token, word);
            }
        }

        match state {
            LineState::Idle => LineOutcome::Ignored,
            LineState::Event => {
                self.record();
                LineOutcome::Sampled
            }
            LineState::Terminal => {
                self.record();
                self.terminated = true;
                LineOutcome::Terminated
            }
        }
    }

    fn apply(&mut self, token: Token, word: &str) {
        match token {
            Token::Elapsed(ms) => {
                self.time_ms = repair_time(self.time_ms, ms, self.strict);
            }
            Token::Window { lower, upper } => match upper.checked_add(1) {
                Some(objective) => {
                    self.bound = lower;
                    self.objective = objective;
                    if self.domain_bound.is_none() {
                        self.domain_bound = Some(objective);
                        debug!("Domain bound {} from first window", objective);
                    }
                }
                None => trace!("Skipping window with overflowing upper end: {}", word),
            },
            Token::Malformed => trace!("Skipping malformed token: {}", word),
            _ => {}
        }
    }

    fn record(&mut self) {
        let gap_percent = match optimality_gap(self.bound, self.objective) {
            Ok(gap) => Some(gap),
            Err(e) => {
                trace!("{}", e);
                self.undefined_gaps += 1;
                None
            }
        };

        self.samples.push(ProgressSample {
            time_ms: self.time_ms,
            bound: self.bound,
            objective: self.objective,
            gap_percent,
        });
    }

    /// Finish the parse
    pub fn finish(self) -> Trajectory {
        if self.undefined_gaps > 0 {
            warn!(
                "{} of {} samples have an undefined gap (objective 0)",
                self.undefined_gaps,
                self.samples.len()
            );
        }
        debug!(
            "Extracted {} samples (terminated: {})",
            self.samples.len(),
            self.terminated
        );
        Trajectory::from_parts(self.samples, self.domain_bound, self.terminated)
    }
}

/// Extract the trajectory of a whole log
///
/// An empty log yields an empty trajectory without being scanned. Lines end
/// at `\n`; a trailing `\r` is ignored.
pub fn extract(log_text: &str, strict_monotonic: bool) -> Trajectory {
    if log_text.is_empty() {
        return Trajectory::empty();
    }

    let mut parser = TrajectoryParser::new(strict_monotonic);
    for line in log_text.lines() {
        if parser.feed_line(line) == LineOutcome::Terminated {
            break;
        }
    }
    parser.finish()
}
