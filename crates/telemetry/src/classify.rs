//! Word tokens and line classification.
//!
//! Every whitespace-separated word of a log line maps to one [`Token`].
//! Recognition is by prefix, so trailing punctuation (`0.5s,`) is tolerated.

/// A recognized word of a progress line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `#<digits>`: a new incumbent was found
    Incumbent,
    /// `#Bound`: the lower bound moved
    BoundUpdate,
    /// `#Done`: the search finished
    Done,
    /// `<seconds>s`, already converted to whole milliseconds
    Elapsed(u64),
    /// `next:[<lower>,<upper>]`
    Window {
        /// Lower end of the candidate window
        lower: i64,
        /// Upper end of the candidate window
        upper: i64,
    },
    /// `next:[]`: the candidate window is exhausted
    EmptyWindow,
    /// Looked like a time or window token but did not parse
    Malformed,
    /// Anything else
    Other,
}

/// Classify one word of a log line.
pub fn classify_word(word: &str) -> Token {
    if let Some(rest) = word.strip_prefix('#') {
        if rest.starts_with(|c: char| c.is_ascii_digit()) {
            return Token::Incumbent;
        }
        if rest.starts_with("Bound") {
            return Token::BoundUpdate;
        }
        if rest.starts_with("Done") {
            return Token::Done;
        }
        return Token::Other;
    }

    if let Some(token) = classify_elapsed(word) {
        return token;
    }

    if let Some(rest) = word.strip_prefix("next:[") {
        return classify_window(rest);
    }

    Token::Other
}

/// `[0-9.]+s` at the start of the word
fn classify_elapsed(word: &str) -> Option<Token> {
    let digits = word
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(word.len());
    if digits == 0 || !word[digits..].starts_with('s') {
        return None;
    }

    let seconds: f64 = match word[..digits].parse() {
        Ok(seconds) => seconds,
        Err(_) => return Some(Token::Malformed),
    };
    // `as` saturates for absurdly large values
    Some(Token::Elapsed((seconds * 1000.0).floor() as u64))
}

/// Body of a `next:[...]` word, after the opening bracket
fn classify_window(rest: &str) -> Token {
    if rest.starts_with(']') {
        return Token::EmptyWindow;
    }

    let parsed = rest.split_once(']').and_then(|(inner, _)| {
        let (lower, upper) = inner.split_once(',')?;
        Some((parse_int(lower)?, parse_int(upper)?))
    });

    match parsed {
        Some((lower, upper)) => Token::Window { lower, upper },
        None => Token::Malformed,
    }
}

fn parse_int(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Classification state of the line being scanned.
///
/// `Idle → Event` on an incumbent or bound prefix, `→ Terminal` on `#Done`,
/// `Event → Terminal` on an empty window. `Terminal` is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineState {
    /// No progress prefix seen yet
    #[default]
    Idle,
    /// A progress event line
    Event,
    /// The last progress line of the log
    Terminal,
}

impl LineState {
    /// State after reading `token`.
    pub fn advance(self, token: Token) -> LineState {
        match (self, token) {
            (LineState::Terminal, _) => LineState::Terminal,
            (_, Token::Done) => LineState::Terminal,
            (LineState::Idle, Token::Incumbent | Token::BoundUpdate) => LineState::Event,
            (LineState::Event, Token::EmptyWindow) => LineState::Terminal,
            (state, _) => state,
        }
    }

    /// True once a progress prefix has been seen on the line.
    pub fn is_active(self) -> bool {
        !matches!(self, LineState::Idle)
    }
}
