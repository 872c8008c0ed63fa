//! Whitespace tokenizer for STL text

/// Splits text into whitespace-separated tokens, tracking 1-based lines.
///
/// The most recently read token stays available through [`Tokenizer::token`];
/// it is empty once the input is exhausted.
pub(crate) struct Tokenizer<'a> {
    text: &'a str,
    pos: usize,
    line: usize,
    token: &'a str,
    token_line: usize,
    held: bool,
}

impl<'a> Tokenizer<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            line: 1,
            token: "",
            token_line: 1,
            held: false,
        }
    }

    /// Read the next token. Returns false at end of input.
    pub(crate) fn get(&mut self) -> bool {
        if self.held {
            self.held = false;
            return !self.token.is_empty();
        }
        self.skip_whitespace();
        let rest = &self.text[self.pos..];
        let len = rest
            .find(|c: char| c.is_whitespace())
            .unwrap_or(rest.len());
        self.token = &rest[..len];
        self.token_line = self.line;
        self.pos += len;
        !self.token.is_empty()
    }

    /// Read the next token and report whether it equals `word`.
    pub(crate) fn expecting(&mut self, word: &str) -> bool {
        self.get() && self.token == word
    }

    /// Push the current token back so the next [`Tokenizer::get`] returns
    /// it again.
    pub(crate) fn unget(&mut self) {
        self.held = true;
    }

    pub(crate) fn token(&self) -> &'a str {
        self.token
    }

    /// Line of the current token
    pub(crate) fn line(&self) -> usize {
        self.token_line
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.text[self.pos..];
        let len = rest
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(rest.len());
        self.line += rest[..len].matches('\n').count();
        self.pos += len;
    }
}

/// Parse a float the way C `strtof` does: the longest numeric prefix of
/// `token`, or `0.0` if there is none.
pub(crate) fn parse_float(token: &str) -> f32 {
    if let Ok(value) = token.parse::<f32>() {
        return value;
    }
    (1..token.len())
        .rev()
        .filter(|&end| token.is_char_boundary(end))
        .find_map(|end| token[..end].parse::<f32>().ok())
        .unwrap_or(0.0)
}
