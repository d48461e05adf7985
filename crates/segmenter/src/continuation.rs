use crate::config::ContinuationMode;

/// Last line of a wrapped definition header, e.g. `) -> None:`.
///
/// Such a line may sit at or left of the header's column while still belonging
/// to the header, so it must not close any open block. This only recognises
/// the trailing-paren formatting convention; [`ContinuationMode::BracketDepth`]
/// tracks bracket nesting instead.
#[must_use]
pub fn is_continuation_tail(line: &str) -> bool {
    let stripped = line.trim();
    stripped.starts_with(')') && stripped.ends_with(':')
}

/// Per-line view of where logical statements begin.
pub(crate) struct LineLayout {
    mode: ContinuationMode,
    continued: Vec<bool>,
    logical_start: Vec<usize>,
}

impl LineLayout {
    pub(crate) fn new<S: AsRef<str>>(lines: &[S], mode: ContinuationMode) -> Self {
        match mode {
            ContinuationMode::TrailingParen => Self {
                mode,
                continued: lines
                    .iter()
                    .map(|line| is_continuation_tail(line.as_ref()))
                    .collect(),
                logical_start: (0..lines.len()).collect(),
            },
            ContinuationMode::BracketDepth => Self::from_brackets(lines),
        }
    }

    fn from_brackets<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut scanner = BracketScanner::default();
        let mut continued = Vec::with_capacity(lines.len());
        let mut logical_start: Vec<usize> = Vec::with_capacity(lines.len());

        for (index, line) in lines.iter().enumerate() {
            let inside = scanner.pending();
            continued.push(inside);
            let start = match logical_start.last() {
                Some(&previous) if inside => previous,
                _ => index,
            };
            logical_start.push(start);
            scanner.feed(line.as_ref());
        }

        Self {
            mode: ContinuationMode::BracketDepth,
            continued,
            logical_start,
        }
    }

    /// The line must not pop any open block.
    pub(crate) fn suppresses_close(&self, index: usize) -> bool {
        self.continued.get(index).copied().unwrap_or(false)
    }

    /// The line belongs to a statement started earlier and takes no part in nesting at all.
    pub(crate) fn is_inside_statement(&self, index: usize) -> bool {
        self.mode == ContinuationMode::BracketDepth && self.suppresses_close(index)
    }

    /// First physical line of the logical statement containing `index`.
    pub(crate) fn logical_start(&self, index: usize) -> usize {
        self.logical_start.get(index).copied().unwrap_or(index)
    }

    /// Header of a block whose first body line is `body_index`.
    ///
    /// `previous_non_blank` is the last non-blank line seen before the body.
    pub(crate) fn header_for_block(&self, body_index: usize, previous_non_blank: usize) -> usize {
        match self.mode {
            ContinuationMode::TrailingParen => body_index - 1,
            ContinuationMode::BracketDepth => self.logical_start(previous_non_blank),
        }
    }
}

#[derive(Clone, Copy)]
struct OpenString {
    quote: char,
    triple: bool,
}

/// Lexical state carried from one line to the next.
#[derive(Default)]
struct BracketScanner {
    depth: usize,
    string: Option<OpenString>,
    backslash: bool,
}

impl BracketScanner {
    /// Whether the next line starts inside an unfinished statement.
    fn pending(&self) -> bool {
        self.depth > 0 || self.backslash || self.string.is_some_and(|open| open.triple)
    }

    fn feed(&mut self, line: &str) {
        self.backslash = false;
        let chars: Vec<char> = line.chars().collect();
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];

            if let Some(open) = self.string {
                if ch == '\\' {
                    i += 2;
                    continue;
                }
                if ch == open.quote {
                    if !open.triple {
                        self.string = None;
                    } else if repeats(&chars, i, ch) {
                        self.string = None;
                        i += 3;
                        continue;
                    }
                }
                i += 1;
                continue;
            }

            match ch {
                '#' => break,
                '\'' | '"' => {
                    let triple = repeats(&chars, i, ch);
                    self.string = Some(OpenString { quote: ch, triple });
                    i += if triple { 3 } else { 1 };
                    continue;
                }
                '(' | '[' | '{' => self.depth += 1,
                ')' | ']' | '}' => self.depth = self.depth.saturating_sub(1),
                '\\' if i + 1 == chars.len() => self.backslash = true,
                _ => {}
            }
            i += 1;
        }

        // single-quoted literals end with the line
        if self.string.is_some_and(|open| !open.triple) {
            self.string = None;
        }
    }
}

fn repeats(chars: &[char], at: usize, quote: char) -> bool {
    chars.get(at + 1) == Some(&quote) && chars.get(at + 2) == Some(&quote)
}
