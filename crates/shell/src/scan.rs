// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-pass quote/escape scanner shared by every check.
//!
//! [`Source::scan`] walks the command once and classifies each character.
//! Structural checks only ever look at [`CharClass::Plain`] characters, so an
//! operator inside quotes, after a backslash, inside a here-document body or
//! inside a comment is never mistaken for syntax.
//!
//! Quoting rules:
//!
//! - inside `'...'` a backslash is literal and nothing else is special
//! - inside `"..."` and unquoted text a backslash escapes the next character
//! - a backtick region is treated as its own exclusive quote (an
//!   approximation: real shells parse a nested command there)

use crate::span::Span;

/// Classification of one character of the command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CharClass {
    /// Unquoted, unescaped; may be syntax.
    Plain,
    /// Inside an open quote region.
    Quoted,
    /// A quote character that opened or closed a region.
    QuoteMark,
    /// A backslash that escapes the following character.
    Escape,
    /// The character following an escaping backslash.
    Escaped,
    /// Part of a here-document body (including its terminator line).
    HereDoc,
    /// Part of a `#` comment.
    Comment,
}

/// Quote/escape state while walking the command.
///
/// Each open quote remembers the offset of its opening character so an
/// unclosed quote can be reported where it began.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ScanState {
    pub single_quote: Option<usize>,
    pub double_quote: Option<usize>,
    pub backtick: Option<usize>,
    pub escaped: bool,
}

impl ScanState {
    /// True while any quote region is open.
    pub fn in_quotes(&self) -> bool {
        self.single_quote.is_some() || self.double_quote.is_some() || self.backtick.is_some()
    }

    /// Advance over the character `ch` at `pos` and classify it.
    pub fn step(&mut self, pos: usize, ch: char) -> CharClass {
        if self.escaped {
            self.escaped = false;
            return CharClass::Escaped;
        }

        match ch {
            '\\' if self.double_quote.is_some()
                || (self.single_quote.is_none() && self.backtick.is_none()) =>
            {
                self.escaped = true;
                CharClass::Escape
            }
            '\'' if self.double_quote.is_none() && self.backtick.is_none() => {
                toggle(&mut self.single_quote, pos);
                CharClass::QuoteMark
            }
            '"' if self.single_quote.is_none() && self.backtick.is_none() => {
                toggle(&mut self.double_quote, pos);
                CharClass::QuoteMark
            }
            '`' if self.single_quote.is_none() => {
                toggle(&mut self.backtick, pos);
                CharClass::QuoteMark
            }
            _ if self.in_quotes() => CharClass::Quoted,
            _ => CharClass::Plain,
        }
    }
}

fn toggle(slot: &mut Option<usize>, pos: usize) {
    *slot = match slot {
        Some(_) => None,
        None => Some(pos),
    };
}

/// A pending here-document whose body starts after the next newline.
#[derive(Debug)]
struct HereDocMarker {
    delimiter: String,
    strip_tabs: bool,
}

/// Tracks `((...))` / `$((...))` arithmetic, where `<<` is a shift rather
/// than a here-document.
#[derive(Debug, Default)]
struct Arithmetic {
    depth: usize,
    /// Parenthesis depth outside each open `((`.
    opened_at: Vec<usize>,
}

impl Arithmetic {
    fn step(&mut self, chars: &[char], pos: usize) {
        match chars[pos] {
            '(' => {
                let doubled = chars.get(pos + 1) == Some(&'(');
                let continues = pos > 0 && chars[pos - 1] == '(';
                if doubled && !continues {
                    self.opened_at.push(self.depth);
                }
                self.depth += 1;
            }
            ')' => {
                self.depth = self.depth.saturating_sub(1);
                if self.opened_at.last() == Some(&self.depth) {
                    self.opened_at.pop();
                }
            }
            _ => {}
        }
    }

    fn is_open(&self) -> bool {
        !self.opened_at.is_empty()
    }
}

/// A whitespace/operator-delimited word of the command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Word {
    pub text: String,
    pub span: Span,
    /// Whether any part of the word was quoted or escaped. Such words are
    /// never reserved words.
    pub quoted: bool,
}

impl Word {
    /// True when this is the bare (unquoted) word `keyword`.
    pub fn is_bare(&self, keyword: &str) -> bool {
        !self.quoted && self.text == keyword
    }
}

/// Characters that end a word when unquoted.
pub(crate) fn is_word_break(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, ';' | '|' | '&' | '<' | '>' | '(' | ')' | '{' | '}')
}

/// A scanned command: its characters, their classes and the quote state
/// left open at the end of input.
#[derive(Debug)]
pub(crate) struct Source<'a> {
    text: &'a str,
    chars: Vec<char>,
    byte_offsets: Vec<usize>,
    classes: Vec<CharClass>,
    end_state: ScanState,
    snippet_width: usize,
}

impl<'a> Source<'a> {
    /// Scan `text` in one left-to-right pass.
    pub fn scan(text: &'a str, snippet_width: usize) -> Self {
        let (byte_offsets, chars): (Vec<usize>, Vec<char>) = text.char_indices().unzip();
        let mut classes = Vec::with_capacity(chars.len());
        let mut state = ScanState::default();
        let mut pending: Vec<HereDocMarker> = Vec::new();
        let mut arithmetic = Arithmetic::default();
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];
            let class = state.step(i, ch);

            if class == CharClass::Plain && ch == '#' && starts_word(&chars, &classes, i) {
                while i < chars.len() && chars[i] != '\n' {
                    classes.push(CharClass::Comment);
                    i += 1;
                }
                continue;
            }

            if class == CharClass::Plain {
                arithmetic.step(&chars, i);
            }

            if class == CharClass::Plain && ch == '<' && !arithmetic.is_open() {
                if let Some(marker) = here_doc_marker(&chars, i) {
                    pending.push(marker);
                }
            }

            classes.push(class);
            i += 1;

            if class == CharClass::Plain && ch == '\n' && !pending.is_empty() {
                i = skip_here_doc_bodies(&chars, i, &mut pending, &mut classes);
            }
        }

        Self {
            text,
            chars,
            byte_offsets,
            classes,
            end_state: state,
            snippet_width,
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn char_at(&self, pos: usize) -> Option<char> {
        self.chars.get(pos).copied()
    }

    pub fn class_at(&self, pos: usize) -> Option<CharClass> {
        self.classes.get(pos).copied()
    }

    /// True when the character at `pos` is unquoted, unescaped syntax.
    pub fn is_plain(&self, pos: usize) -> bool {
        self.class_at(pos) == Some(CharClass::Plain)
    }

    /// True when the character at `pos` is the unquoted character `ch`.
    pub fn is_plain_char(&self, pos: usize, ch: char) -> bool {
        self.is_plain(pos) && self.char_at(pos) == Some(ch)
    }

    /// Quote state at end of input.
    pub fn end_state(&self) -> ScanState {
        self.end_state
    }

    /// Convert a byte offset into the text into a character offset.
    pub fn char_offset(&self, byte: usize) -> usize {
        self.byte_offsets.partition_point(|&b| b < byte)
    }

    /// Bounded context snippet around `pos` for error messages.
    pub fn snippet(&self, pos: usize) -> String {
        crate::span::context_snippet(self.text, pos, self.snippet_width)
    }

    /// Offset of the first character that is neither whitespace nor comment.
    pub fn first_significant(&self) -> Option<usize> {
        (0..self.len()).find(|&i| self.is_significant(i))
    }

    /// Offset of the last character that is neither whitespace nor comment.
    pub fn last_significant(&self) -> Option<usize> {
        (0..self.len()).rev().find(|&i| self.is_significant(i))
    }

    fn is_significant(&self, pos: usize) -> bool {
        self.classes[pos] != CharClass::Comment && !self.chars[pos].is_whitespace()
    }

    /// Split the unquoted portion of the command into words.
    pub fn words(&self) -> Vec<Word> {
        let mut words = Vec::new();
        let mut current: Option<Word> = None;

        for (i, (&ch, &class)) in self.chars.iter().zip(&self.classes).enumerate() {
            let breaks = match class {
                CharClass::Plain => is_word_break(ch),
                CharClass::HereDoc | CharClass::Comment => true,
                _ => false,
            };
            if breaks {
                words.extend(current.take());
                continue;
            }

            let word = current.get_or_insert_with(|| Word {
                text: String::new(),
                span: Span::new(i, i),
                quoted: false,
            });
            word.span.end = i + 1;
            match class {
                CharClass::Plain => word.text.push(ch),
                CharClass::Quoted | CharClass::Escaped => {
                    word.quoted = true;
                    word.text.push(ch);
                }
                _ => word.quoted = true,
            }
        }
        words.extend(current);
        words
    }

    /// The command with here-document bodies and comments blanked out, for
    /// handing to a word tokenizer. Character offsets are preserved.
    pub fn tokenizable(&self) -> String {
        self.chars
            .iter()
            .zip(&self.classes)
            .map(|(&ch, &class)| match class {
                CharClass::HereDoc | CharClass::Comment => ' ',
                _ => ch,
            })
            .collect()
    }
}

// `#` only starts a comment at the beginning of a word. A brace does not
// end a word here, so `${#var}` stays a length expansion.
fn starts_word(chars: &[char], classes: &[CharClass], pos: usize) -> bool {
    if pos == 0 {
        return true;
    }
    let prev = chars[pos - 1];
    matches!(classes[pos - 1], CharClass::Plain | CharClass::HereDoc)
        && (prev.is_whitespace() || matches!(prev, ';' | '|' | '&' | '(' | ')' | '<' | '>'))
}

// Recognise `<<WORD` / `<<-WORD` (but not `<<<`) starting at `pos`.
fn here_doc_marker(chars: &[char], pos: usize) -> Option<HereDocMarker> {
    let prev = pos.checked_sub(1).map(|p| chars[p]);
    if prev == Some('<') || chars.get(pos + 1) != Some(&'<') || chars.get(pos + 2) == Some(&'<') {
        return None;
    }

    let mut j = pos + 2;
    let strip_tabs = chars.get(j) == Some(&'-');
    if strip_tabs {
        j += 1;
    }
    while matches!(chars.get(j), Some(' ') | Some('\t')) {
        j += 1;
    }

    let mut delimiter = String::new();
    while let Some(&ch) = chars.get(j) {
        if ch.is_whitespace() || matches!(ch, ';' | '|' | '&' | '<' | '>' | '(' | ')') {
            break;
        }
        if !matches!(ch, '\'' | '"' | '\\') {
            delimiter.push(ch);
        }
        j += 1;
    }

    (!delimiter.is_empty()).then_some(HereDocMarker {
        delimiter,
        strip_tabs,
    })
}

// Mark here-document body lines starting at `pos` (the first character after
// a newline). Returns the offset just past the last consumed body line.
fn skip_here_doc_bodies(
    chars: &[char],
    mut pos: usize,
    pending: &mut Vec<HereDocMarker>,
    classes: &mut Vec<CharClass>,
) -> usize {
    for marker in pending.drain(..) {
        while pos < chars.len() {
            let line_end = chars[pos..]
                .iter()
                .position(|&c| c == '\n')
                .map_or(chars.len(), |n| pos + n);
            let line: String = chars[pos..line_end].iter().collect();
            let candidate = if marker.strip_tabs {
                line.trim_start_matches('\t')
            } else {
                line.as_str()
            };
            let terminated = candidate == marker.delimiter;

            let next = (line_end + 1).min(chars.len());
            classes.extend(std::iter::repeat(CharClass::HereDoc).take(next - pos));
            pos = next;

            if terminated {
                break;
            }
        }
    }
    pos
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
