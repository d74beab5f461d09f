//! Offset-based sentence segmentation for the highlighted grammar construct.
//!
//! The caller supplies where the construct starts and how long it is; the
//! construct itself is never searched for. Offsets count characters, and any
//! part of the span that runs past the end of the sentence is truncated.

/// Result of segmenting a sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight<'a> {
    /// No offset was given; render the sentence as-is
    Plain(&'a str),
    /// Sentence split around the highlighted span
    Segmented {
        before: &'a str,
        highlighted: &'a str,
        after: &'a str,
    },
}

impl<'a> Highlight<'a> {
    /// The segments in render order; `Plain` yields one segment
    pub fn segments(&self) -> Vec<&'a str> {
        match *self {
            Highlight::Plain(text) => vec![text],
            Highlight::Segmented {
                before,
                highlighted,
                after,
            } => vec![before, highlighted, after],
        }
    }

    /// The full sentence, reassembled
    pub fn text(&self) -> String {
        self.segments().concat()
    }
}

/// Split `sentence` into before/highlighted/after around `[offset, offset + span_len)`
pub fn highlight(sentence: &str, offset: Option<usize>, span_len: usize) -> Highlight<'_> {
    let Some(start) = offset else {
        return Highlight::Plain(sentence);
    };

    let start_byte = char_to_byte(sentence, start);
    let end_byte = char_to_byte(sentence, start.saturating_add(span_len));

    Highlight::Segmented {
        before: &sentence[..start_byte],
        highlighted: &sentence[start_byte..end_byte],
        after: &sentence[end_byte..],
    }
}

// Byte position of the `chars`-th character, clamped to the end of the string.
fn char_to_byte(s: &str, chars: usize) -> usize {
    s.char_indices()
        .nth(chars)
        .map_or(s.len(), |(byte, _)| byte)
}
