use crate::foundation::error::{ClipcastError, ClipcastResult};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A bounded unit of source text slated for one synthesis call.
///
/// Segments are produced by [`split`], immutable once produced, and consumed
/// exactly once by the timeline builder. The index is the segment's position
/// in the split output and stays stable even when later pipeline stages skip
/// the segment.
pub struct Segment {
    /// Position in the ordered split output.
    pub index: u32,
    /// Trimmed, non-empty source text.
    pub text: String,
}

impl Segment {
    /// Number of whitespace-separated words.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Number of characters.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Split `text` into ordered segments bounded by `max_words` and `max_chars`.
///
/// The input is first split into paragraphs on line breaks, each paragraph
/// into sentence-like units (runs of text up to and including one of `.?!`,
/// terminator retained, surplus terminators in runs like `...` dropped),
/// and each oversized unit is then greedily packed
/// word by word. The word bound is checked before the character bound; the
/// overflowing word always starts the next sub-segment. A single word longer
/// than `max_chars` is emitted alone — words are never split mid-word and
/// never dropped.
pub fn split(text: &str, max_words: usize, max_chars: usize) -> ClipcastResult<Vec<Segment>> {
    if max_words == 0 {
        return Err(ClipcastError::validation("max_words must be > 0"));
    }
    if max_chars == 0 {
        return Err(ClipcastError::validation("max_chars must be > 0"));
    }
    if text.trim().is_empty() {
        return Err(ClipcastError::segmentation(
            "input text is empty or whitespace-only",
        ));
    }

    let mut out = Vec::new();
    for paragraph in text.lines() {
        let paragraph = paragraph.trim();
        if paragraph.is_empty() {
            continue;
        }
        for sentence in split_sentences(paragraph) {
            pack_sentence(&sentence, max_words, max_chars, &mut out);
        }
    }
    if out.is_empty() {
        return Err(ClipcastError::segmentation(
            "input text contains no speakable content",
        ));
    }

    Ok(out
        .into_iter()
        .enumerate()
        .map(|(i, text)| Segment {
            index: i as u32,
            text,
        })
        .collect())
}

/// Split a paragraph into sentence-like units, retaining `.?!` terminators.
///
/// A unit always contains visible non-terminator text; a terminator only
/// closes the unit when such text has accumulated, so runs like `...` or
/// `?!` keep their first terminator and drop the surplus.
fn split_sentences(paragraph: &str) -> Vec<String> {
    let mut units = Vec::new();
    let mut current = String::new();
    let mut has_content = false;
    for ch in paragraph.chars() {
        if matches!(ch, '.' | '?' | '!') {
            if has_content {
                current.push(ch);
                push_trimmed(&mut units, &current);
                current.clear();
                has_content = false;
            }
        } else {
            current.push(ch);
            if !ch.is_whitespace() {
                has_content = true;
            }
        }
    }
    if has_content {
        push_trimmed(&mut units, &current);
    }
    units
}

fn push_trimmed(units: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        units.push(trimmed.to_string());
    }
}

/// Emit `sentence` as-is when it fits both bounds, otherwise greedily pack
/// its words into bounded sub-segments.
fn pack_sentence(sentence: &str, max_words: usize, max_chars: usize, out: &mut Vec<String>) {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    if words.len() <= max_words && sentence.chars().count() <= max_chars {
        out.push(sentence.to_string());
        return;
    }

    let mut current: Vec<&str> = Vec::new();
    for word in words {
        if current.len() + 1 > max_words {
            out.push(current.join(" "));
            current = vec![word];
            continue;
        }
        let joined_chars = if current.is_empty() {
            word.chars().count()
        } else {
            current.iter().map(|w| w.chars().count() + 1).sum::<usize>() + word.chars().count()
        };
        if joined_chars > max_chars {
            if !current.is_empty() {
                out.push(current.join(" "));
            }
            current = vec![word];
        } else {
            current.push(word);
        }
    }
    if !current.is_empty() {
        out.push(current.join(" "));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/segment/splitter.rs"]
mod tests;
