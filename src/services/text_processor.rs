// Text Processing Service
// Sentence / paragraph splitting and small numeric helpers shared by the detector and humanizer.
// All lengths are in chars, never UTF-8 bytes.

/// Sentence terminators used for detection.
pub const DETECT_TERMINATORS: &[char] = &['。', '！', '？', '\n'];
/// Sentence terminators used when rewriting; newlines are kept inside units.
pub const REWRITE_TERMINATORS: &[char] = &['。', '！', '？'];

/// Char count (Chinese chars count as one each)
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Round to two decimals, as every reported score and ratio is.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Normalize raw input before it reaches the core: strip a BOM and unify line endings.
pub fn normalize_input(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    text.trim_start_matches('\u{feff}')
        .replace("\r\n", "\n")
        .replace('\r', "\n")
}

/// Split into trimmed, non-empty sentences on `。！？` and newlines (terminators dropped).
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(DETECT_TERMINATORS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split into trimmed, non-empty paragraphs on single newlines.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Average char length, or `None` for an empty slice.
pub fn average_char_len(items: &[&str]) -> Option<f64> {
    if items.is_empty() {
        return None;
    }
    let total: usize = items.iter().map(|s| char_len(s)).sum();
    Some(total as f64 / items.len() as f64)
}

/// Split on single-char delimiters, keeping each delimiter as its own piece.
///
/// The layout is `[content, delim, content, delim, ..., content]`: contents sit at even
/// indices and the delimiter that closes content `i` (if any) sits at `i + 1`. Content
/// pieces may be empty, e.g. the trailing piece after a final terminator.
pub fn split_keep_delimiters(text: &str, delimiters: &[char]) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        if delimiters.contains(&ch) {
            pieces.push(std::mem::take(&mut current));
            pieces.push(ch.to_string());
        } else {
            current.push(ch);
        }
    }
    pieces.push(current);
    pieces
}

/// Indices of non-blank content pieces in a [`split_keep_delimiters`] layout.
pub fn content_indices(pieces: &[String]) -> Vec<usize> {
    (0..pieces.len())
        .step_by(2)
        .filter(|&i| !pieces[i].trim().is_empty())
        .collect()
}

/// Re-pair a [`split_keep_delimiters`] layout into sentence units that carry their terminator.
pub fn sentence_units(text: &str, delimiters: &[char]) -> Vec<String> {
    let pieces = split_keep_delimiters(text, delimiters);
    let mut units = Vec::with_capacity(pieces.len() / 2 + 1);
    let mut i = 0;
    while i < pieces.len() {
        let mut unit = pieces[i].clone();
        if let Some(delim) = pieces.get(i + 1) {
            unit.push_str(delim);
        }
        units.push(unit);
        i += 2;
    }
    units
}

/// First `max_chars` chars with an ellipsis, newlines flattened; used for log previews.
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    if char_len(text) > max_chars {
        out.push_str("...");
    }
    out.replace('\n', " ")
}
