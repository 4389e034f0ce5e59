//! Case-insensitive substring highlighting.
//!
//! Computes which parts of a label match the search query so the renderer can
//! emphasise them. Matching folds case one code point at a time and maps every
//! folded code point back to the character it came from. Offsets therefore stay
//! valid when lowercasing changes the length of the text (`'İ'` folds to two code
//! points), and a multi-byte character is never split.
//!
//! Ranges are half-open `(start, end)` pairs of *character* indices, the same
//! representation the UI helpers consume.

/// Folds `text` to lowercase, one code point at a time.
///
/// The filter uses this too, so a row is visible exactly when [`highlight`]
/// finds at least one match in its name.
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Returns `true` if `haystack` contains `needle`, ignoring case.
#[must_use]
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || fold_case(haystack).contains(&fold_case(needle))
}

/// Returns the character ranges of `text` that match `query`, ignoring case.
///
/// Every non-overlapping occurrence is reported, scanning left to right. An empty
/// query or a query with no occurrence yields no ranges.
///
/// # Examples
///
/// ```
/// use spellbook::app::highlight::highlight;
///
/// assert_eq!(highlight("Fireball", "ball"), vec![(4, 8)]);
/// assert_eq!(highlight("Fireball", "BALL"), vec![(4, 8)]);
/// assert!(highlight("Fireball", "").is_empty());
/// ```
#[must_use]
pub fn highlight(text: &str, query: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return Vec::new();
    }

    // (folded code point, index of the source char it came from)
    let folded: Vec<(char, usize)> = text
        .chars()
        .enumerate()
        .flat_map(|(idx, c)| c.to_lowercase().map(move |lc| (lc, idx)))
        .collect();

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    let mut pos = 0;
    while pos + needle.len() <= folded.len() {
        let window = &folded[pos..pos + needle.len()];
        if window.iter().map(|(c, _)| *c).eq(needle.iter().copied()) {
            let mut start = window[0].1;
            let end = window[needle.len() - 1].1 + 1;
            if let Some(&(_, prev_end)) = ranges.last() {
                start = start.max(prev_end);
            }
            if start < end {
                ranges.push((start, end));
            }
            pos += needle.len();
        } else {
            pos += 1;
        }
    }

    ranges
}

/// Wraps every match of `query` in `text` with `open` and `close` markers.
///
/// The casing of `text` is kept. Without a match the text comes back unchanged.
///
/// # Examples
///
/// ```
/// use spellbook::app::highlight::highlight_marked;
///
/// assert_eq!(highlight_marked("Fireball", "BALL", "[", "]"), "Fire[ball]");
/// assert_eq!(highlight_marked("Fireball", "ice", "[", "]"), "Fireball");
/// ```
#[must_use]
pub fn highlight_marked(text: &str, query: &str, open: &str, close: &str) -> String {
    apply_markers(text, &highlight(text, query), open, close)
}

/// Renders precomputed character ranges into a marked string.
#[must_use]
pub fn apply_markers(text: &str, ranges: &[(usize, usize)], open: &str, close: &str) -> String {
    if ranges.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + ranges.len() * (open.len() + close.len()));
    let mut ranges = ranges.iter().peekable();
    let mut inside = false;

    for (idx, c) in text.chars().enumerate() {
        if inside && ranges.peek().is_some_and(|&&(_, end)| idx == end) {
            out.push_str(close);
            inside = false;
            ranges.next();
        }
        if !inside && ranges.peek().is_some_and(|&&(start, _)| idx == start) {
            out.push_str(open);
            inside = true;
        }
        out.push(c);
    }
    if inside {
        out.push_str(close);
    }

    out
}
