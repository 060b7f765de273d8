use std::fmt;

const ALEF: char = '\u{0627}';
const LAM: char = '\u{0644}';
const HAA: char = '\u{0647}';
const ALEF_MAKSURA: char = '\u{0649}';

/// Canonicalize place-name text for comparison.
///
/// Rules, in order:
/// 1. lowercase, then trim surrounding whitespace
/// 2. drop the definite article "ال" at the start of every token
/// 3. أ إ آ -> ا
/// 4. ة -> ه
/// 5. ي ی -> ى
/// 6. ٠..٩ -> 0..9
/// 7. remove tashkeel (U+064B..=U+065F)
///
/// A token starts at the beginning of the text or after any character that is
/// not alphanumeric, so "القاهرة" and "مدينة القاهرة" both lose the article
/// while "مال" keeps its letters.
///
/// The pipeline is reapplied until the output stops changing. Removing an
/// article or a mark can expose a new article or leading space (e.g.
/// "ال قاهرة", "أل..."), and a single pass would not be idempotent.
pub fn normalize(text: &str) -> String {
    let mut current = normalize_pass(text);
    loop {
        let next = normalize_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Absent input normalizes to the empty string.
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}

fn normalize_pass(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let lowered = text.to_lowercase();
    let stripped = strip_article(lowered.trim());

    stripped.chars().filter_map(fold_char).collect()
}

fn strip_article(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut prev: Option<char> = None;

    while let Some(c) = chars.next() {
        let token_start = prev.map_or(true, |p| !p.is_alphanumeric());
        if token_start && c == ALEF && chars.peek() == Some(&LAM) {
            chars.next();
            // Boundaries are judged against the input, not the output.
            prev = Some(LAM);
            continue;
        }
        out.push(c);
        prev = Some(c);
    }

    out
}

// Rules 3..=7 touch disjoint code points, so one per-char map is equivalent
// to running them one after another.
fn fold_char(c: char) -> Option<char> {
    match c {
        '\u{0623}' | '\u{0625}' | '\u{0622}' => Some(ALEF),
        '\u{0629}' => Some(HAA),
        '\u{064A}' | '\u{06CC}' => Some(ALEF_MAKSURA),
        '\u{0660}'..='\u{0669}' => {
            let digit = c as u32 - 0x0660;
            char::from_digit(digit, 10)
        }
        '\u{064B}'..='\u{065F}' => None,
        other => Some(other),
    }
}

/// Text that has already been through [`normalize`].
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn new(raw: &str) -> Self {
        NormalizedText(normalize(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Substring containment. An empty needle is contained in everything.
    pub fn contains(&self, needle: &NormalizedText) -> bool {
        self.0.contains(needle.as_str())
    }
}

impl From<&str> for NormalizedText {
    fn from(raw: &str) -> Self {
        NormalizedText::new(raw)
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
