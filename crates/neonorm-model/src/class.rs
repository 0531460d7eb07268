// Character classes for boundary-space removal.
//
// Japanese text carries no inter-word spacing, so a single space between two
// dense-script characters, or between dense script and ASCII, is noise left by
// OCR, tokenizers or copy-paste. Spaces between two ASCII tokens are kept.

/// Coarse script class of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// CJK ideographs, kana, CJK symbols and the half/full-width forms block.
    Dense,
    /// U+0000..=U+007F.
    Latin,
    /// Everything else (accented Latin, Cyrillic, emoji, ...).
    Other,
}

impl CharClass {
    pub fn of(c: char) -> Self {
        match c {
            '\u{4E00}'..='\u{9FFF}'     // CJK unified ideographs
            | '\u{3040}'..='\u{309F}'   // hiragana
            | '\u{30A0}'..='\u{30FF}'   // katakana
            | '\u{3000}'..='\u{303F}'   // CJK symbols and punctuation
            | '\u{FF00}'..='\u{FFEF}'   // halfwidth and fullwidth forms
            => CharClass::Dense,
            '\u{0000}'..='\u{007F}' => CharClass::Latin,
            _ => CharClass::Other,
        }
    }

    pub fn is_dense(self) -> bool {
        self == CharClass::Dense
    }

    pub fn is_latin(self) -> bool {
        self == CharClass::Latin
    }
}

/// Whether a single space between `prev` and `next` should be dropped.
///
/// True for dense/dense, dense/latin and latin/dense adjacencies.
pub fn space_removable(prev: char, next: char) -> bool {
    let (p, n) = (CharClass::of(prev), CharClass::of(next));
    (p.is_dense() && (n.is_dense() || n.is_latin())) || (p.is_latin() && n.is_dense())
}
