//! Built-in substitution tables.
//!
//! Conventions follow the mecab-ipadic-NEologd normalization rules:
//! <https://github.com/neologd/mecab-ipadic-neologd/wiki/Regexp.ja>

use crate::table::{SubstitutionTable, TableError};

pub const HYPHEN_MINUS: &str = "-";
pub const LONG_VOWEL_MARK: &str = "\u{30FC}"; // ー

/// Characters that look like a hyphen-minus.
pub const HYPHEN_LIKE: &[&str] = &[
    "\u{02D7}", // ˗
    "\u{058A}", // ֊
    "\u{2010}", // ‐
    "\u{2011}", // ‑
    "\u{2012}", // ‒
    "\u{2013}", // –
    "\u{2043}", // ⁃
    "\u{207B}", // ⁻
    "\u{208B}", // ₋
    "\u{2212}", // −
];

/// Characters that look like the prolonged sound mark.
pub const LONG_VOWEL_LIKE: &[&str] = &[
    "\u{FE63}", // ﹣
    "\u{FF0D}", // －
    "\u{FF70}", // ｰ
    "\u{2014}", // —
    "\u{2015}", // ―
    "\u{2500}", // ─
    "\u{2501}", // ━
];

/// Tilde-like characters, all deleted.
pub const TILDE_LIKE: &[&str] = &[
    "~",
    "\u{223C}", // ∼
    "\u{223E}", // ∾
    "\u{301C}", // 〜
    "\u{3030}", // 〰
    "\u{FF5E}", // ～
];

// Half-width symbols and their full-width counterparts, index for index.
const WIDEN_FROM: &str = "!\"#$%&'()*+,-./:;<=>?@[\u{A5}]^_`{|}~\u{FF61}\u{FF64}\u{FF65}\u{FF62}\u{FF63}";
const WIDEN_TO: &str = "！\u{201D}＃＄％＆\u{2019}（）＊＋，\u{FF0D}．／：；＜＝＞？＠［\u{FFE5}］＾＿｀｛｜｝\u{301C}\u{3002}\u{3001}\u{30FB}\u{300C}\u{300D}";

// No `＝` and no kana punctuation (。、・「」): those stay full-width.
const NARROW_FROM: &str = "！\u{201D}＃＄％＆\u{2019}（）＊＋，\u{FF0D}．／：；＜＞？＠［\u{FFE5}］＾＿｀｛｜｝\u{301C}";
const NARROW_TO: &str = "!\"#$%&'()*+,-./:;<>?@[\u{A5}]^_`{|}~";

pub fn hyphens() -> SubstitutionTable {
    SubstitutionTable::uniform("hyphens", HYPHEN_LIKE, HYPHEN_MINUS)
}

pub fn long_vowel_marks() -> SubstitutionTable {
    SubstitutionTable::uniform("long-vowel-marks", LONG_VOWEL_LIKE, LONG_VOWEL_MARK)
}

pub fn tildes() -> SubstitutionTable {
    SubstitutionTable::uniform("tildes", TILDE_LIKE, "")
}

/// Half-width ASCII and kana punctuation to full-width, applied before the
/// whitespace stages so they see a single form of every symbol.
pub fn widen_symbols() -> Result<SubstitutionTable, TableError> {
    SubstitutionTable::translate("widen-symbols", WIDEN_FROM, WIDEN_TO)
}

/// Full-width symbols back to ASCII, applied last.
pub fn narrow_symbols() -> Result<SubstitutionTable, TableError> {
    SubstitutionTable::translate("narrow-symbols", NARROW_FROM, NARROW_TO)
}

/// The tables pooled into the single simultaneous substitution pass, in
/// priority order.
pub fn substitution_tables() -> Result<Vec<SubstitutionTable>, TableError> {
    Ok(vec![hyphens(), long_vowel_marks(), tildes(), widen_symbols()?])
}
