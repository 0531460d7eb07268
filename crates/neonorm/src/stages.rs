// The individual pipeline stages.
//
// Each stage is a total &str -> String function. They are only meaningful in
// the order of `Stage::ALL`; later stages rely on fixed points reached by
// earlier ones (e.g. boundary-space removal assumes spaces are already
// collapsed).

use std::fmt;

use neonorm_model::{space_removable, tables::LONG_VOWEL_MARK};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

static LONG_VOWEL_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new("ー{2,}").expect("valid long vowel regex"));
static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(" {2,}").expect("valid space regex"));

const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Pipeline stages in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    /// Unicode NFKC.
    Nfkc,
    /// Hyphens, long vowel marks, tildes and symbol widening in one pass.
    Substitute,
    CollapseLongVowels,
    CanonicalizeWhitespace,
    RemoveBoundarySpaces,
    /// Symbols back to half-width, then trim.
    NarrowAndTrim,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Nfkc,
        Stage::Substitute,
        Stage::CollapseLongVowels,
        Stage::CanonicalizeWhitespace,
        Stage::RemoveBoundarySpaces,
        Stage::NarrowAndTrim,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Stage::Nfkc => "nfkc",
            Stage::Substitute => "substitute",
            Stage::CollapseLongVowels => "collapse-long-vowels",
            Stage::CanonicalizeWhitespace => "canonicalize-whitespace",
            Stage::RemoveBoundarySpaces => "remove-boundary-spaces",
            Stage::NarrowAndTrim => "narrow-and-trim",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

pub fn nfkc(input: &str) -> String {
    input.nfkc().collect()
}

/// Replace every run of two or more `ー` with a single one.
pub fn collapse_long_vowels(input: &str) -> String {
    LONG_VOWEL_RUN.replace_all(input, LONG_VOWEL_MARK).into_owned()
}

/// Ideographic spaces become ASCII spaces, then runs of spaces collapse to one.
pub fn canonicalize_whitespace(input: &str) -> String {
    let narrowed = input.replace(IDEOGRAPHIC_SPACE, " ");
    SPACE_RUN.replace_all(&narrowed, " ").into_owned()
}

/// Drop each single space whose neighbours are dense/dense, dense/latin or
/// latin/dense.
///
/// Removing one space never changes the neighbours of another, so one pass
/// reaches the same result as re-scanning until nothing matches. Input must
/// not contain runs of spaces (see [`canonicalize_whitespace`]).
pub fn remove_boundary_spaces(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());

    for (i, &c) in chars.iter().enumerate() {
        if c == ' ' && i > 0 && i + 1 < chars.len() && space_removable(chars[i - 1], chars[i + 1]) {
            continue;
        }
        out.push(c);
    }

    out
}

/// Strip leading and trailing ASCII spaces only.
pub fn trim_spaces(input: &str) -> &str {
    input.trim_matches(' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Repeat-until-no-match formulation, kept as the reference for
    /// `remove_boundary_spaces`.
    fn remove_boundary_spaces_iterative(input: &str) -> String {
        let dense = r"\x{4E00}-\x{9FFF}\x{3040}-\x{309F}\x{30A0}-\x{30FF}\x{3000}-\x{303F}\x{FF00}-\x{FFEF}";
        let latin = r"\x{0000}-\x{007F}";
        let patterns = [
            format!("([{dense}]) ([{dense}])"),
            format!("([{dense}]) ([{latin}])"),
            format!("([{latin}]) ([{dense}])"),
        ];

        let mut s = input.to_string();
        for pattern in &patterns {
            let re = Regex::new(pattern).unwrap();
            while re.is_match(&s) {
                s = re.replace_all(&s, "$1$2").into_owned();
            }
        }
        s
    }

    #[test]
    fn test_stage_order_and_names() {
        assert_eq!(Stage::ALL[0], Stage::Nfkc);
        assert_eq!(Stage::ALL[5], Stage::NarrowAndTrim);
        assert_eq!(Stage::CollapseLongVowels.to_string(), "collapse-long-vowels");
    }

    #[test]
    fn test_nfkc_full_width_and_half_width_kana() {
        assert_eq!(nfkc("ＡＢＣ１２３"), "ABC123");
        assert_eq!(nfkc("ﾊﾝｶｸ"), "ハンカク");
        assert_eq!(nfkc("ｶﾞ"), "ガ");
        assert_eq!(nfkc("　"), " ");
        assert_eq!(nfkc(""), "");
    }

    #[test]
    fn test_collapse_long_vowels() {
        assert_eq!(collapse_long_vowels("スーパーーーー"), "スーパー");
        assert_eq!(collapse_long_vowels("ーー"), "ー");
        assert_eq!(collapse_long_vowels("ー"), "ー");
        assert_eq!(collapse_long_vowels("a--b"), "a--b");
    }

    #[test]
    fn test_canonicalize_whitespace() {
        assert_eq!(canonicalize_whitespace("ゼンカク　スペース"), "ゼンカク スペース");
        assert_eq!(canonicalize_whitespace("a \u{3000}  b"), "a b");
        assert_eq!(canonicalize_whitespace("   "), " ");
        // Tabs and newlines are left alone
        assert_eq!(canonicalize_whitespace("a\t\tb\n"), "a\t\tb\n");
    }

    #[test]
    fn test_remove_boundary_spaces() {
        assert_eq!(remove_boundary_spaces("検索 エンジン 自作"), "検索エンジン自作");
        assert_eq!(remove_boundary_spaces("アルゴリズム C"), "アルゴリズムC");
        assert_eq!(remove_boundary_spaces("C アルゴリズム"), "Cアルゴリズム");
        assert_eq!(remove_boundary_spaces("Coding the Matrix"), "Coding the Matrix");
        assert_eq!(remove_boundary_spaces(" あ "), " あ ");
        assert_eq!(remove_boundary_spaces("café あ"), "café あ");
    }

    #[test]
    fn test_remove_boundary_spaces_matches_iterative() {
        let cases = [
            "ア イ ウ エ オ",
            "検索 エンジン 自作 入門 を 買い ました！！！",
            " PRML 副 読 本 ",
            "南アルプスの 天然水 Sparking Lemon レモン一絞り",
            "天然水－ Sparking＊ Lemon＋ レモン",
            "a b c",
            "a あ b い c",
            "é あ ü",
            "x",
            " ",
            "",
        ];
        for case in cases {
            assert_eq!(
                remove_boundary_spaces(case),
                remove_boundary_spaces_iterative(case),
                "diverged on {case:?}"
            );
        }
    }

    #[test]
    fn test_trim_spaces() {
        assert_eq!(trim_spaces("   おお   "), "おお");
        assert_eq!(trim_spaces("\u{3000}あ"), "\u{3000}あ");
        assert_eq!(trim_spaces("\tあ "), "\tあ");
    }
}
