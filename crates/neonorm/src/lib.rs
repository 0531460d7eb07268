//! Deterministic normalization of Japanese text ahead of tokenization.
//!
//! Folds full-width/half-width variants, hyphen, long vowel and tilde
//! look-alikes, and stray whitespace into one canonical form, following the
//! mecab-ipadic-NEologd conventions.
//!
//! ```
//! assert_eq!(neonorm::normalize("ﾊﾝｶｸ　ｽﾍﾟｰｽ"), "ハンカクスペース");
//! ```

use once_cell::sync::Lazy;
use serde::Serialize;
use thiserror::Error;

use neonorm_model::{tables, TableError};

pub mod replacer;
pub mod stages;

pub use replacer::Replacer;
pub use stages::Stage;

/// Failure to compile the substitution tables.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error("failed to compile substitution automaton: {0}")]
    Automaton(#[from] aho_corasick::BuildError),
}

static DEFAULT: Lazy<Normalizer> = Lazy::new(|| {
    Normalizer::new().unwrap_or_else(|e| panic!("built-in substitution tables are invalid: {e}"))
});

/// Normalize `input` with the built-in tables.
pub fn normalize(input: &str) -> String {
    DEFAULT.normalize(input)
}

/// Normalize `input` with the built-in tables, recording every stage.
pub fn trace(input: &str) -> Trace {
    DEFAULT.trace(input)
}

/// Output of a single stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageOutput {
    pub stage: Stage,
    pub output: String,
}

/// Intermediate results of one normalization run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trace {
    pub input: String,
    pub stages: Vec<StageOutput>,
    pub output: String,
}

/// The normalization pipeline with its tables compiled.
///
/// Holds only immutable data, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct Normalizer {
    substitute: Replacer,
    narrow: Replacer,
}

impl Normalizer {
    pub fn new() -> Result<Self, NormalizeError> {
        let substitute = Replacer::new(&tables::substitution_tables()?)?;
        let narrow = Replacer::new(&[tables::narrow_symbols()?])?;
        Ok(Self { substitute, narrow })
    }

    pub fn normalize(&self, input: &str) -> String {
        let mut s = input.to_string();
        for stage in Stage::ALL {
            s = self.apply(stage, &s);
            tracing::trace!(stage = %stage, output = %s, "Stage complete");
        }
        s
    }

    pub fn trace(&self, input: &str) -> Trace {
        let mut stages = Vec::with_capacity(Stage::ALL.len());
        let mut s = input.to_string();
        for stage in Stage::ALL {
            s = self.apply(stage, &s);
            stages.push(StageOutput {
                stage,
                output: s.clone(),
            });
        }
        Trace {
            input: input.to_string(),
            stages,
            output: s,
        }
    }

    /// Run a single stage on its own.
    pub fn apply(&self, stage: Stage, input: &str) -> String {
        match stage {
            Stage::Nfkc => stages::nfkc(input),
            Stage::Substitute => self.substitute.replace(input),
            Stage::CollapseLongVowels => stages::collapse_long_vowels(input),
            Stage::CanonicalizeWhitespace => stages::canonicalize_whitespace(input),
            Stage::RemoveBoundarySpaces => stages::remove_boundary_spaces(input),
            Stage::NarrowAndTrim => stages::trim_spaces(&self.narrow.replace(input)).to_string(),
        }
    }
}
