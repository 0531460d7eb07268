// Simultaneous multi-table substitution.
//
// All tables are pooled into one leftmost-longest automaton and applied in a
// single scan. Replacement text is emitted as-is and never re-scanned, so a
// character produced by one table cannot be rewritten by another.

use std::collections::HashSet;

use aho_corasick::{AhoCorasick, MatchKind};
use neonorm_model::SubstitutionTable;

use crate::NormalizeError;

/// Compiled set of substitution tables.
#[derive(Debug, Clone)]
pub struct Replacer {
    automaton: AhoCorasick,
    replacements: Vec<String>,
}

impl Replacer {
    /// Pool `tables` in order into one replacer.
    ///
    /// When the same source appears more than once, the first registration
    /// wins and later ones are dropped.
    pub fn new(tables: &[SubstitutionTable]) -> Result<Self, NormalizeError> {
        let mut seen = HashSet::new();
        let mut patterns = Vec::new();
        let mut replacements = Vec::new();

        for table in tables {
            table.validate()?;
            for entry in &table.entries {
                if !seen.insert(entry.from.as_str()) {
                    tracing::trace!(
                        table = table.name,
                        pattern = %entry.from,
                        "Skipping shadowed pattern"
                    );
                    continue;
                }
                patterns.push(entry.from.as_str());
                replacements.push(entry.to.clone());
            }
        }

        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&patterns)?;

        tracing::debug!(
            tables = tables.len(),
            patterns = patterns.len(),
            "Compiled substitution tables"
        );

        Ok(Self {
            automaton,
            replacements,
        })
    }

    pub fn replace(&self, input: &str) -> String {
        self.automaton.replace_all(input, &self.replacements)
    }

    /// Number of distinct source patterns.
    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }
}
