use thiserror::Error;

/// A defect in a substitution table definition.
///
/// These only arise from the static tables themselves, never from the text
/// being normalized, so callers should treat them as fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("table '{table}': {from} source characters but {to} replacement characters")]
    LengthMismatch {
        table: &'static str,
        from: usize,
        to: usize,
    },

    #[error("table '{table}': entry {index} has an empty source pattern")]
    EmptyPattern { table: &'static str, index: usize },
}

/// One `from -> to` pair. An empty `to` deletes the match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub from: String,
    pub to: String,
}

/// An ordered list of substitutions.
///
/// Order matters once tables are pooled: among equally long sources the
/// earliest registered entry wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionTable {
    pub name: &'static str,
    pub entries: Vec<Substitution>,
}

impl SubstitutionTable {
    /// Map every source to the same replacement.
    pub fn uniform(name: &'static str, sources: &[&str], to: &str) -> Self {
        let entries = sources
            .iter()
            .map(|from| Substitution {
                from: (*from).to_string(),
                to: to.to_string(),
            })
            .collect();
        Self { name, entries }
    }

    /// Positional per-character mapping, like `tr(1)`: the n-th character of
    /// `from` becomes the n-th character of `to`.
    pub fn translate(name: &'static str, from: &str, to: &str) -> Result<Self, TableError> {
        let from_chars: Vec<char> = from.chars().collect();
        let to_chars: Vec<char> = to.chars().collect();
        if from_chars.len() != to_chars.len() {
            return Err(TableError::LengthMismatch {
                table: name,
                from: from_chars.len(),
                to: to_chars.len(),
            });
        }

        let entries = from_chars
            .into_iter()
            .zip(to_chars)
            .map(|(f, t)| Substitution {
                from: f.to_string(),
                to: t.to_string(),
            })
            .collect();
        Ok(Self { name, entries })
    }

    /// Reject entries that could never be matched meaningfully.
    pub fn validate(&self) -> Result<(), TableError> {
        match self.entries.iter().position(|e| e.from.is_empty()) {
            Some(index) => Err(TableError::EmptyPattern {
                table: self.name,
                index,
            }),
            None => Ok(()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the replacement for an exact source string.
    pub fn get(&self, from: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.from == from)
            .map(|e| e.to.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform() {
        let table = SubstitutionTable::uniform("dash", &["‐", "−"], "-");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("‐"), Some("-"));
        assert_eq!(table.get("−"), Some("-"));
        assert_eq!(table.get("x"), None);
    }

    #[test]
    fn test_uniform_deletion() {
        let table = SubstitutionTable::uniform("wave", &["〜"], "");
        assert_eq!(table.get("〜"), Some(""));
    }

    #[test]
    fn test_translate_positional() {
        let table = SubstitutionTable::translate("width", "!｡", "！。").unwrap();
        assert_eq!(table.entries[0].from, "!");
        assert_eq!(table.entries[0].to, "！");
        assert_eq!(table.entries[1].from, "｡");
        assert_eq!(table.entries[1].to, "。");
    }

    #[test]
    fn test_translate_counts_characters_not_bytes() {
        // 3 bytes vs 1 byte per character, same character count
        assert!(SubstitutionTable::translate("width", "！？", "!?").is_ok());
    }

    #[test]
    fn test_translate_length_mismatch() {
        let err = SubstitutionTable::translate("broken", "abc", "xy").unwrap_err();
        assert_eq!(
            err,
            TableError::LengthMismatch {
                table: "broken",
                from: 3,
                to: 2
            }
        );
        assert_eq!(
            err.to_string(),
            "table 'broken': 3 source characters but 2 replacement characters"
        );
    }

    #[test]
    fn test_validate_empty_pattern() {
        let table = SubstitutionTable::uniform("holes", &["a", "", "b"], "-");
        assert_eq!(
            table.validate(),
            Err(TableError::EmptyPattern {
                table: "holes",
                index: 1
            })
        );
    }
}
