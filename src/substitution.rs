use regex::{NoExpand, Regex};

use crate::error::Result;

/// A single pattern replacement applied line by line to a target file.
#[derive(Debug, Clone)]
pub struct Substitution {
    pattern: Regex,
    replacement: String,
}

impl Substitution {
    /// Compile `pattern` and pair it with a literal replacement.
    ///
    /// The replacement is inserted as-is; `$` has no special meaning in it.
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self> {
        Ok(Substitution {
            pattern: Regex::new(pattern)?,
            replacement: replacement.into(),
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Replace every match on every line of `content`.
    ///
    /// Lines keep their original terminators (`\n`, `\r\n`, or none on the
    /// last line). Returns the rewritten text and the number of matches.
    pub fn apply(&self, content: &str) -> (String, usize) {
        let mut output = String::with_capacity(content.len());
        let mut count = 0;

        for line in content.split_inclusive('\n') {
            let matches = self.pattern.find_iter(line).count();
            if matches == 0 {
                output.push_str(line);
                continue;
            }
            count += matches;
            output.push_str(
                &self
                    .pattern
                    .replace_all(line, NoExpand(&self.replacement)),
            );
        }

        (output, count)
    }
}
