//! Parser for mapping-transform input.
//!
//! Format:
//!
//! ```text
//! path/to/target        <- line 0: target path (trimmed)
//! oldValue,newValue     <- key,value (extra fields ignored)
//!                       <- blank lines ignored
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

/// Target path plus key→value substitutions read from plain content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingInput {
    pub target_path: Option<PathBuf>,
    pub mapping: HashMap<String, String>,
}

impl MappingInput {
    /// Parse `content`, returning `None` when it has fewer than two lines.
    pub fn parse(content: &str) -> Option<Self> {
        let mut input = Self::default();
        input.from_content(content).then_some(input)
    }

    /// Populate from `content`.
    ///
    /// Returns `false` (leaving `self` untouched) when fewer than two lines are
    /// present. Otherwise returns `true`, even if no mapping line was usable.
    pub fn from_content(&mut self, content: &str) -> bool {
        let lines = split_lines(content);
        if lines.len() < 2 {
            return false;
        }

        self.target_path = Some(PathBuf::from(lines[0].trim()));

        for line in &lines[1..] {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let fields = split_fields(line);
            let [key, value, ..] = fields.as_slice() else {
                continue;
            };
            self.mapping
                .insert(key.trim().to_string(), value.trim().to_string());
        }

        true
    }
}

/// Split on `,`, dropping trailing empty fields (`"k,"` is one field).
fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(',').collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}

/// Split on `\n`/`\r\n`, dropping trailing empty lines.
fn split_lines(content: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = content.lines().collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}
