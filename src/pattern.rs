//! Filename matching patterns
//!
//! A compiled, stateless regular expression tested against bare file
//! names. Flags follow the single-letter modifiers users already know
//! from other regex dialects (`i`, `m`, `s`, `u`, `g`, `y`, `d`).

use regex::{Regex, RegexBuilder};

use crate::error::{PlaylistError, Result};

/// Pattern used when none is supplied
pub const MATCH_ALL: &str = ".*";

/// Compiled filename pattern, searched unanchored
#[derive(Debug, Clone)]
pub struct FilenamePattern {
    regex: Regex,
}

impl FilenamePattern {
    /// Compile a pattern without flags
    pub fn new(pattern: &str) -> Result<Self> {
        Self::with_flags(pattern, "")
    }

    /// Pattern accepting every file name
    pub fn match_all() -> Result<Self> {
        Self::new(MATCH_ALL)
    }

    /// Compile a pattern with modifier flags
    pub fn with_flags(pattern: &str, flags: &str) -> Result<Self> {
        let flags = PatternFlags::parse(flags)?;

        // Sticky search starts at offset 0 and may not skip ahead.
        let source = if flags.sticky {
            format!(r"\A(?:{})", pattern)
        } else {
            pattern.to_string()
        };

        let regex = RegexBuilder::new(&source)
            .case_insensitive(flags.case_insensitive)
            .multi_line(flags.multi_line)
            .dot_matches_new_line(flags.dot_all)
            .build()
            .map_err(|e| {
                PlaylistError::invalid_argument(format!("Invalid regular expression: {}", e))
            })?;

        Ok(Self { regex })
    }

    /// Test a file name
    pub fn is_match(&self, file_name: &str) -> bool {
        self.regex.is_match(file_name)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

#[derive(Debug, Default)]
struct PatternFlags {
    case_insensitive: bool,
    multi_line: bool,
    dot_all: bool,
    sticky: bool,
}

impl PatternFlags {
    fn parse(flags: &str) -> Result<Self> {
        let mut parsed = PatternFlags::default();
        let mut seen = String::new();

        for flag in flags.chars() {
            if seen.contains(flag) {
                return Err(invalid_flags(flags));
            }
            seen.push(flag);

            match flag {
                'i' => parsed.case_insensitive = true,
                'm' => parsed.multi_line = true,
                's' => parsed.dot_all = true,
                'y' => parsed.sticky = true,
                // unicode is always on; global and indices carry no state here
                'u' | 'g' | 'd' => {}
                _ => return Err(invalid_flags(flags)),
            }
        }

        Ok(parsed)
    }
}

fn invalid_flags(flags: &str) -> PlaylistError {
    PlaylistError::invalid_argument(format!("Invalid regular expression flags: {}", flags))
}
