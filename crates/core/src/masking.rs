//! Length-preserving field masking.
//!
//! A [`MaskPolicy`] decides, character by character, whether a value passes
//! through or is replaced by a placeholder. Both email-redaction styles the
//! service supports are configurations of this one mechanism:
//!
//! - [`MaskPolicy::symmetric_email`] keeps `@`, `.`, the first and the last
//!   character: `"ana@x.com"` becomes `"a**@*.**m"`.
//! - [`MaskPolicy::email_local_part`] hides everything up to and including the
//!   first `@`: `"ana@x.com"` becomes `"****x.com"`.

use std::str::FromStr;

use crate::error::CoreError;

/// Default placeholder character.
pub const DEFAULT_PLACEHOLDER: char = '*';

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// A character position, counted from either end of the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Zero-based index from the first character.
    FromStart(usize),
    /// Zero-based index from the last character (`FromEnd(0)` is the last one).
    FromEnd(usize),
}

impl Position {
    fn resolve(self, len: usize) -> Option<usize> {
        match self {
            Position::FromStart(i) if i < len => Some(i),
            Position::FromEnd(i) if i < len => Some(len - 1 - i),
            _ => None,
        }
    }
}

/// Configuration for a single masked field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskPolicy {
    pub placeholder: char,
    /// Characters that always pass through unchanged.
    pub keep_chars: Vec<char>,
    /// Positions that always pass through unchanged.
    pub keep_positions: Vec<Position>,
    /// Everything after the first occurrence of this character passes through.
    /// The delimiter itself is masked unless also listed in `keep_chars`.
    pub keep_after: Option<char>,
}

impl Default for MaskPolicy {
    fn default() -> Self {
        Self::symmetric_email()
    }
}

impl MaskPolicy {
    /// A policy that masks every character.
    pub fn full() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER,
            keep_chars: Vec::new(),
            keep_positions: Vec::new(),
            keep_after: None,
        }
    }

    /// Keep `@`, `.`, the first and the last character.
    pub fn symmetric_email() -> Self {
        Self {
            keep_chars: vec!['@', '.'],
            keep_positions: vec![Position::FromStart(0), Position::FromEnd(0)],
            ..Self::full()
        }
    }

    /// Mask the local part and the `@`; keep the domain.
    pub fn email_local_part() -> Self {
        Self {
            keep_after: Some('@'),
            ..Self::full()
        }
    }

    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Apply the policy. The result has exactly as many characters as `value`.
    pub fn apply(&self, value: &str) -> String {
        let len = value.chars().count();
        let kept: Vec<usize> = self
            .keep_positions
            .iter()
            .filter_map(|p| p.resolve(len))
            .collect();
        let tail_start = self
            .keep_after
            .and_then(|delim| value.chars().position(|c| c == delim))
            .map(|i| i + 1);

        value
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let keep = self.keep_chars.contains(&c)
                    || kept.contains(&i)
                    || tail_start.is_some_and(|start| i >= start);
                if keep {
                    c
                } else {
                    self.placeholder
                }
            })
            .collect()
    }
}

/// Convenience wrapper around [`MaskPolicy::apply`].
pub fn mask(value: &str, policy: &MaskPolicy) -> String {
    policy.apply(value)
}

// ---------------------------------------------------------------------------
// Named styles (configuration surface)
// ---------------------------------------------------------------------------

/// Email masking style selectable through configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MaskStyle {
    #[default]
    Symmetric,
    LocalPart,
}

impl MaskStyle {
    pub fn policy(self) -> MaskPolicy {
        match self {
            MaskStyle::Symmetric => MaskPolicy::symmetric_email(),
            MaskStyle::LocalPart => MaskPolicy::email_local_part(),
        }
    }
}

impl FromStr for MaskStyle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "symmetric" => Ok(MaskStyle::Symmetric),
            "local_part" | "local-part" => Ok(MaskStyle::LocalPart),
            other => Err(CoreError::Validation(format!(
                "Unknown mask style '{other}'. Must be one of: symmetric, local_part"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_email_keeps_separators_and_ends() {
        let masked = MaskPolicy::symmetric_email().apply("ana@x.com");
        assert_eq!(masked, "a**@*.**m");
        assert_eq!(masked.chars().count(), 9);
    }

    #[test]
    fn symmetric_email_longer_address() {
        assert_eq!(
            MaskPolicy::symmetric_email().apply("roberto@email.com"),
            "r******@*****.**m"
        );
    }

    #[test]
    fn local_part_masks_through_at_sign() {
        assert_eq!(MaskPolicy::email_local_part().apply("ana@x.com"), "****x.com");
    }

    #[test]
    fn local_part_without_delimiter_masks_everything() {
        assert_eq!(MaskPolicy::email_local_part().apply("no-at-sign"), "**********");
    }

    #[test]
    fn empty_value_stays_empty() {
        assert_eq!(MaskPolicy::symmetric_email().apply(""), "");
    }

    #[test]
    fn single_character_is_kept_by_both_ends() {
        assert_eq!(MaskPolicy::symmetric_email().apply("x"), "x");
    }

    #[test]
    fn length_is_counted_in_characters() {
        let input = "joão@exemplo.br";
        let masked = MaskPolicy::symmetric_email().apply(input);
        assert_eq!(masked.chars().count(), input.chars().count());
        assert_eq!(masked, "j***@*******.*r");
    }

    #[test]
    fn kept_positions_and_chars_match_original() {
        let input = "maria.silva@escola.edu";
        let policy = MaskPolicy::symmetric_email();
        let masked: Vec<char> = policy.apply(input).chars().collect();
        let original: Vec<char> = input.chars().collect();

        assert_eq!(masked.len(), original.len());
        assert_eq!(masked[0], original[0]);
        assert_eq!(masked[original.len() - 1], original[original.len() - 1]);
        for (m, o) in masked.iter().zip(&original) {
            if *o == '@' || *o == '.' {
                assert_eq!(m, o);
            }
        }
    }

    #[test]
    fn out_of_range_positions_are_ignored() {
        let policy = MaskPolicy {
            keep_positions: vec![Position::FromStart(10), Position::FromEnd(10)],
            ..MaskPolicy::full()
        };
        assert_eq!(policy.apply("abc"), "***");
    }

    #[test]
    fn custom_placeholder() {
        let policy = MaskPolicy::email_local_part().with_placeholder('#');
        assert_eq!(policy.apply("bea@y.org"), "####y.org");
    }

    #[test]
    fn default_policy_is_symmetric() {
        assert_eq!(MaskPolicy::default(), MaskPolicy::symmetric_email());
        assert_eq!(MaskStyle::default().policy(), MaskPolicy::symmetric_email());
    }

    #[test]
    fn parses_mask_styles() {
        assert_eq!("symmetric".parse::<MaskStyle>().unwrap(), MaskStyle::Symmetric);
        assert_eq!("LOCAL_PART".parse::<MaskStyle>().unwrap(), MaskStyle::LocalPart);
        assert_eq!("local-part".parse::<MaskStyle>().unwrap(), MaskStyle::LocalPart);
        assert!("prefix".parse::<MaskStyle>().is_err());
    }
}
