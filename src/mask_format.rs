use crate::mask_token::{CharCheck, Mask};
use crate::{DEFAULT_MASK, DEFAULT_PROMPT, upos_type};
use std::fmt;
use std::fmt::{Display, Formatter};

/// Parsed input mask plus the prompt char.
///
/// Splits the format into literal and editable positions and answers
/// per-position char checks. Positions count chars of the format,
/// starting at 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskFormat {
    mask: Vec<Mask>,
    prompt: char,
}

impl Default for MaskFormat {
    fn default() -> Self {
        Self::new(DEFAULT_MASK)
    }
}

impl Display for MaskFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for t in self.mask.iter() {
            write!(f, "{}", t)?;
        }
        Ok(())
    }
}

impl MaskFormat {
    /// Parse the mask format. Can't fail, an unrecognized char is a
    /// literal. Prompt char is `_`.
    pub fn new<S: AsRef<str>>(format: S) -> MaskFormat {
        Self::with_prompt(format, DEFAULT_PROMPT)
    }

    /// Parse the mask format with the given prompt char.
    pub fn with_prompt<S: AsRef<str>>(format: S, prompt: char) -> MaskFormat {
        MaskFormat {
            mask: format.as_ref().chars().map(Mask::from_symbol).collect(),
            prompt,
        }
    }

    /// Prompt char shown at unfilled editable positions.
    #[inline]
    pub fn prompt(&self) -> char {
        self.prompt
    }

    /// Change the prompt char.
    pub fn set_prompt(&mut self, prompt: char) {
        self.prompt = prompt;
    }

    /// Change the prompt char. Uses the first char if the string is
    /// longer, keeps the current prompt if it's empty.
    pub fn set_prompt_str(&mut self, prompt: &str) {
        if let Some(c) = prompt.chars().next() {
            self.prompt = c;
        }
    }

    /// Mask length in chars.
    #[inline]
    pub fn len(&self) -> upos_type {
        self.mask.len() as upos_type
    }

    /// Empty mask.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mask.is_empty()
    }

    /// The mask format as entered.
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// Mask at the given position.
    #[inline]
    pub fn mask(&self, pos: upos_type) -> Option<&Mask> {
        self.mask.get(pos as usize)
    }

    /// Is this position a literal? Positions beyond the mask are
    /// neither literal nor editable.
    #[inline]
    pub fn is_literal(&self, pos: upos_type) -> bool {
        matches!(self.mask.get(pos as usize), Some(Mask::Literal(_)))
    }

    /// Is this position editable?
    #[inline]
    pub fn is_editable(&self, pos: upos_type) -> bool {
        matches!(self.mask.get(pos as usize), Some(m) if !m.is_literal())
    }

    /// All literal positions with their char, in ascending position
    /// order. Rendering matches stripped raw chars against this
    /// order, keep it ascending.
    pub fn literals(&self) -> impl Iterator<Item = (upos_type, char)> + '_ {
        self.mask.iter().enumerate().filter_map(|(i, m)| match m {
            Mask::Literal(c) => Some((i as upos_type, *c)),
            _ => None,
        })
    }

    /// The chars of all literal positions, in ascending position order.
    pub fn literal_values(&self) -> impl Iterator<Item = char> + '_ {
        self.literals().map(|(_, c)| c)
    }

    /// Is the char one of the literal chars of this mask?
    #[inline]
    pub fn is_literal_value(&self, c: char) -> bool {
        self.literal_values().any(|l| l == c)
    }

    /// All editable positions, ascending. Together with the literal
    /// positions this partitions `0..len`.
    pub fn editable_positions(&self) -> impl Iterator<Item = upos_type> + '_ {
        self.mask.iter().enumerate().filter_map(|(i, m)| {
            if m.is_literal() {
                None
            } else {
                Some(i as upos_type)
            }
        })
    }

    /// Check one input char against the mask at the given position.
    ///
    /// Answers [CharCheck::Literal] for literal positions and for
    /// positions beyond the mask.
    #[inline]
    pub fn check_char(&self, c: char, pos: upos_type) -> CharCheck {
        match self.mask.get(pos as usize) {
            Some(m) => m.check(c),
            None => CharCheck::Literal,
        }
    }

    /// The empty rendering: one prompt char per editable position,
    /// literals verbatim.
    pub fn empty_value(&self) -> String {
        self.mask
            .iter()
            .map(|m| match m {
                Mask::Literal(c) => *c,
                _ => self.prompt,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        let fmt = MaskFormat::new("(000) 000-0000");
        assert_eq!(fmt.len(), 14);
        assert_eq!(
            fmt.literals().collect::<Vec<_>>(),
            vec![(0, '('), (4, ')'), (5, ' '), (9, '-')]
        );
        assert_eq!(
            fmt.editable_positions().collect::<Vec<_>>(),
            vec![1, 2, 3, 6, 7, 8, 10, 11, 12, 13]
        );
        for pos in 0..fmt.len() {
            assert_ne!(fmt.is_literal(pos), fmt.is_editable(pos));
        }
        assert!(!fmt.is_literal(14));
        assert!(!fmt.is_editable(14));
    }

    #[test]
    fn test_empty() {
        let fmt = MaskFormat::new("");
        assert!(fmt.is_empty());
        assert_eq!(fmt.literals().count(), 0);
        assert_eq!(fmt.editable_positions().count(), 0);
        assert_eq!(fmt.empty_value(), "");
    }

    #[test]
    fn test_format_roundtrip() {
        for f in ["00/00/0000", "(000) 000-0000", "LL-00", "CCCCCCCCCC"] {
            assert_eq!(MaskFormat::new(f).format(), f);
        }
    }

    #[test]
    fn test_prompt() {
        let mut fmt = MaskFormat::new("LL-00");
        assert_eq!(fmt.prompt(), '_');
        assert_eq!(fmt.empty_value(), "__-__");
        fmt.set_prompt_str("*abc");
        assert_eq!(fmt.prompt(), '*');
        fmt.set_prompt_str("");
        assert_eq!(fmt.prompt(), '*');
    }
}
