use std::fmt;
use std::fmt::{Display, Formatter};

/// One char of the input mask.
///
/// Nine flags define editable positions, any other char in the
/// format is a [Mask::Literal] that always shows verbatim.
#[allow(variant_size_differences)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mask {
    /// `C`: any char.
    AnyChar,
    /// `&`: any char except space.
    NotSpace,
    /// `a`: letter, digit or space.
    LetterDigitSpace,
    /// `A`: letter or digit.
    LetterOrDigit,
    /// `?`: letter or space.
    LetterSpace,
    /// `L`: letter.
    Letter,
    /// `9`: digit or space.
    DigitSpace,
    /// `0`: digit.
    Digit,
    /// `#`: digit, `+` or `-`.
    Numeric,
    /// Fixed char, not editable.
    Literal(char),
}

/// Result of checking one input char against one mask position.
///
/// A literal position is not a validation question at all, so this
/// is a tri-state and not a bool. Call sites must branch on
/// [CharCheck::Literal] before treating the answer as pass/fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharCheck {
    /// The position is a fixed literal.
    Literal,
    /// The char is valid here.
    Valid,
    /// The char is not valid here.
    Invalid,
}

impl Display for Mask {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let c = match self {
            Mask::AnyChar => 'C',
            Mask::NotSpace => '&',
            Mask::LetterDigitSpace => 'a',
            Mask::LetterOrDigit => 'A',
            Mask::LetterSpace => '?',
            Mask::Letter => 'L',
            Mask::DigitSpace => '9',
            Mask::Digit => '0',
            Mask::Numeric => '#',
            Mask::Literal(c) => *c,
        };
        write!(f, "{}", c)
    }
}

impl Mask {
    /// Classify one char of the mask format.
    pub fn from_symbol(c: char) -> Mask {
        match c {
            'C' => Mask::AnyChar,
            '&' => Mask::NotSpace,
            'a' => Mask::LetterDigitSpace,
            'A' => Mask::LetterOrDigit,
            '?' => Mask::LetterSpace,
            'L' => Mask::Letter,
            '9' => Mask::DigitSpace,
            '0' => Mask::Digit,
            '#' => Mask::Numeric,
            c => Mask::Literal(c),
        }
    }

    /// Fixed char, not editable.
    #[inline]
    pub fn is_literal(&self) -> bool {
        matches!(self, Mask::Literal(_))
    }

    /// Valid input for this mask.
    pub fn check(&self, c: char) -> CharCheck {
        let valid = match self {
            Mask::AnyChar => true,
            Mask::NotSpace => c != ' ',
            Mask::LetterDigitSpace => is_letter(c) || c.is_ascii_digit() || c == ' ',
            Mask::LetterOrDigit => is_letter(c) || c.is_ascii_digit(),
            Mask::LetterSpace => is_letter(c) || c == ' ',
            Mask::Letter => is_letter(c),
            Mask::DigitSpace => c.is_ascii_digit() || c == ' ',
            Mask::Digit => c.is_ascii_digit(),
            Mask::Numeric => c.is_ascii_digit() || c == '+' || c == '-',
            Mask::Literal(_) => return CharCheck::Literal,
        };
        if valid { CharCheck::Valid } else { CharCheck::Invalid }
    }
}

/// Letter for the mask classes. ASCII letters plus the
/// Latin-1 Supplement up to Greek Extended, and Glagolitic up to
/// the end of Hangul.
fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '\u{00C0}'..='\u{1FFF}' | '\u{2C00}'..='\u{D7FF}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        assert_eq!(Mask::from_symbol('0'), Mask::Digit);
        assert_eq!(Mask::from_symbol('9'), Mask::DigitSpace);
        assert_eq!(Mask::from_symbol('/'), Mask::Literal('/'));
        assert_eq!(Mask::from_symbol('c'), Mask::Literal('c'));
        for c in ['C', '&', 'a', 'A', '?', 'L', '9', '0', '#'] {
            assert!(!Mask::from_symbol(c).is_literal());
            assert_eq!(Mask::from_symbol(c).to_string(), c.to_string());
        }
    }

    #[test]
    fn test_check() {
        assert_eq!(Mask::Digit.check('5'), CharCheck::Valid);
        assert_eq!(Mask::Digit.check(' '), CharCheck::Invalid);
        assert_eq!(Mask::DigitSpace.check(' '), CharCheck::Valid);
        assert_eq!(Mask::Numeric.check('-'), CharCheck::Valid);
        assert_eq!(Mask::Numeric.check('+'), CharCheck::Valid);
        assert_eq!(Mask::Numeric.check('x'), CharCheck::Invalid);
        assert_eq!(Mask::Letter.check('ä'), CharCheck::Valid);
        assert_eq!(Mask::Letter.check('日'), CharCheck::Valid);
        assert_eq!(Mask::Letter.check('5'), CharCheck::Invalid);
        assert_eq!(Mask::LetterOrDigit.check(' '), CharCheck::Invalid);
        assert_eq!(Mask::LetterDigitSpace.check(' '), CharCheck::Valid);
        assert_eq!(Mask::LetterSpace.check('q'), CharCheck::Valid);
        assert_eq!(Mask::NotSpace.check(' '), CharCheck::Invalid);
        assert_eq!(Mask::NotSpace.check('!'), CharCheck::Valid);
        assert_eq!(Mask::AnyChar.check('\u{1F600}'), CharCheck::Valid);
        assert_eq!(Mask::Literal('/').check('/'), CharCheck::Literal);
    }
}
