use std::fmt::{Display, Formatter};

/// Represents the number of values an argument takes.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum Arity {
    /// Exactly 1 value.
    ExactlyOne,
    /// 0 or 1 values.
    ZeroOrOne,
    /// Any number of values.
    ZeroOrMore,
    /// At least 1 value.
    OneOrMore,
    /// No values, the argument is on/off.
    Flag,
}

impl Arity {
    /// Returns the min number of values.
    #[inline]
    pub const fn min(&self) -> usize {
        match self {
            Arity::ExactlyOne | Arity::OneOrMore => 1,
            Arity::ZeroOrOne | Arity::ZeroOrMore | Arity::Flag => 0,
        }
    }

    /// Returns the max number of values or `None` if unbounded.
    #[inline]
    pub const fn max(&self) -> Option<usize> {
        match self {
            Arity::ExactlyOne | Arity::ZeroOrOne => Some(1),
            Arity::ZeroOrMore | Arity::OneOrMore => None,
            Arity::Flag => Some(0),
        }
    }

    /// Returns the max number of values or `usize::MAX` if unbounded.
    #[inline]
    pub const fn max_or_default(&self) -> usize {
        match self.max() {
            Some(n) => n,
            None => usize::MAX,
        }
    }

    /// Returns `true` if this takes the provided number of values.
    #[inline]
    pub const fn takes(&self, count: usize) -> bool {
        count >= self.min() && count <= self.max_or_default()
    }

    /// Returns `true` if this takes values.
    #[inline]
    pub const fn takes_values(&self) -> bool {
        !matches!(self, Arity::Flag)
    }

    /// Returns `true` if the parsed value is a sequence.
    #[inline]
    pub const fn is_multiple(&self) -> bool {
        matches!(self, Arity::ZeroOrMore | Arity::OneOrMore)
    }

    /// Returns `true` if a positional with this arity may be left empty.
    #[inline]
    pub const fn is_optional(&self) -> bool {
        self.min() == 0
    }
}

impl Default for Arity {
    fn default() -> Self {
        Arity::ExactlyOne
    }
}

impl Display for Arity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Arity::ExactlyOne => write!(f, "1 value"),
            Arity::ZeroOrOne => write!(f, "0 to 1 values"),
            Arity::ZeroOrMore => write!(f, "0 or more values"),
            Arity::OneOrMore => write!(f, "1 or more values"),
            Arity::Flag => write!(f, "no values"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_test() {
        let arity = Arity::ExactlyOne;
        assert!(arity.takes_values());
        assert!(arity.takes(1));
        assert!(!arity.takes(0));
        assert!(!arity.takes(2));
        assert!(!arity.is_multiple());
    }

    #[test]
    fn zero_or_more_test() {
        let arity = Arity::ZeroOrMore;
        assert!(arity.takes(0));
        assert!(arity.takes(100));
        assert!(arity.is_multiple());
        assert!(arity.is_optional());
        assert_eq!(arity.max(), None);
        assert_eq!(arity.max_or_default(), usize::MAX);
    }

    #[test]
    fn one_or_more_test() {
        let arity = Arity::OneOrMore;
        assert!(!arity.takes(0));
        assert!(arity.takes(1));
        assert!(arity.takes(7));
        assert!(!arity.is_optional());
    }

    #[test]
    fn flag_test() {
        let arity = Arity::Flag;
        assert!(!arity.takes_values());
        assert!(arity.takes(0));
        assert!(!arity.takes(1));
    }

    #[test]
    fn display_test() {
        assert_eq!(Arity::Flag.to_string(), "no values");
        assert_eq!(Arity::ExactlyOne.to_string(), "1 value");
        assert_eq!(Arity::ZeroOrOne.to_string(), "0 to 1 values");
        assert_eq!(Arity::ZeroOrMore.to_string(), "0 or more values");
        assert_eq!(Arity::OneOrMore.to_string(), "1 or more values");
    }
}
