//! Magnitude classes of numeric values
//!
//! Classification is purely by value, never by word, so the same rules apply to
//! every language.

/// Magnitude class of a number word's value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Magnitude {
    /// 0 through 19
    Ones,
    /// 20, 30, ..., 90
    Tens,
    /// 100, 200, ..., 900
    Hundreds,
    Thousand,
    Million,
    Billion,
    Trillion,
}

impl Magnitude {
    /// Classify a value, `None` for values outside every class (e.g. 25, 1500)
    pub fn of(value: u64) -> Option<Self> {
        match value {
            0..=19 => Some(Self::Ones),
            20..=90 if value % 10 == 0 => Some(Self::Tens),
            100..=900 if value % 100 == 0 => Some(Self::Hundreds),
            1_000 => Some(Self::Thousand),
            1_000_000 => Some(Self::Million),
            1_000_000_000 => Some(Self::Billion),
            1_000_000_000_000 => Some(Self::Trillion),
            _ => None,
        }
    }

    /// Thousand and above
    pub fn is_scale(self) -> bool {
        self >= Self::Thousand
    }
}

/// Both values belong to the same magnitude class
pub fn same_class(a: u64, b: u64) -> bool {
    match (Magnitude::of(a), Magnitude::of(b)) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Whether `next` can directly follow `prev` as part of the same number
///
/// Tens take a ones word, hundreds take tens or ones, and every scale word takes
/// any smaller class (so "million" can be followed by "thousand" but not by
/// another "million").
pub fn is_dependent(prev: u64, next: u64) -> bool {
    let (Some(prev), Some(next)) = (Magnitude::of(prev), Magnitude::of(next)) else {
        return false;
    };

    match prev {
        Magnitude::Ones => false,
        Magnitude::Tens => next == Magnitude::Ones,
        Magnitude::Hundreds => next < Magnitude::Hundreds,
        scale => next < scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(Magnitude::of(0), Some(Magnitude::Ones));
        assert_eq!(Magnitude::of(19), Some(Magnitude::Ones));
        assert_eq!(Magnitude::of(20), Some(Magnitude::Tens));
        assert_eq!(Magnitude::of(25), None);
        assert_eq!(Magnitude::of(900), Some(Magnitude::Hundreds));
        assert_eq!(Magnitude::of(1_000_000_000_000), Some(Magnitude::Trillion));
        assert_eq!(Magnitude::of(1500), None);
    }

    #[test]
    fn test_same_class() {
        assert!(same_class(3, 19));
        assert!(same_class(70, 80));
        assert!(same_class(500, 900));
        assert!(!same_class(900, 30));
        assert!(!same_class(25, 25));
    }

    #[test]
    fn test_dependency() {
        assert!(is_dependent(20, 3));
        assert!(!is_dependent(20, 30));
        assert!(is_dependent(900, 12));
        assert!(is_dependent(900, 40));
        assert!(!is_dependent(900, 100));
        assert!(is_dependent(1000, 300));
        assert!(!is_dependent(1000, 1000));
        assert!(is_dependent(1_000_000, 1000));
        assert!(is_dependent(1_000_000_000_000, 1_000_000_000));
        assert!(!is_dependent(1_000_000_000_000, 1_000_000_000_000));
        assert!(!is_dependent(1, 30));
        assert!(!is_dependent(8, 70));
    }
}
