//! `yang-version` argument: `1` parses as (1, 0); `1.1` as (1, 1).

use crate::base::Span;
use crate::error::FrontError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    pub const YANG_1_0: Version = Version { major: 1, minor: 0 };
    pub const YANG_1_1: Version = Version { major: 1, minor: 1 };

    pub fn parse(text: &str, span: Span) -> Result<Self, FrontError> {
        let invalid = |reason: &str| FrontError::InvalidArgument {
            span,
            keyword: "yang-version".to_string(),
            text: text.to_string(),
            reason: reason.to_string(),
        };

        match text.split_once('.') {
            None => {
                let major: u32 = text.parse().map_err(|_| invalid("not a valid version number"))?;
                Ok(Version { major, minor: 0 })
            }
            Some((maj, min)) => {
                let major: u32 = maj.parse().map_err(|_| invalid("not a valid version number"))?;
                let minor: u32 = min.parse().map_err(|_| invalid("not a valid version number"))?;
                Ok(Version { major, minor })
            }
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minor == 0 {
            write!(f, "{}", self.major)
        } else {
            write!(f, "{}.{}", self.major, self.minor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Position;

    fn span() -> Span {
        Span::at(Position::new(0, 0))
    }

    #[test]
    fn scenario_c_bare_one_is_one_zero() {
        assert_eq!(Version::parse("1", span()).unwrap(), Version { major: 1, minor: 0 });
    }

    #[test]
    fn scenario_c_one_dot_one() {
        assert_eq!(Version::parse("1.1", span()).unwrap(), Version { major: 1, minor: 1 });
    }

    #[test]
    fn round_trip_through_display() {
        for v in [Version::YANG_1_0, Version::YANG_1_1] {
            assert_eq!(Version::parse(&v.to_string(), span()).unwrap(), v);
        }
    }

    #[test]
    fn rejects_garbage() {
        assert!(Version::parse("a.b", span()).is_err());
    }
}
