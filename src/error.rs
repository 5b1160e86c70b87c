// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use std::error::Error;
use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum PolynomialError {
    /// the construction input had no coefficients
    InvalidConstruction(&'static str),
    NotOddDegree {
        degree: usize,
    },
    DegreeTooLarge {
        degree: usize,
    },
    /// no sign change was found before the search bound stopped being finite,
    /// or the polynomial evaluated to NaN
    RootNotBracketed,
}

impl fmt::Display for PolynomialError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PolynomialError::InvalidConstruction(reason) => {
                write!(f, "invalid polynomial construction: {}", reason)
            }
            PolynomialError::NotOddDegree { degree } => {
                write!(f, "polynomial degree must be odd, got {}", degree)
            }
            PolynomialError::DegreeTooLarge { degree } => {
                write!(f, "polynomial degree must be at most 2, got {}", degree)
            }
            PolynomialError::RootNotBracketed => {
                write!(f, "could not find an interval bracketing a root")
            }
        }
    }
}

impl Error for PolynomialError {}

impl From<PolynomialError> for std::io::Error {
    fn from(err: PolynomialError) -> Self {
        Self::new(std::io::ErrorKind::InvalidInput, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            PolynomialError::InvalidConstruction("no coefficients").to_string(),
            "invalid polynomial construction: no coefficients"
        );
        assert_eq!(
            PolynomialError::NotOddDegree { degree: 2 }.to_string(),
            "polynomial degree must be odd, got 2"
        );
        assert_eq!(
            PolynomialError::DegreeTooLarge { degree: 3 }.to_string(),
            "polynomial degree must be at most 2, got 3"
        );
    }

    #[test]
    fn test_into_io_error() {
        let err: std::io::Error = PolynomialError::DegreeTooLarge { degree: 4 }.into();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
}
