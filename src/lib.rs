// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

/// builds a [`Polynomial`](crate::polynomial::Polynomial) from positional
/// coefficients, constant term first.
///
/// ```
/// use polynomials::polynomial;
///
/// let poly = polynomial![1, -2, 3];
/// assert_eq!(poly.to_string(), "3x^2 - 2x + 1");
/// ```
#[macro_export]
macro_rules! polynomial {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::polynomial::Polynomial::from_variadic($first, ::std::vec![$($rest),*])
    };
}

pub mod error;
pub mod polynomial;
pub mod prelude;
pub mod traits;
pub mod util;

mod python;

pub use crate::error::PolynomialError;
pub use crate::polynomial::{OddDegreePolynomial, Polynomial, QuadraticPolynomial, RootSearchOptions};
