// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::error::PolynomialError;
use crate::polynomial::Polynomial;
use crate::traits::PolynomialEval;
use crate::util::has_sign_change;
use num_traits::{Float, Zero};
use std::convert::TryFrom;
use std::fmt;
use std::ops::Deref;
use tracing::{debug, trace};

/// tunables for [`OddDegreePolynomial::find_root_with`]
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct RootSearchOptions<T> {
    /// a point `x` is accepted as a root once `|p(x)| < tolerance`
    pub tolerance: T,
    /// half-width of the first bracket tried, doubled until it contains a sign change
    pub initial_bound: T,
    /// maximum number of bisection steps
    pub max_iterations: usize,
    pub max_bracket_doublings: usize,
}

impl<T: Float> Default for RootSearchOptions<T> {
    fn default() -> Self {
        RootSearchOptions {
            tolerance: T::from(1e-6).unwrap_or_else(T::epsilon),
            initial_bound: T::one(),
            max_iterations: 10_000,
            max_bracket_doublings: 2_048,
        }
    }
}

impl<T> RootSearchOptions<T> {
    pub fn with_tolerance(self, tolerance: T) -> Self {
        RootSearchOptions { tolerance, ..self }
    }
    pub fn with_initial_bound(self, initial_bound: T) -> Self {
        RootSearchOptions {
            initial_bound,
            ..self
        }
    }
    pub fn with_max_iterations(self, max_iterations: usize) -> Self {
        RootSearchOptions {
            max_iterations,
            ..self
        }
    }
    pub fn with_max_bracket_doublings(self, max_bracket_doublings: usize) -> Self {
        RootSearchOptions {
            max_bracket_doublings,
            ..self
        }
    }
}

/// A polynomial of odd degree, which always has at least one real root.
///
/// # Invariants
///
/// `self.degree() % 2 == 1`
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct OddDegreePolynomial<T>(Polynomial<T>);

impl<T> OddDegreePolynomial<T> {
    pub fn new(polynomial: Polynomial<T>) -> Result<Self, PolynomialError> {
        let degree = polynomial.degree();
        if degree % 2 == 0 {
            return Err(PolynomialError::NotOddDegree { degree });
        }
        Ok(OddDegreePolynomial(polynomial))
    }
    pub fn from_coefficients(coefficients: Vec<T>) -> Result<Self, PolynomialError>
    where
        T: Zero,
    {
        Self::new(Polynomial::from_coefficients(coefficients)?)
    }
    pub fn into_polynomial(self) -> Polynomial<T> {
        self.0
    }
}

impl<T> OddDegreePolynomial<T>
where
    T: Float + fmt::Debug,
    for<'a> &'a Polynomial<T>: PolynomialEval<T>,
{
    /// finds one real root using [`RootSearchOptions::default()`]
    pub fn find_root(&self) -> Result<T, PolynomialError> {
        self.find_root_with(&RootSearchOptions::default())
    }
    /// finds one real root by bisection.
    ///
    /// The search starts from `[-initial_bound, initial_bound]`, doubling the
    /// bound until the polynomial has opposite signs at the two ends, then
    /// halves the bracket until a point with `|p(x)| < tolerance` is found.
    ///
    /// If the bracket stops shrinking in floating point or `max_iterations` is
    /// reached first, the best point seen so far is returned.
    ///
    /// which root is found is unspecified when there is more than one.
    pub fn find_root_with(&self, options: &RootSearchOptions<T>) -> Result<T, PolynomialError> {
        let eval = |x: T| (&self.0).eval(&x);
        let mut bound = options.initial_bound.abs();
        let mut doublings = 0;
        let (mut lo, mut hi, mut value_lo, mut value_hi) = loop {
            if !bound.is_finite() || doublings > options.max_bracket_doublings {
                debug!(?bound, doublings, "no sign change found for root search");
                return Err(PolynomialError::RootNotBracketed);
            }
            let value_lo = eval(-bound);
            let value_hi = eval(bound);
            if value_lo.is_nan() || value_hi.is_nan() {
                debug!(?bound, "polynomial evaluated to NaN during root search");
                return Err(PolynomialError::RootNotBracketed);
            }
            if has_sign_change(&value_lo, &value_hi) {
                break (-bound, bound, value_lo, value_hi);
            }
            bound = bound + bound;
            doublings += 1;
        };
        trace!(?lo, ?hi, doublings, "bracketed root");
        let two = T::one() + T::one();
        for _ in 0..options.max_iterations {
            if value_lo.abs() < options.tolerance {
                return Ok(lo);
            }
            if value_hi.abs() < options.tolerance {
                return Ok(hi);
            }
            let mid = (lo + hi) / two;
            let value_mid = eval(mid);
            if value_mid.abs() < options.tolerance {
                return Ok(mid);
            }
            if mid <= lo || mid >= hi {
                debug!(?lo, ?hi, "bracket can't shrink further; tolerance not reached");
                return Ok(closest_to_root(lo, value_lo, hi, value_hi));
            }
            if has_sign_change(&value_lo, &value_mid) {
                hi = mid;
                value_hi = value_mid;
            } else {
                lo = mid;
                value_lo = value_mid;
            }
        }
        debug!(
            ?lo,
            ?hi,
            max_iterations = options.max_iterations,
            "root search stopped at iteration limit"
        );
        Ok(closest_to_root(lo, value_lo, hi, value_hi))
    }
}

fn closest_to_root<T: Float>(lo: T, value_lo: T, hi: T, value_hi: T) -> T {
    if value_lo.abs() <= value_hi.abs() {
        lo
    } else {
        hi
    }
}

impl<T> TryFrom<Polynomial<T>> for OddDegreePolynomial<T> {
    type Error = PolynomialError;
    fn try_from(polynomial: Polynomial<T>) -> Result<Self, PolynomialError> {
        Self::new(polynomial)
    }
}

impl<T> From<OddDegreePolynomial<T>> for Polynomial<T> {
    fn from(polynomial: OddDegreePolynomial<T>) -> Self {
        polynomial.0
    }
}

impl<T> Deref for OddDegreePolynomial<T> {
    type Target = Polynomial<T>;
    fn deref(&self) -> &Polynomial<T> {
        &self.0
    }
}

impl<T> AsRef<Polynomial<T>> for OddDegreePolynomial<T> {
    fn as_ref(&self) -> &Polynomial<T> {
        &self.0
    }
}

impl<T> fmt::Display for OddDegreePolynomial<T>
where
    Polynomial<T>: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_is_root(poly: &OddDegreePolynomial<f64>, root: f64) {
        let value = (&**poly).eval(&root);
        assert!(
            value.abs() < 1e-6,
            "p({}) = {} for p = {}",
            root,
            value,
            poly
        );
    }

    #[test]
    fn test_new() {
        assert_eq!(
            OddDegreePolynomial::from_coefficients(vec![1, 0, 1]),
            Err(PolynomialError::NotOddDegree { degree: 2 })
        );
        assert_eq!(
            OddDegreePolynomial::from_coefficients(vec![0, 0, 0]),
            Err(PolynomialError::NotOddDegree { degree: 0 })
        );
        assert_eq!(
            OddDegreePolynomial::from_coefficients(vec![5, 1, 0, 0])
                .unwrap()
                .coefficients(),
            &[5, 1]
        );
        assert_eq!(
            OddDegreePolynomial::<i32>::from_coefficients(vec![]),
            Err(PolynomialError::InvalidConstruction(
                "coefficient sequence is empty"
            ))
        );
        let poly = OddDegreePolynomial::try_from(polynomial![-8, 0, 0, 1]).unwrap();
        assert_eq!(poly.degree(), 3);
        assert_eq!(Polynomial::from(poly), polynomial![-8, 0, 0, 1]);
        assert!(OddDegreePolynomial::try_from(polynomial![1, 2, 3]).is_err());
    }

    #[test]
    fn test_find_root() {
        let poly = OddDegreePolynomial::new(polynomial![-8.0, 0.0, 0.0, 1.0]).unwrap();
        let root = poly.find_root().unwrap();
        assert!((root - 2.0).abs() < 1e-6, "root = {}", root);

        let poly = OddDegreePolynomial::new(polynomial![0.0, 1.0]).unwrap();
        assert_eq!(poly.find_root(), Ok(0.0));

        let poly = OddDegreePolynomial::new(polynomial![-2.0, 0.0, 0.0, 1.0]).unwrap();
        let root = poly.find_root().unwrap();
        assert_is_root(&poly, root);
        assert!((root - 2f64.cbrt()).abs() < 1e-6);

        // (x - 1)(x - 2)(x + 3) = x^3 - 7x + 6
        let poly = OddDegreePolynomial::new(polynomial![6.0, -7.0, 0.0, 1.0]).unwrap();
        let root = poly.find_root().unwrap();
        assert_is_root(&poly, root);

        let poly = OddDegreePolynomial::new(polynomial![-1000.0, 0.0, 0.0, 0.0, 0.0, -0.5]).unwrap();
        let root = poly.find_root().unwrap();
        assert_is_root(&poly, root);
        assert!(root < 0.0);

        let poly = OddDegreePolynomial::new(polynomial![3.0f32, 0.0, 0.0, 1.0]).unwrap();
        let root = poly.find_root().unwrap();
        assert!((root + 3f32.cbrt()).abs() < 1e-4, "root = {}", root);
    }

    #[test]
    fn test_find_root_tolerance_unreachable() {
        // values near the root are spaced further apart than the tolerance
        let poly = OddDegreePolynomial::new(polynomial![-2e12, 0.0, 0.0, 1e12]).unwrap();
        let root = poly.find_root().unwrap();
        assert!((root - 2f64.cbrt()).abs() < 1e-9, "root = {}", root);
    }

    #[test]
    fn test_find_root_with_options() {
        let poly = OddDegreePolynomial::new(polynomial![-2.0, 0.0, 0.0, 1.0]).unwrap();
        let options = RootSearchOptions::default()
            .with_tolerance(1e-12)
            .with_initial_bound(0.5);
        let root = poly.find_root_with(&options).unwrap();
        assert!((root - 2f64.cbrt()).abs() < 1e-12);

        let options = RootSearchOptions::default().with_max_iterations(3);
        let root = poly.find_root_with(&options).unwrap();
        assert!(root >= -2.0 && root <= 2.0);

        let options = RootSearchOptions::default().with_max_bracket_doublings(0);
        assert_eq!(
            OddDegreePolynomial::new(polynomial![-100.0, 0.0, 0.0, 1.0])
                .unwrap()
                .find_root_with(&options),
            Err(PolynomialError::RootNotBracketed)
        );
    }

    #[test]
    fn test_find_root_not_bracketed() {
        // the only sign change is past the largest finite `f64`
        let poly = OddDegreePolynomial::new(polynomial![0.0, 0.0, -1e308, 1e-308]).unwrap();
        assert_eq!(poly.find_root(), Err(PolynomialError::RootNotBracketed));

        let poly = OddDegreePolynomial::new(polynomial![f64::NAN, 1.0]).unwrap();
        assert_eq!(poly.find_root(), Err(PolynomialError::RootNotBracketed));
    }
}
