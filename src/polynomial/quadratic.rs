// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::error::PolynomialError;
use crate::polynomial::Polynomial;
use num_traits::{Float, Zero};
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;
use std::ops::{Deref, Mul, Sub};
use tracing::trace;

/// A polynomial of degree at most 2, solved in closed form.
///
/// # Invariants
///
/// `self.degree() <= 2`
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct QuadraticPolynomial<T>(Polynomial<T>);

impl<T> QuadraticPolynomial<T> {
    pub fn new(polynomial: Polynomial<T>) -> Result<Self, PolynomialError> {
        let degree = polynomial.degree();
        if degree > 2 {
            return Err(PolynomialError::DegreeTooLarge { degree });
        }
        Ok(QuadraticPolynomial(polynomial))
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
    pub fn constant_term(&self) -> &T {
        &self.0.coefficients()[0]
    }
    pub fn linear_term(&self) -> Option<&T> {
        self.0.coefficients().get(1)
    }
    pub fn quadratic_term(&self) -> Option<&T> {
        self.0.coefficients().get(2)
    }
    /// `b^2 - 4ac`, with missing terms taken as zero
    pub fn discriminant(&self) -> T
    where
        T: Zero + Clone + Sub<Output = T> + Mul<Output = T> + From<u8>,
    {
        let linear_term = self.linear_term().cloned().unwrap_or_else(T::zero);
        let quadratic_term = self.quadratic_term().cloned().unwrap_or_else(T::zero);
        linear_term.clone() * linear_term
            - quadratic_term * self.constant_term().clone() * T::from(4)
    }
}

impl<T: Float + fmt::Debug> QuadraticPolynomial<T> {
    /// returns the real roots.
    ///
    /// two distinct roots are returned as `[(-b + sqrt(d)) / 2a, (-b - sqrt(d)) / 2a]`,
    /// a double root is returned once, and a constant polynomial has no roots.
    pub fn solve(&self) -> Vec<T> {
        match *self.0.coefficients() {
            [constant_term, linear_term, quadratic_term] => {
                let two = T::one() + T::one();
                let discriminant =
                    linear_term * linear_term - two * two * quadratic_term * constant_term;
                trace!(?discriminant, "solving quadratic");
                let two_a = two * quadratic_term;
                match discriminant.partial_cmp(&T::zero()) {
                    Some(Ordering::Greater) => {
                        let sqrt_discriminant = discriminant.sqrt();
                        vec![
                            (-linear_term + sqrt_discriminant) / two_a,
                            (-linear_term - sqrt_discriminant) / two_a,
                        ]
                    }
                    Some(Ordering::Equal) => vec![-linear_term / two_a],
                    Some(Ordering::Less) | None => vec![],
                }
            }
            [constant_term, linear_term] => vec![-constant_term / linear_term],
            _ => vec![],
        }
    }
}

impl<T> TryFrom<Polynomial<T>> for QuadraticPolynomial<T> {
    type Error = PolynomialError;
    fn try_from(polynomial: Polynomial<T>) -> Result<Self, PolynomialError> {
        Self::new(polynomial)
    }
}

impl<T> From<QuadraticPolynomial<T>> for Polynomial<T> {
    fn from(polynomial: QuadraticPolynomial<T>) -> Self {
        polynomial.0
    }
}

impl<T> Deref for QuadraticPolynomial<T> {
    type Target = Polynomial<T>;
    fn deref(&self) -> &Polynomial<T> {
        &self.0
    }
}

impl<T> AsRef<Polynomial<T>> for QuadraticPolynomial<T> {
    fn as_ref(&self) -> &Polynomial<T> {
        &self.0
    }
}

impl<T> fmt::Display for QuadraticPolynomial<T>
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

    fn solve(coefficients: Vec<f64>) -> Vec<f64> {
        QuadraticPolynomial::from_coefficients(coefficients)
            .unwrap()
            .solve()
    }

    #[test]
    fn test_new() {
        assert_eq!(
            QuadraticPolynomial::from_coefficients(vec![1, 2, 3, 4]),
            Err(PolynomialError::DegreeTooLarge { degree: 3 })
        );
        let poly = QuadraticPolynomial::from_coefficients(vec![1, 2, 3, 0, 0]).unwrap();
        assert_eq!(poly.degree(), 2);
        assert_eq!(*poly.constant_term(), 1);
        assert_eq!(poly.linear_term(), Some(&2));
        assert_eq!(poly.quadratic_term(), Some(&3));
        let poly = QuadraticPolynomial::try_from(polynomial![7]).unwrap();
        assert_eq!(poly.linear_term(), None);
        assert_eq!(Polynomial::from(poly), polynomial![7]);
        assert!(QuadraticPolynomial::try_from(polynomial![0, 0, 0, 1]).is_err());
        assert_eq!(
            QuadraticPolynomial::<i32>::from_coefficients(vec![]),
            Err(PolynomialError::InvalidConstruction(
                "coefficient sequence is empty"
            ))
        );
    }

    #[test]
    fn test_discriminant() {
        let discriminant = |coefficients: Vec<i64>| {
            QuadraticPolynomial::from_coefficients(coefficients)
                .unwrap()
                .discriminant()
        };
        assert_eq!(discriminant(vec![-6, -1, 1]), 25);
        assert_eq!(discriminant(vec![4, 4, 1]), 0);
        assert_eq!(discriminant(vec![1, 0, 1]), -4);
        assert_eq!(discriminant(vec![3, 2]), 4);
        assert_eq!(discriminant(vec![3]), 0);
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(vec![-6.0, -1.0, 1.0]), vec![3.0, -2.0]);
        assert_eq!(solve(vec![1.0, 0.0, 1.0]), Vec::<f64>::new());
        assert_eq!(solve(vec![4.0, 4.0, 1.0]), vec![-2.0]);
        assert_eq!(solve(vec![1.0, 0.0, -1.0]), vec![-1.0, 1.0]);
        assert_eq!(solve(vec![3.0, 2.0]), vec![-1.5]);
        assert_eq!(solve(vec![3.0, 2.0, 0.0]), vec![-1.5]);
        assert_eq!(solve(vec![5.0]), Vec::<f64>::new());
        assert_eq!(solve(vec![0.0]), Vec::<f64>::new());
        let roots = solve(vec![-2.0, 0.0, 1.0]);
        assert_eq!(roots.len(), 2);
        assert!((roots[0] - 2f64.sqrt()).abs() < 1e-12);
        assert!((roots[1] + 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_solve_f32() {
        let poly = QuadraticPolynomial::new(polynomial![-6.0f32, -1.0, 1.0]).unwrap();
        assert_eq!(poly.solve(), vec![3.0, -2.0]);
    }
}
