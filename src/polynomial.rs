// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::error::PolynomialError;
use crate::traits::{Derivative, MakeCoefficient, PolynomialEval};
use crate::util::Sign;
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{zero, One, Zero};
use std::collections::{BTreeMap, HashMap};
use std::convert::TryFrom;
use std::fmt;
use std::hash::BuildHasher;
use std::iter;
use std::ops::{AddAssign, Mul, MulAssign, Neg};
use std::slice;
use std::vec;

mod ops;
pub mod odd_degree;
pub mod quadratic;

pub use self::odd_degree::{OddDegreePolynomial, RootSearchOptions};
pub use self::quadratic::QuadraticPolynomial;

/// A single-variable polynomial.
///
/// the term at index `n` is `self.coefficients()[n] * pow(x, n)`
///
/// # Invariants
///
/// `self.coefficients()` is never empty, and `self.coefficients().last()` is
/// only zero for the zero polynomial, which is stored as `[0]`.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Polynomial<T> {
    coefficients: Vec<T>,
}

impl<T: Zero> Polynomial<T> {
    /// builds a polynomial from coefficients in ascending power order.
    pub fn from_coefficients(coefficients: Vec<T>) -> Result<Self, PolynomialError> {
        if coefficients.is_empty() {
            return Err(PolynomialError::InvalidConstruction(
                "coefficient sequence is empty",
            ));
        }
        Ok(Self::from_nonempty(coefficients))
    }
    /// builds a polynomial from positional coefficients, the constant term first.
    ///
    /// this is what the [`polynomial!`](crate::polynomial!) macro expands to.
    pub fn from_variadic(first: T, rest: Vec<T>) -> Self {
        let mut coefficients = Vec::with_capacity(rest.len() + 1);
        coefficients.push(first);
        coefficients.extend(rest);
        Self::from_nonempty(coefficients)
    }
    /// builds a polynomial from `(power, coefficient)` pairs.
    ///
    /// missing powers are zero. if a power is repeated the last value is kept.
    pub fn from_power_map<I: IntoIterator<Item = (usize, T)>>(
        terms: I,
    ) -> Result<Self, PolynomialError> {
        let mut coefficients: Vec<T> = Vec::new();
        for (power, coefficient) in terms {
            while coefficients.len() <= power {
                coefficients.push(zero());
            }
            coefficients[power] = coefficient;
        }
        if coefficients.is_empty() {
            return Err(PolynomialError::InvalidConstruction(
                "power map has no keys",
            ));
        }
        Ok(Self::from_nonempty(coefficients))
    }
    /// the degree-0 polynomial `value`; scalar operands are coerced through this.
    pub fn constant(value: T) -> Self {
        Self::from_nonempty(vec![value])
    }
    fn from_nonempty(coefficients: Vec<T>) -> Self {
        debug_assert!(!coefficients.is_empty());
        let mut retval = Self { coefficients };
        retval.remove_extra_zeros();
        retval
    }
    fn remove_extra_zeros(&mut self) {
        while self.coefficients.len() > 1 {
            match self.coefficients.last() {
                Some(tail) if tail.is_zero() => {
                    self.coefficients.pop();
                }
                _ => break,
            }
        }
    }
    /// `true` if `self` is the degree-0 polynomial `value`
    pub fn equals_constant(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match &*self.coefficients {
            [coefficient] => coefficient == value,
            _ => false,
        }
    }
}

impl<T: Clone> Polynomial<T> {
    pub fn from_copy(source: &Self) -> Self {
        source.clone()
    }
}

impl<T> Polynomial<T> {
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }
    pub fn into_coefficients(self) -> Vec<T> {
        self.coefficients
    }
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.coefficients.iter()
    }
    /// number of stored coefficients, always `self.degree() + 1`
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }
    pub fn leading_coefficient(&self) -> &T {
        &self.coefficients[self.degree()]
    }
    /// `(power, coefficient)` pairs in ascending power order.
    ///
    /// every call starts a new iteration over the stored coefficients.
    pub fn terms(&self) -> iter::Enumerate<slice::Iter<'_, T>> {
        self.coefficients.iter().enumerate()
    }
    /// differentiates `order` times.
    ///
    /// returns the zero polynomial when `order` exceeds the degree.
    pub fn nth_derivative(&self, order: usize) -> Self
    where
        T: Clone + Zero + MakeCoefficient<usize>,
        for<'a> &'a T: Mul<T, Output = T>,
    {
        if order > self.degree() {
            return Self::constant(zero());
        }
        let mut retval = self.clone();
        for _ in 0..order {
            retval = (&retval).derivative();
        }
        retval
    }
}

impl<T: Zero> TryFrom<Vec<T>> for Polynomial<T> {
    type Error = PolynomialError;
    fn try_from(coefficients: Vec<T>) -> Result<Self, PolynomialError> {
        Self::from_coefficients(coefficients)
    }
}

impl<T: Zero> TryFrom<BTreeMap<usize, T>> for Polynomial<T> {
    type Error = PolynomialError;
    fn try_from(terms: BTreeMap<usize, T>) -> Result<Self, PolynomialError> {
        Self::from_power_map(terms)
    }
}

impl<T: Zero, S: BuildHasher> TryFrom<HashMap<usize, T, S>> for Polynomial<T> {
    type Error = PolynomialError;
    fn try_from(terms: HashMap<usize, T, S>) -> Result<Self, PolynomialError> {
        Self::from_power_map(terms)
    }
}

impl<T: Clone + Integer> From<Polynomial<T>> for Polynomial<Ratio<T>> {
    fn from(src: Polynomial<T>) -> Self {
        let coefficients = src.into_iter().map(Ratio::from_integer).collect();
        Self { coefficients }
    }
}

impl<T> PolynomialEval<T> for Polynomial<T>
where
    T: Zero + AddAssign,
    for<'a> T: MulAssign<&'a T>,
{
    fn eval(self, x: &T) -> T {
        let mut iter = self.into_iter().rev();
        if let Some(last) = iter.next() {
            let mut retval = last;
            for coefficient in iter {
                retval *= x;
                retval += coefficient;
            }
            retval
        } else {
            zero()
        }
    }
}

impl<'a, T> PolynomialEval<T> for &'a Polynomial<T>
where
    T: Zero + AddAssign<&'a T> + Clone,
    for<'b> T: MulAssign<&'b T>,
{
    fn eval(self, x: &T) -> T {
        let mut iter = self.iter().rev();
        if let Some(last) = iter.next() {
            let mut retval = last.clone();
            for coefficient in iter {
                retval *= x;
                retval += coefficient;
            }
            retval
        } else {
            zero()
        }
    }
}

/// exact evaluation of an integer polynomial at a rational point
impl<'a, T> PolynomialEval<Ratio<T>> for &'a Polynomial<T>
where
    T: Clone + Integer,
    Ratio<T>: AddAssign + for<'b> MulAssign<&'b Ratio<T>>,
{
    fn eval(self, x: &Ratio<T>) -> Ratio<T> {
        let mut iter = self.iter().rev();
        if let Some(last) = iter.next() {
            let mut retval = Ratio::from_integer(last.clone());
            for coefficient in iter {
                retval *= x;
                retval += Ratio::from_integer(coefficient.clone());
            }
            retval
        } else {
            zero()
        }
    }
}

impl<T> IntoIterator for Polynomial<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.coefficients.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Polynomial<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// renders in descending powers, e.g. `3x^2 - 2x + 1`.
///
/// zero terms are skipped, so the zero polynomial renders as an empty string.
impl<T> fmt::Display for Polynomial<T>
where
    T: fmt::Display + Zero + One + PartialOrd + Clone + Neg<Output = T>,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut is_leading = true;
        for (power, coefficient) in self.terms().rev() {
            let sign = match Sign::new(coefficient) {
                Some(sign) => sign,
                None if coefficient.is_zero() => continue,
                // NaN
                None => Sign::Positive,
            };
            let magnitude = match sign {
                Sign::Negative => -coefficient.clone(),
                Sign::Positive => coefficient.clone(),
            };
            match (is_leading, sign) {
                (true, Sign::Negative) => f.write_str("-")?,
                (true, Sign::Positive) => {}
                (false, Sign::Negative) => f.write_str(" - ")?,
                (false, Sign::Positive) => f.write_str(" + ")?,
            }
            if power == 0 || !magnitude.is_one() {
                write!(f, "{}", magnitude)?;
            }
            match power {
                0 => {}
                1 => f.write_str("x")?,
                _ => write!(f, "x^{}", power)?,
            }
            is_leading = false;
        }
        Ok(())
    }
}

impl<T> Derivative for Polynomial<T>
where
    T: Mul<Output = T> + MakeCoefficient<usize>,
    T: Zero,
{
    type Output = Self;
    fn derivative(self) -> Self {
        let mut iter = self.into_iter().enumerate();
        iter.next();
        let coefficients: Vec<T> = iter
            .map(|(power, coefficient)| coefficient * MakeCoefficient::make_coefficient(power))
            .collect();
        if coefficients.is_empty() {
            return Polynomial::constant(zero());
        }
        Polynomial::from_nonempty(coefficients)
    }
}

impl<'a, T> Derivative for &'a Polynomial<T>
where
    &'a T: Mul<T, Output = T>,
    T: Zero + MakeCoefficient<usize>,
{
    type Output = Polynomial<T>;
    fn derivative(self) -> Polynomial<T> {
        let mut iter = self.iter().enumerate();
        iter.next();
        let coefficients: Vec<T> = iter
            .map(|(power, coefficient)| coefficient * MakeCoefficient::make_coefficient(power))
            .collect();
        if coefficients.is_empty() {
            return Polynomial::constant(zero());
        }
        Polynomial::from_nonempty(coefficients)
    }
}

impl<T: Zero + Clone> Polynomial<T> {
    /// the nonzero terms as a power map
    pub fn to_power_map(&self) -> BTreeMap<usize, T> {
        self.terms()
            .filter(|(_, coefficient)| !coefficient.is_zero())
            .map(|(power, coefficient)| (power, coefficient.clone()))
            .collect()
    }
}
