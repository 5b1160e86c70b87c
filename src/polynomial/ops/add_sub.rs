// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::polynomial::Polynomial;
use num_traits::{zero, One, Zero};
use std::ops::{Add, AddAssign, MulAssign, Neg, Sub, SubAssign};

/// zero-padded elementwise `lhs[i] op= rhs[i]`, then renormalize
fn add_sub_assign<T: Zero, AddSubAssign: Fn(&mut T, &T)>(
    lhs: &mut Polynomial<T>,
    rhs: &Polynomial<T>,
    add_sub_assign: AddSubAssign,
) {
    while lhs.coefficients.len() < rhs.coefficients.len() {
        lhs.coefficients.push(zero());
    }
    for (lhs_coefficient, rhs_coefficient) in lhs.coefficients.iter_mut().zip(rhs.iter()) {
        add_sub_assign(lhs_coefficient, rhs_coefficient);
    }
    lhs.remove_extra_zeros();
}

impl<T> AddAssign for Polynomial<T>
where
    T: Zero + for<'a> AddAssign<&'a T>,
{
    fn add_assign(&mut self, rhs: Polynomial<T>) {
        add_sub_assign(self, &rhs, |l, r| *l += r);
    }
}

impl<'a, T> AddAssign<&'a Polynomial<T>> for Polynomial<T>
where
    T: Zero + for<'b> AddAssign<&'b T>,
{
    fn add_assign(&mut self, rhs: &Polynomial<T>) {
        add_sub_assign(self, rhs, |l, r| *l += r);
    }
}

impl<T> AddAssign<T> for Polynomial<T>
where
    T: Zero + for<'a> AddAssign<&'a T>,
{
    fn add_assign(&mut self, rhs: T) {
        *self += Polynomial::constant(rhs);
    }
}

impl<T> Add for Polynomial<T>
where
    T: Zero + for<'a> AddAssign<&'a T>,
{
    type Output = Polynomial<T>;
    fn add(mut self, rhs: Polynomial<T>) -> Self::Output {
        self += rhs;
        self
    }
}

impl<'a, T> Add<&'a Polynomial<T>> for Polynomial<T>
where
    T: Zero + for<'b> AddAssign<&'b T>,
{
    type Output = Polynomial<T>;
    fn add(mut self, rhs: &Polynomial<T>) -> Self::Output {
        self += rhs;
        self
    }
}

impl<'a, T> Add<Polynomial<T>> for &'a Polynomial<T>
where
    T: Zero + for<'b> AddAssign<&'b T>,
{
    type Output = Polynomial<T>;
    fn add(self, mut rhs: Polynomial<T>) -> Self::Output {
        rhs += self;
        rhs
    }
}

impl<'a, T> Add for &'a Polynomial<T>
where
    T: Zero + Clone + for<'b> AddAssign<&'b T>,
{
    type Output = Polynomial<T>;
    fn add(self, rhs: Self) -> Self::Output {
        let mut retval = self.clone();
        retval += rhs;
        retval
    }
}

impl<T> Add<T> for Polynomial<T>
where
    T: Zero + for<'a> AddAssign<&'a T>,
{
    type Output = Polynomial<T>;
    fn add(mut self, rhs: T) -> Self::Output {
        self += rhs;
        self
    }
}

impl<'a, T> Add<T> for &'a Polynomial<T>
where
    T: Zero + Clone + for<'b> AddAssign<&'b T>,
{
    type Output = Polynomial<T>;
    fn add(self, rhs: T) -> Self::Output {
        let mut retval = self.clone();
        retval += rhs;
        retval
    }
}

impl<T> Zero for Polynomial<T>
where
    T: Zero + for<'a> AddAssign<&'a T>,
{
    fn zero() -> Self {
        Polynomial::constant(zero())
    }
    fn set_zero(&mut self) {
        self.coefficients.truncate(1);
        self.coefficients[0].set_zero();
    }
    fn is_zero(&self) -> bool {
        match &*self.coefficients {
            [coefficient] => coefficient.is_zero(),
            _ => false,
        }
    }
}

/// multiplies by the scalar `-1`
impl<T> Neg for Polynomial<T>
where
    T: Zero + One + Neg<Output = T> + for<'a> MulAssign<&'a T>,
{
    type Output = Polynomial<T>;
    fn neg(self) -> Polynomial<T> {
        self * -T::one()
    }
}

impl<'a, T> Neg for &'a Polynomial<T>
where
    T: Zero + One + Clone + Neg<Output = T> + for<'b> MulAssign<&'b T>,
{
    type Output = Polynomial<T>;
    fn neg(self) -> Polynomial<T> {
        self * -T::one()
    }
}

impl<T> SubAssign for Polynomial<T>
where
    T: Zero + for<'a> SubAssign<&'a T>,
{
    fn sub_assign(&mut self, rhs: Polynomial<T>) {
        add_sub_assign(self, &rhs, |l, r| *l -= r);
    }
}

impl<'a, T> SubAssign<&'a Polynomial<T>> for Polynomial<T>
where
    T: Zero + for<'b> SubAssign<&'b T>,
{
    fn sub_assign(&mut self, rhs: &Polynomial<T>) {
        add_sub_assign(self, rhs, |l, r| *l -= r);
    }
}

impl<T> SubAssign<T> for Polynomial<T>
where
    T: Zero + for<'a> SubAssign<&'a T>,
{
    fn sub_assign(&mut self, rhs: T) {
        *self -= Polynomial::constant(rhs);
    }
}

impl<T> Sub for Polynomial<T>
where
    T: Zero + for<'a> SubAssign<&'a T>,
{
    type Output = Polynomial<T>;
    fn sub(mut self, rhs: Polynomial<T>) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<'a, T> Sub<&'a Polynomial<T>> for Polynomial<T>
where
    T: Zero + for<'b> SubAssign<&'b T>,
{
    type Output = Polynomial<T>;
    fn sub(mut self, rhs: &Polynomial<T>) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<'a, T> Sub<Polynomial<T>> for &'a Polynomial<T>
where
    T: Zero + Clone + for<'b> SubAssign<&'b T>,
{
    type Output = Polynomial<T>;
    fn sub(self, rhs: Polynomial<T>) -> Self::Output {
        let mut retval = self.clone();
        retval -= rhs;
        retval
    }
}

impl<'a, T> Sub for &'a Polynomial<T>
where
    T: Zero + Clone + for<'b> SubAssign<&'b T>,
{
    type Output = Polynomial<T>;
    fn sub(self, rhs: Self) -> Self::Output {
        let mut retval = self.clone();
        retval -= rhs;
        retval
    }
}

impl<T> Sub<T> for Polynomial<T>
where
    T: Zero + for<'a> SubAssign<&'a T>,
{
    type Output = Polynomial<T>;
    fn sub(mut self, rhs: T) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<'a, T> Sub<T> for &'a Polynomial<T>
where
    T: Zero + Clone + for<'b> SubAssign<&'b T>,
{
    type Output = Polynomial<T>;
    fn sub(self, rhs: T) -> Self::Output {
        let mut retval = self.clone();
        retval -= rhs;
        retval
    }
}

impl<T> Polynomial<T>
where
    T: Zero + One + Neg<Output = T> + for<'a> SubAssign<&'a T> + for<'a> MulAssign<&'a T>,
{
    /// `lhs - self`, computed as the negation of `self - lhs`
    pub fn subtract_from(self, lhs: T) -> Polynomial<T> {
        -(self - lhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polynomial::ops::util::tests::{
        random_polynomial, test_op_helper, test_scalar_op_helper,
    };
    use num_rational::Ratio;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn test_add() {
        let test = |l: Polynomial<i32>, r: Polynomial<i32>, expected: &Polynomial<i32>| {
            test_op_helper(
                l,
                r,
                expected,
                |l, r| *l += r,
                |l, r| *l += r,
                |l, r| l + r,
                |l, r| l + r,
                |l, r| l + r,
                |l, r| l + r,
            );
        };
        test(
            polynomial![1, 2, 3, 4],
            polynomial![5, 6, 7, 8],
            &polynomial![6, 8, 10, 12],
        );
        test(
            polynomial![1, 2, 3, 4, -1],
            polynomial![5, 6, 7, 8, 1],
            &polynomial![6, 8, 10, 12],
        );
        test(polynomial![1, 2], polynomial![0, 0, 3], &polynomial![1, 2, 3]);
        test(polynomial![0, 0, 3], polynomial![1], &polynomial![1, 0, 3]);
        test(polynomial![1, -2, 3], polynomial![0], &polynomial![1, -2, 3]);
        test(polynomial![1, -2, 3], polynomial![-1, 2, -3], &polynomial![0]);
    }

    #[test]
    fn test_add_scalar() {
        let test = |l: Polynomial<i32>, r: i32, expected: &Polynomial<i32>| {
            test_scalar_op_helper(l, r, expected, |l, r| *l += r, |l, r| l + r, |l, r| l + r);
        };
        test(polynomial![1, 2, 3], 4, &polynomial![5, 2, 3]);
        test(polynomial![-4], 4, &polynomial![0]);
        test(polynomial![0], 0, &polynomial![0]);
    }

    #[test]
    fn test_sub() {
        let test = |l: Polynomial<i32>, r: Polynomial<i32>, expected: &Polynomial<i32>| {
            test_op_helper(
                l,
                r,
                expected,
                |l, r| *l -= r,
                |l, r| *l -= r,
                |l, r| l - r,
                |l, r| l - r,
                |l, r| l - r,
                |l, r| l - r,
            );
        };
        test(
            polynomial![1, 2, 3, 4],
            polynomial![8, 7, 6, 5],
            &polynomial![-7, -5, -3, -1],
        );
        test(polynomial![1, 2, 3, 4], polynomial![1, 2, 3, 4], &polynomial![0]);
        test(polynomial![1], polynomial![0, 0, 2], &polynomial![1, 0, -2]);
        test(polynomial![1, 1, 5], polynomial![0, 0, 5], &polynomial![1, 1]);
    }

    #[test]
    fn test_sub_scalar() {
        let test = |l: Polynomial<i32>, r: i32, expected: &Polynomial<i32>| {
            test_scalar_op_helper(l, r, expected, |l, r| *l -= r, |l, r| l - r, |l, r| l - r);
        };
        test(polynomial![1, 2, 3], 4, &polynomial![-3, 2, 3]);
        test(polynomial![4], 4, &polynomial![0]);
        assert_eq!(polynomial![1, 2, 3].subtract_from(4), polynomial![3, -2, -3]);
        assert_eq!(polynomial![4].subtract_from(4), polynomial![0]);
    }

    #[test]
    fn test_neg() {
        assert_eq!(-polynomial![1, -2, 3], polynomial![-1, 2, -3]);
        assert_eq!(-&polynomial![1, -2, 3], polynomial![-1, 2, -3]);
        assert_eq!(-polynomial![0], polynomial![0]);
        assert_eq!(-polynomial![0.5, 0.0, -1.5], polynomial![-0.5, 0.0, 1.5]);
        let r = |n: i64, d: i64| Ratio::new(n, d);
        assert_eq!(
            -polynomial![r(1, 2), r(-3, 4)],
            polynomial![r(-1, 2), r(3, 4)]
        );
    }

    #[test]
    fn test_zero() {
        let mut poly = polynomial![1, 2, 3];
        assert!(!poly.is_zero());
        poly.set_zero();
        assert!(poly.is_zero());
        assert_eq!(poly, Polynomial::zero());
        assert_eq!(poly.coefficients(), &[0]);
        assert_eq!(poly.degree(), 0);
    }

    #[test]
    fn test_additive_properties() {
        let mut rng = Pcg64Mcg::seed_from_u64(0);
        for _ in 0..200 {
            let p = random_polynomial(&mut rng, 6);
            let q = random_polynomial(&mut rng, 6);
            assert_eq!(&p + &Polynomial::zero(), p);
            assert_eq!(&p + &q, &q + &p);
            assert_eq!(&p - &q, &p + &-&q);
            assert_eq!(&p - &q + &q, p);
            assert_eq!(-(&p - &q), &q - &p);
            assert!((&p - &p).is_zero());
        }
    }
}
