// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::polynomial::Polynomial;
use num_traits::{One, Zero};
use std::ops::{AddAssign, Mul, MulAssign};

impl<'a, T> Mul for &'a Polynomial<T>
where
    T: Zero + Clone + AddAssign + Mul<Output = T>,
{
    type Output = Polynomial<T>;
    fn mul(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        let mut coefficients = Vec::with_capacity(self.degree() + rhs.degree() + 1);
        for (l_index, l_coefficient) in self.terms() {
            for (r_index, r_coefficient) in rhs.terms() {
                let index = l_index + r_index;
                let product = l_coefficient.clone() * r_coefficient.clone();
                if index == coefficients.len() {
                    coefficients.push(product);
                } else {
                    coefficients[index] += product;
                }
            }
        }
        Polynomial::from_nonempty(coefficients)
    }
}

impl<'a, T> Mul<Polynomial<T>> for &'a Polynomial<T>
where
    T: Zero + Clone + AddAssign + Mul<Output = T>,
{
    type Output = Polynomial<T>;
    fn mul(self, rhs: Polynomial<T>) -> Polynomial<T> {
        self * &rhs
    }
}

impl<'a, T> Mul<&'a Polynomial<T>> for Polynomial<T>
where
    T: Zero + Clone + AddAssign + Mul<Output = T>,
{
    type Output = Polynomial<T>;
    fn mul(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        &self * rhs
    }
}

impl<T> Mul for Polynomial<T>
where
    T: Zero + Clone + AddAssign + Mul<Output = T>,
{
    type Output = Polynomial<T>;
    fn mul(self, rhs: Polynomial<T>) -> Polynomial<T> {
        &self * &rhs
    }
}

impl<T> MulAssign for Polynomial<T>
where
    T: Zero + Clone + AddAssign + Mul<Output = T>,
{
    fn mul_assign(&mut self, rhs: Polynomial<T>) {
        *self = &*self * rhs;
    }
}

impl<'a, T> MulAssign<&'a Polynomial<T>> for Polynomial<T>
where
    T: Zero + Clone + AddAssign + Mul<Output = T>,
{
    fn mul_assign(&mut self, rhs: &Polynomial<T>) {
        *self = &*self * rhs;
    }
}

impl<T> One for Polynomial<T>
where
    T: Zero + One + Clone + AddAssign + Mul<Output = T>,
{
    fn one() -> Self {
        Polynomial::constant(One::one())
    }
    fn set_one(&mut self) {
        self.coefficients.truncate(1);
        self.coefficients[0].set_one();
    }
}

fn mul_assign_single<T>(lhs: &mut Polynomial<T>, rhs: &T)
where
    T: Zero + for<'a> MulAssign<&'a T>,
{
    lhs.coefficients.iter_mut().for_each(|v| *v *= rhs);
    lhs.remove_extra_zeros();
}

impl<T> MulAssign<T> for Polynomial<T>
where
    T: Zero + for<'a> MulAssign<&'a T>,
{
    fn mul_assign(&mut self, rhs: T) {
        mul_assign_single(self, &rhs);
    }
}

impl<T> Mul<T> for Polynomial<T>
where
    T: Zero + for<'a> MulAssign<&'a T>,
{
    type Output = Polynomial<T>;
    fn mul(mut self, rhs: T) -> Polynomial<T> {
        mul_assign_single(&mut self, &rhs);
        self
    }
}

impl<'a, T> Mul<T> for &'a Polynomial<T>
where
    T: Zero + Clone + for<'b> MulAssign<&'b T>,
{
    type Output = Polynomial<T>;
    fn mul(self, rhs: T) -> Polynomial<T> {
        let mut retval = self.clone();
        mul_assign_single(&mut retval, &rhs);
        retval
    }
}
