// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! operators with a primitive scalar on the left-hand side

use crate::polynomial::Polynomial;
use std::ops::{Add, Mul, Sub};

macro_rules! impl_reflected_scalar_ops {
    ($t:ty) => {
        impl Add<Polynomial<$t>> for $t {
            type Output = Polynomial<$t>;
            fn add(self, rhs: Polynomial<$t>) -> Polynomial<$t> {
                rhs + self
            }
        }

        impl<'a> Add<&'a Polynomial<$t>> for $t {
            type Output = Polynomial<$t>;
            fn add(self, rhs: &Polynomial<$t>) -> Polynomial<$t> {
                rhs + self
            }
        }

        impl Sub<Polynomial<$t>> for $t {
            type Output = Polynomial<$t>;
            fn sub(self, rhs: Polynomial<$t>) -> Polynomial<$t> {
                rhs.subtract_from(self)
            }
        }

        impl<'a> Sub<&'a Polynomial<$t>> for $t {
            type Output = Polynomial<$t>;
            fn sub(self, rhs: &Polynomial<$t>) -> Polynomial<$t> {
                rhs.clone().subtract_from(self)
            }
        }

        impl Mul<Polynomial<$t>> for $t {
            type Output = Polynomial<$t>;
            fn mul(self, rhs: Polynomial<$t>) -> Polynomial<$t> {
                rhs * self
            }
        }

        impl<'a> Mul<&'a Polynomial<$t>> for $t {
            type Output = Polynomial<$t>;
            fn mul(self, rhs: &Polynomial<$t>) -> Polynomial<$t> {
                rhs * self
            }
        }

        impl PartialEq<$t> for Polynomial<$t> {
            fn eq(&self, rhs: &$t) -> bool {
                self.equals_constant(rhs)
            }
        }

        impl PartialEq<Polynomial<$t>> for $t {
            fn eq(&self, rhs: &Polynomial<$t>) -> bool {
                rhs.equals_constant(self)
            }
        }
    };
}

impl_reflected_scalar_ops!(i8);
impl_reflected_scalar_ops!(i16);
impl_reflected_scalar_ops!(i32);
impl_reflected_scalar_ops!(i64);
impl_reflected_scalar_ops!(i128);
impl_reflected_scalar_ops!(isize);
impl_reflected_scalar_ops!(f32);
impl_reflected_scalar_ops!(f64);
