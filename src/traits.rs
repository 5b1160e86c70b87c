// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use num_integer::Integer;
use num_rational::Ratio;

pub trait PolynomialEval<T> {
    fn eval(self, x: &T) -> T;
}

pub trait Derivative {
    type Output;
    fn derivative(self) -> Self::Output;
}

/// converts a power of `x` into a coefficient value.
///
/// only implemented for types that hold any realistic degree without truncation
pub trait MakeCoefficient<Src> {
    fn make_coefficient(src: Src) -> Self;
}

macro_rules! impl_make_coefficient {
    ($($t:ty),*) => {
        $(
            impl MakeCoefficient<usize> for $t {
                fn make_coefficient(src: usize) -> Self {
                    src as $t
                }
            }
        )*
    };
}

impl_make_coefficient!(i32, i64, i128, isize, u32, u64, u128, usize, f32, f64);

impl<T> MakeCoefficient<usize> for Ratio<T>
where
    T: MakeCoefficient<usize> + Clone + Integer,
{
    fn make_coefficient(src: usize) -> Self {
        Ratio::from_integer(T::make_coefficient(src))
    }
}
