// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use num_traits::Zero;
use std::cmp::Ordering;
use std::ops::Neg;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Sign {
    Negative,
    Positive,
}

impl Sign {
    /// returns `None` for zero and for values that don't compare against zero (NaN)
    pub fn new<T: PartialOrd + Zero>(v: &T) -> Option<Sign> {
        match v.partial_cmp(&Zero::zero()) {
            Some(Ordering::Less) => Some(Sign::Negative),
            Some(Ordering::Greater) => Some(Sign::Positive),
            _ => None,
        }
    }
}

impl Neg for Sign {
    type Output = Sign;
    fn neg(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Positive => Sign::Negative,
        }
    }
}

/// `true` when `a` and `b` are both nonzero and have opposite signs.
///
/// Equivalent to `a * b < 0` without the risk of the product overflowing or
/// underflowing to zero.
pub fn has_sign_change<T: PartialOrd + Zero>(a: &T, b: &T) -> bool {
    match (Sign::new(a), Sign::new(b)) {
        (Some(a), Some(b)) => a == -b,
        _ => false,
    }
}
