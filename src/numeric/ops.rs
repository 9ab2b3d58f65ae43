// ============================================================================
// Operators
// std::ops overloads for Dec against every DecOperand type
// ============================================================================
//
// Each operator has one Dec-by-Dec implementation (add_exact, sub_exact,
// mul_exact, checked_div). The impls below convert the right-hand side with
// `operand` and dispatch to it, for owned and borrowed receivers alike.

use super::convert::{operand, DecOperand};
use super::dec::Dec;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

macro_rules! impl_binary_op {
    ($op:ident, $method:ident, $assign_op:ident, $assign_method:ident, |$lhs:ident, $rhs:ident| $body:expr) => {
        impl<T: DecOperand> $op<T> for &Dec {
            type Output = Dec;

            #[inline]
            fn $method(self, rhs: T) -> Dec {
                let $lhs = self;
                let $rhs = operand(&rhs);
                $body
            }
        }

        impl<T: DecOperand> $op<T> for Dec {
            type Output = Dec;

            #[inline]
            fn $method(self, rhs: T) -> Dec {
                (&self).$method(rhs)
            }
        }

        impl<T: DecOperand> $assign_op<T> for Dec {
            #[inline]
            fn $assign_method(&mut self, rhs: T) {
                *self = (&*self).$method(rhs);
            }
        }
    };
}

// Infallible operators for ergonomics (panic on a non-finite float operand;
// Div also on a zero divisor - use checked_div to handle that)
impl_binary_op!(Add, add, AddAssign, add_assign, |lhs, rhs| lhs.add_exact(&rhs));
impl_binary_op!(Sub, sub, SubAssign, sub_assign, |lhs, rhs| lhs.sub_exact(&rhs));
impl_binary_op!(Mul, mul, MulAssign, mul_assign, |lhs, rhs| lhs.mul_exact(&rhs));
impl_binary_op!(Div, div, DivAssign, div_assign, |lhs, rhs| lhs
    .checked_div(&rhs)
    .expect("Dec division by zero"));

impl Neg for &Dec {
    type Output = Dec;

    #[inline]
    fn neg(self) -> Dec {
        Dec::new(-self.coefficient(), self.scale())
    }
}

impl Neg for Dec {
    type Output = Dec;

    #[inline]
    fn neg(self) -> Dec {
        -&self
    }
}

impl Sum for Dec {
    fn sum<I: Iterator<Item = Dec>>(iter: I) -> Dec {
        iter.fold(Dec::ZERO, |acc, x| acc.add_exact(&x))
    }
}

impl<'a> Sum<&'a Dec> for Dec {
    fn sum<I: Iterator<Item = &'a Dec>>(iter: I) -> Dec {
        iter.fold(Dec::ZERO, |acc, x| acc.add_exact(x))
    }
}

impl num_traits::Zero for Dec {
    #[inline]
    fn zero() -> Self {
        Dec::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Dec::is_zero(self)
    }
}

impl num_traits::One for Dec {
    #[inline]
    fn one() -> Self {
        Dec::one()
    }
}
