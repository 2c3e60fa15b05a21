// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Operators and component-wise comparisons.

All of these are Device-only. Their meaning is the shading language's, and the host layer never
evaluates them: every operator yields a [`DeviceResult`] that is an
[`InvalidExecutionContext`](crate::InvalidExecutionContext) on the host. The operator impls
exist so that translated code type-checks with the same operands and result types it has on the
GPU.

| Kind         | Operators                        |
|--------------|----------------------------------|
| all numeric  | `+ - * / %`, with vector or scalar right operand, and scalar `*`/`+`/`-`/`/` vector |
| signed       | unary `-`                        |
| int, uint    | `<< >>`                          |
| int, uint, bool | `& \| ^ !`                    |
*/

use crate::buffer_types::Bool;
use crate::context::{self, Comparison, Member, Operator};
use crate::error::DeviceResult;
use crate::scalar::{Integer, Logical, Numeric, Scalar, Signed, f16};
use crate::vector::{Arity, SupportedArity, Vector};
use std::ops;

macro_rules! binary_ops {
    ($bound:ident: $($trait:ident $method:ident $op:ident),*) => {
        $(
            impl<T: $bound, const N: usize> ops::$trait for Vector<T, N>
            where
                Arity<N>: SupportedArity,
            {
                type Output = DeviceResult<Vector<T, N>>;

                fn $method(self, _rhs: Self) -> Self::Output {
                    context::device_only(Self::SHADER_TYPE, Member::Operator(Operator::$op))
                }
            }

            impl<T: $bound, const N: usize> ops::$trait<T> for Vector<T, N>
            where
                Arity<N>: SupportedArity,
            {
                type Output = DeviceResult<Vector<T, N>>;

                fn $method(self, _rhs: T) -> Self::Output {
                    context::device_only(Self::SHADER_TYPE, Member::Operator(Operator::$op))
                }
            }
        )*
    };
}

binary_ops!(Numeric:
    Add add Add,
    Sub sub Sub,
    Mul mul Mul,
    Div div Div,
    Rem rem Rem
);
binary_ops!(Integer:
    Shl shl Shl,
    Shr shr Shr
);
binary_ops!(Logical:
    BitAnd bitand BitAnd,
    BitOr bitor BitOr,
    BitXor bitxor BitXor
);

/// `scalar op vector`, which needs an impl per foreign scalar type.
macro_rules! scalar_lhs_ops {
    ($($t:ty)*) => {
        $(
            scalar_lhs_ops!(@one $t: Add add Add, Sub sub Sub, Mul mul Mul, Div div Div);
        )*
    };
    (@one $t:ty: $($trait:ident $method:ident $op:ident),*) => {
        $(
            impl<const N: usize> ops::$trait<Vector<$t, N>> for $t
            where
                Arity<N>: SupportedArity,
            {
                type Output = DeviceResult<Vector<$t, N>>;

                fn $method(self, _rhs: Vector<$t, N>) -> Self::Output {
                    context::device_only(
                        Vector::<$t, N>::SHADER_TYPE,
                        Member::Operator(Operator::$op),
                    )
                }
            }
        )*
    };
}

scalar_lhs_ops!(f32 f64 i32 u32 f16);

impl<T: Signed, const N: usize> ops::Neg for Vector<T, N>
where
    Arity<N>: SupportedArity,
{
    type Output = DeviceResult<Vector<T, N>>;

    fn neg(self) -> Self::Output {
        context::device_only(Self::SHADER_TYPE, Member::Operator(Operator::Neg))
    }
}

impl<T: Logical, const N: usize> ops::Not for Vector<T, N>
where
    Arity<N>: SupportedArity,
{
    type Output = DeviceResult<Vector<T, N>>;

    fn not(self) -> Self::Output {
        context::device_only(Self::SHADER_TYPE, Member::Operator(Operator::Not))
    }
}

/*
Comparisons cannot go through PartialEq/PartialOrd, which must return a host bool.  PartialEq on
vectors is host structural equality; the shading-language comparison is one of these.
 */
impl<T: Scalar, const N: usize> Vector<T, N>
where
    Arity<N>: SupportedArity,
{
    fn compare(self, comparison: Comparison) -> DeviceResult<Vector<Bool, N>> {
        context::device_only(Self::SHADER_TYPE, Member::Comparison(comparison))
    }

    /// Component-wise `==`. Device-only.
    pub fn cmp_eq(self, _rhs: Self) -> DeviceResult<Vector<Bool, N>> {
        self.compare(Comparison::Eq)
    }

    /// Component-wise `!=`. Device-only.
    pub fn cmp_ne(self, _rhs: Self) -> DeviceResult<Vector<Bool, N>> {
        self.compare(Comparison::Ne)
    }
}

impl<T: Numeric, const N: usize> Vector<T, N>
where
    Arity<N>: SupportedArity,
{
    pub fn cmp_lt(self, _rhs: Self) -> DeviceResult<Vector<Bool, N>> {
        self.compare(Comparison::Lt)
    }

    pub fn cmp_le(self, _rhs: Self) -> DeviceResult<Vector<Bool, N>> {
        self.compare(Comparison::Le)
    }

    pub fn cmp_gt(self, _rhs: Self) -> DeviceResult<Vector<Bool, N>> {
        self.compare(Comparison::Gt)
    }

    pub fn cmp_ge(self, _rhs: Self) -> DeviceResult<Vector<Bool, N>> {
        self.compare(Comparison::Ge)
    }
}
