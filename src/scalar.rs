// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Scalar kinds that can fill a vector slot.
//!
//! Every vector in this crate is generic over one [`Scalar`]. The trait is sealed: the set of
//! kinds is fixed by what the shading language can express, and the layout guarantees in
//! [`crate::bytes`] rely on it.
//!
//! | Kind                  | Rust type   | Shader name | Size |
//! |-----------------------|-------------|-------------|------|
//! | [`ScalarKind::Float`]  | `f32`       | `float`     | 4    |
//! | [`ScalarKind::Double`] | `f64`       | `double`    | 8    |
//! | [`ScalarKind::Int`]    | `i32`       | `int`       | 4    |
//! | [`ScalarKind::UInt`]   | `u32`       | `uint`      | 4    |
//! | [`ScalarKind::Half`]   | [`f16`]     | `half`      | 2    |
//! | [`ScalarKind::Bool`]   | [`Bool`]    | `bool`      | 4    |

use crate::buffer_types::Bool;
use crate::sentinel::SentinelRegion;
use std::fmt::{Debug, Display};
use std::sync::OnceLock;

pub use half::f16;

/// The scalar kinds a vector slot may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Float,
    Double,
    Int,
    UInt,
    Half,
    Bool,
}

impl ScalarKind {
    pub const ALL: [ScalarKind; 6] = [
        ScalarKind::Float,
        ScalarKind::Double,
        ScalarKind::Int,
        ScalarKind::UInt,
        ScalarKind::Half,
        ScalarKind::Bool,
    ];

    /// Size in bytes of one scalar of this kind.
    pub const fn size(self) -> usize {
        match self {
            ScalarKind::Float | ScalarKind::Int | ScalarKind::UInt | ScalarKind::Bool => 4,
            ScalarKind::Double => 8,
            ScalarKind::Half => 2,
        }
    }

    /// Natural alignment of this kind. Shading languages align scalars to their size.
    pub const fn align(self) -> usize {
        self.size()
    }

    /// The shading-language spelling, e.g. `float`.
    pub const fn shader_name(self) -> &'static str {
        match self {
            ScalarKind::Float => "float",
            ScalarKind::Double => "double",
            ScalarKind::Int => "int",
            ScalarKind::UInt => "uint",
            ScalarKind::Half => "half",
            ScalarKind::Bool => "bool",
        }
    }

    pub const fn is_numeric(self) -> bool {
        !matches!(self, ScalarKind::Bool)
    }

    pub const fn is_integer(self) -> bool {
        matches!(self, ScalarKind::Int | ScalarKind::UInt)
    }
}

pub(crate) mod sealed {
    pub trait Sealed {}
}

/*
Alignment markers.  A zero-length array of one of these inside a vector raises the vector's
alignment to the scalar's natural alignment, even on targets where e.g. `f64` is 4-aligned.
 */
#[doc(hidden)]
#[repr(align(2))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Align2;

#[doc(hidden)]
#[repr(align(4))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Align4;

#[doc(hidden)]
#[repr(align(8))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Align8;

/// A type that can occupy a vector slot.
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait Scalar:
    sealed::Sealed + Copy + Debug + Display + PartialEq + Default + Send + Sync + 'static
{
    const KIND: ScalarKind;
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;

    #[doc(hidden)]
    type Align: Copy + Debug + Default + PartialEq + Send + Sync + 'static;

    /// One lazily initialized sentinel region per arity (2, 3, 4).
    #[doc(hidden)]
    fn sentinel_cells() -> &'static [OnceLock<SentinelRegion<Self>>; 3];
}

/// Scalars with arithmetic operators (`+ - * / %`).
pub trait Numeric: Scalar {}
/// Scalars with unary negation.
pub trait Signed: Numeric {}
/// Scalars with shift operators.
pub trait Integer: Numeric {}
/// Scalars with bitwise/logical operators (`& | ^ !`).
pub trait Logical: Scalar {}

macro_rules! impl_scalars {
    ($($t:ty => $kind:ident, $zero:expr, $one:expr, $align:ty;)*) => {
        $(
            impl sealed::Sealed for $t {}
            impl Scalar for $t {
                const KIND: ScalarKind = ScalarKind::$kind;
                const ZERO: Self = $zero;
                const ONE: Self = $one;
                type Align = $align;

                fn sentinel_cells() -> &'static [OnceLock<SentinelRegion<Self>>; 3] {
                    static CELLS: [OnceLock<SentinelRegion<$t>>; 3] =
                        [const { OnceLock::new() }; 3];
                    &CELLS
                }
            }
        )*
    };
}

impl_scalars! {
    f32 => Float, 0.0, 1.0, Align4;
    f64 => Double, 0.0, 1.0, Align8;
    i32 => Int, 0, 1, Align4;
    u32 => UInt, 0, 1, Align4;
    f16 => Half, f16::ZERO, f16::ONE, Align2;
    Bool => Bool, Bool::FALSE, Bool::TRUE, Align4;
}

macro_rules! impl_marker {
    ($marker:ident for $($t:ty)*) => {
        $(impl $marker for $t {})*
    };
}

impl_marker!(Numeric for f32 f64 i32 u32 f16);
impl_marker!(Signed for f32 f64 i32 f16);
impl_marker!(Integer for i32 u32);
impl_marker!(Logical for i32 u32 Bool);
