// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*! Defines scalar types whose host representation differs from Rust's.

The shading-language `bool` occupies 4 bytes in every buffer layout, so the host
copy cannot be `std::primitive::bool`.
*/
use std::fmt::{Debug, Display};

/// A 4-byte boolean, laid out like the shading-language `bool`.
///
/// Any nonzero bit pattern reads as `true`; values built on the host are always 0 or 1.
///
/// ```
/// use shading_types::Bool;
///
/// let b: Bool = true.into();
/// assert!(bool::from(b));
/// assert_eq!(std::mem::size_of::<Bool>(), 4);
/// ```
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Bool(u32);

impl Bool {
    pub const FALSE: Bool = Bool(0);
    pub const TRUE: Bool = Bool(1);

    pub const fn new(value: std::primitive::bool) -> Self {
        Bool(if value { 1 } else { 0 })
    }

    pub const fn get(self) -> std::primitive::bool {
        self.0 != 0
    }
}

impl std::convert::From<Bool> for std::primitive::bool {
    fn from(value: Bool) -> Self {
        value.get()
    }
}

impl std::convert::From<std::primitive::bool> for Bool {
    fn from(value: std::primitive::bool) -> Self {
        Bool::new(value)
    }
}

impl Display for Bool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.get(), f)
    }
}

impl Debug for Bool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.get(), f)
    }
}
