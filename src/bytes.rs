// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Raw byte views for copying values into GPU-visible buffers.

use crate::buffer_types::Bool;
use crate::scalar::{Scalar, f16};
use crate::vector::Vector;

pub(crate) mod sealed {
    /// Marker trait indicating C-compatible memory layout.
    ///
    /// Types implementing this trait have predictable memory layout with:
    /// - No padding between fields
    /// - No uninitialized bytes
    /// - Stable field ordering
    ///
    /// # Safety
    ///
    /// This trait is unsafe to implement because incorrect implementation
    /// could lead to undefined behavior when casting to byte slices.
    pub unsafe trait ReprC {}
}

pub use sealed::ReprC;

unsafe impl ReprC for f32 {}
unsafe impl ReprC for f64 {}
unsafe impl ReprC for i32 {}
unsafe impl ReprC for u32 {}
unsafe impl ReprC for f16 {}
unsafe impl ReprC for Bool {}
//slot data is N contiguous scalars; the alignment marker is zero-sized and
//never raises the alignment above the scalar's size, so there is no tail padding.
unsafe impl<T: Scalar + ReprC, const N: usize> ReprC for Vector<T, N> {}

/// Views a slice of scalars or vectors as the bytes a GPU buffer expects.
///
/// ```
/// use shading_types::{Float2, bytes::as_bytes};
///
/// let values = [Float2::new(1.0, 2.0)];
/// let raw = as_bytes(&values);
/// assert_eq!(raw.len(), 8);
/// assert_eq!(&raw[4..8], &2.0f32.to_ne_bytes());
/// ```
pub fn as_bytes<T: ReprC>(values: &[T]) -> &[u8] {
    //safe because we know that T is repr(C)
    //(we offloaded the safety check to the ReprC trait)
    unsafe { std::slice::from_raw_parts(values.as_ptr() as *const u8, std::mem::size_of_val(values)) }
}
