// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Inert storage behind reference-shaped Device-only accessors.

A multi-component swizzle can be written through in shader code (`v.zx = ...`). On the host
there is no consistent storage location for such a selection, but the accessor must still hand
back something that can be read and written so that the call site type-checks. It hands back a
[`SentinelRef`] into the [`SentinelRegion`] of the vector's concrete type.

The region is zero-filled and never modified. Reads through a sentinel reference see zeros,
which carry no meaning; writes are discarded.
*/

use crate::scalar::Scalar;
use crate::shader_type::ShaderType;
use crate::vector::{Arity, SupportedArity, Vector};
use std::marker::PhantomData;

/// Process-lifetime scratch block for one concrete vector type.
///
/// Sized for the largest vector of the scalar kind, whatever the arity of its owner.
#[derive(Debug)]
pub struct SentinelRegion<T: Scalar> {
    owner: ShaderType,
    slots: Vector<T, 4>,
}

impl<T: Scalar> SentinelRegion<T> {
    /// The region belonging to `Vector<T, N>`.
    ///
    /// The first call for a given type initializes the region; every later call, from any
    /// thread, returns the same one.
    pub fn of<const N: usize>() -> &'static Self
    where
        Arity<N>: SupportedArity,
    {
        T::sentinel_cells()[N - 2].get_or_init(|| {
            let owner = ShaderType::Vector(T::KIND, N);
            logwise::trace_sync!(
                "Initializing sentinel region for {owner}",
                owner = owner.to_string()
            );
            SentinelRegion {
                owner,
                slots: Vector::<T, 4>::ZERO,
            }
        })
    }

    /// The vector type this region serves.
    pub fn owner(&self) -> ShaderType {
        self.owner
    }

    /// Number of scalar slots in the region.
    pub fn capacity(&self) -> usize {
        4
    }

    pub fn as_ptr(&self) -> *const T {
        self.slots.as_array().as_ptr()
    }

    fn read<const L: usize>(&self) -> Vector<T, L>
    where
        Arity<L>: SupportedArity,
    {
        let slots = self.slots.as_array();
        Vector::from_array(std::array::from_fn(|i| slots[i]))
    }
}

/// What a Device-only, multi-component `swizzle_mut` returns on the host.
///
/// It borrows the vector it was obtained from, like a real reference would, but never
/// touches it.
#[derive(Debug)]
pub struct SentinelRef<'a, T: Scalar, const L: usize> {
    region: &'static SentinelRegion<T>,
    _borrow: PhantomData<&'a mut T>,
}

impl<'a, T: Scalar, const L: usize> SentinelRef<'a, T, L>
where
    Arity<L>: SupportedArity,
{
    pub(crate) fn new(region: &'static SentinelRegion<T>) -> Self {
        Self {
            region,
            _borrow: PhantomData,
        }
    }

    /// Reads the sentinel contents. The value is meaningless.
    pub fn get(&self) -> Vector<T, L> {
        self.region.read()
    }

    /// Discards `value`.
    pub fn set(&mut self, value: Vector<T, L>) {
        logwise::trace_sync!(
            "Discarding host write of {value} through a sentinel for {owner}",
            value = logwise::privacy::LogIt(&value),
            owner = self.region.owner.to_string()
        );
    }

    pub fn region(&self) -> &'static SentinelRegion<T> {
        self.region
    }

    pub fn as_ptr(&self) -> *const T {
        self.region.as_ptr()
    }
}
