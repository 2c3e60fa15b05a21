// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Fixed-arity vectors mirroring the shading language's `float4`, `int2`, `bool3`, ...
//!
//! A [`Vector<T, N>`] holds `N` (2, 3 or 4) slots of one [`Scalar`] kind. The memory layout is a
//! hard contract, because host code copies these values into GPU-visible buffers byte for byte:
//!
//! - slot `i` lives at offset `i * size_of::<T>()`
//! - the alignment is the scalar's natural alignment (8 for `double`, on every target)
//! - the size is `N * size_of::<T>()`, which is always a multiple of that alignment
//!
//! # Host-valid members
//!
//! Construction, identities, broadcast, single-component access, formatting and structural
//! equality run on the host. Everything else is Device-only; see [`crate::context`].
//!
//! ```
//! use shading_types::{Float2, Float3, Float4};
//!
//! let xy = Float2::new(1.0, 2.0);
//! let v = Float4::from((xy, 3.0, 4.0));
//! assert_eq!(v.x(), 1.0);
//! assert_eq!(v.a(), 4.0);
//! assert_eq!(Float4::UNIT_Z, Float4::new(0.0, 0.0, 1.0, 0.0));
//! assert_eq!(Float3::splat(2.5), Float3::from(2.5));
//! assert_eq!(v.to_string(), "<1, 2, 3, 4>");
//! ```

use crate::buffer_types::Bool;
use crate::context::{self, Member};
use crate::error::DeviceResult;
use crate::scalar::{Scalar, f16};
use crate::shader_type::ShaderType;
use crate::swizzle::{Project, ProjectMut, Swizzle, SwizzleMut};
use std::fmt::{self, Debug, Display};

/// Marks a supported vector arity.
///
/// Only `Arity<2>`, `Arity<3>` and `Arity<4>` implement [`SupportedArity`].
pub struct Arity<const N: usize>;

/// Implemented for the arities a vector may have.
pub trait SupportedArity: crate::scalar::sealed::Sealed {}

impl crate::scalar::sealed::Sealed for Arity<2> {}
impl crate::scalar::sealed::Sealed for Arity<3> {}
impl crate::scalar::sealed::Sealed for Arity<4> {}
impl SupportedArity for Arity<2> {}
impl SupportedArity for Arity<3> {}
impl SupportedArity for Arity<4> {}

/// A vector of `N` slots of scalar kind `T`.
#[repr(C)]
#[derive(Clone, Copy, PartialEq)]
pub struct Vector<T: Scalar, const N: usize> {
    slots: [T; N],
    _align: [T::Align; 0],
}

pub type Float2 = Vector<f32, 2>;
pub type Float3 = Vector<f32, 3>;
pub type Float4 = Vector<f32, 4>;
pub type Double2 = Vector<f64, 2>;
pub type Double3 = Vector<f64, 3>;
pub type Double4 = Vector<f64, 4>;
pub type Int2 = Vector<i32, 2>;
pub type Int3 = Vector<i32, 3>;
pub type Int4 = Vector<i32, 4>;
pub type UInt2 = Vector<u32, 2>;
pub type UInt3 = Vector<u32, 3>;
pub type UInt4 = Vector<u32, 4>;
pub type Half2 = Vector<f16, 2>;
pub type Half3 = Vector<f16, 3>;
pub type Half4 = Vector<f16, 4>;
pub type Bool2 = Vector<Bool, 2>;
pub type Bool3 = Vector<Bool, 3>;
pub type Bool4 = Vector<Bool, 4>;

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// This type as the shading language names it.
    pub const SHADER_TYPE: ShaderType = ShaderType::Vector(T::KIND, N);
}

impl<T: Scalar, const N: usize> Vector<T, N>
where
    Arity<N>: SupportedArity,
{
    /// All slots set to the additive identity.
    pub const ZERO: Self = Self::splat(T::ZERO);
    /// All slots set to the multiplicative identity.
    pub const ONE: Self = Self::splat(T::ONE);

    /// Byte size of the type.
    pub const SIZE: usize = std::mem::size_of::<Self>();
    /// Alignment of the type.
    pub const ALIGN: usize = std::mem::align_of::<Self>();

    pub const fn from_array(slots: [T; N]) -> Self {
        Self { slots, _align: [] }
    }

    /// Broadcasts `value` into every slot.
    pub const fn splat(value: T) -> Self {
        Self::from_array([value; N])
    }

    /// The unit basis vector for `slot`: 1 there, 0 elsewhere.
    pub fn unit(slot: usize) -> Option<Self> {
        if slot >= N {
            return None;
        }
        let mut slots = [T::ZERO; N];
        slots[slot] = T::ONE;
        Some(Self::from_array(slots))
    }

    /// Byte offset of `slot` within the vector, or `None` past the last slot.
    pub const fn offset_of(slot: usize) -> Option<usize> {
        if slot >= N {
            return None;
        }
        Some(slot * std::mem::size_of::<T>())
    }

    pub const fn as_array(&self) -> &[T; N] {
        &self.slots
    }

    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.slots
    }

    pub const fn to_array(self) -> [T; N] {
        self.slots
    }

    /// Projects the components `selector` picks.
    ///
    /// A single component is read from its real slot. Selecting more than one component is
    /// Device-only, even when the selection is every slot in storage order.
    ///
    /// ```
    /// use shading_types::{Float4, Swizzle};
    ///
    /// let v = Float4::new(1.0, 2.0, 3.0, 4.0);
    /// assert_eq!(v.swizzle(Swizzle::new([2])), Ok(3.0));
    /// assert!(v.swizzle(Swizzle::new([0, 1, 2, 3])).is_err());
    /// ```
    pub fn swizzle<const L: usize>(
        &self,
        selector: Swizzle<N, L>,
    ) -> DeviceResult<<Swizzle<N, L> as Project<T>>::Output>
    where
        Swizzle<N, L>: Project<T>,
    {
        selector.project(Self::SHADER_TYPE, &self.slots)
    }

    /// A writable projection.
    ///
    /// For one component this is `&mut T` into the real slot. For more, it is a
    /// [`SentinelRef`](crate::SentinelRef) that never touches `self`.
    pub fn swizzle_mut<const L: usize>(
        &mut self,
        selector: SwizzleMut<N, L>,
    ) -> <SwizzleMut<N, L> as ProjectMut<T>>::Ref<'_>
    where
        SwizzleMut<N, L>: ProjectMut<T>,
    {
        selector.project_mut(Self::SHADER_TYPE, &mut self.slots)
    }

    /// Component at runtime `index`. Device-only.
    pub fn at(&self, index: usize) -> DeviceResult<T> {
        let _ = index;
        context::device_only(Self::SHADER_TYPE, Member::Index)
    }

    /// Explicit conversion to another scalar kind. Device-only.
    pub fn cast<U: Scalar>(self) -> DeviceResult<Vector<U, N>> {
        context::device_only(Self::SHADER_TYPE, Member::Cast)
    }

    /// Renders like [`Display`], with `separator` between components instead of `,`.
    ///
    /// Pass the locale's number-group separator to get culture-aware output.
    ///
    /// ```
    /// use shading_types::Float3;
    ///
    /// let v = Float3::new(1.5, 2.0, 3.0);
    /// assert_eq!(v.display_with(";").to_string(), "<1.5; 2; 3>");
    /// ```
    pub fn display_with<'a>(&'a self, separator: &'a str) -> DisplayWith<'a, T, N> {
        DisplayWith {
            vector: self,
            separator,
        }
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    fn write_components(&self, f: &mut fmt::Formatter<'_>, separator: &str) -> fmt::Result {
        f.write_str("<")?;
        for (i, component) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(separator)?;
                f.write_str(" ")?;
            }
            Display::fmt(component, f)?;
        }
        f.write_str(">")
    }
}

/// Single-component accessors. These alias the real slots: `x` and `r` are the same storage.
macro_rules! components {
    ($n:literal: $($slot:literal => $x:ident $x_mut:ident $set_x:ident / $r:ident $r_mut:ident $set_r:ident),*) => {
        impl<T: Scalar> Vector<T, $n> {
            $(
                #[inline]
                pub const fn $x(&self) -> T {
                    self.slots[$slot]
                }
                #[inline]
                pub fn $x_mut(&mut self) -> &mut T {
                    &mut self.slots[$slot]
                }
                #[inline]
                pub fn $set_x(&mut self, value: T) {
                    self.slots[$slot] = value;
                }
                #[inline]
                pub const fn $r(&self) -> T {
                    self.slots[$slot]
                }
                #[inline]
                pub fn $r_mut(&mut self) -> &mut T {
                    &mut self.slots[$slot]
                }
                #[inline]
                pub fn $set_r(&mut self, value: T) {
                    self.slots[$slot] = value;
                }
            )*
        }
    };
}

components!(2:
    0 => x x_mut set_x / r r_mut set_r,
    1 => y y_mut set_y / g g_mut set_g
);
components!(3:
    0 => x x_mut set_x / r r_mut set_r,
    1 => y y_mut set_y / g g_mut set_g,
    2 => z z_mut set_z / b b_mut set_b
);
components!(4:
    0 => x x_mut set_x / r r_mut set_r,
    1 => y y_mut set_y / g g_mut set_g,
    2 => z z_mut set_z / b b_mut set_b,
    3 => w w_mut set_w / a a_mut set_a
);

impl<T: Scalar> Vector<T, 2> {
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO);
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE);

    pub const fn new(x: T, y: T) -> Self {
        Self::from_array([x, y])
    }
}

impl<T: Scalar> Vector<T, 3> {
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO, T::ZERO);
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO);
    pub const UNIT_Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE);

    pub const fn new(x: T, y: T, z: T) -> Self {
        Self::from_array([x, y, z])
    }
}

impl<T: Scalar> Vector<T, 4> {
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO);
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO, T::ZERO);
    pub const UNIT_Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE, T::ZERO);
    pub const UNIT_W: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE);

    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self::from_array([x, y, z, w])
    }
}

/*
Composition constructors.  Every ordered partition of the arity into groups of 1, 2 or 3
slots, where groups of 2 and 3 come from smaller vectors.
 */

impl<T: Scalar> From<(Vector<T, 2>, T)> for Vector<T, 3> {
    fn from((xy, z): (Vector<T, 2>, T)) -> Self {
        Self::new(xy.x(), xy.y(), z)
    }
}

impl<T: Scalar> From<(T, Vector<T, 2>)> for Vector<T, 3> {
    fn from((x, yz): (T, Vector<T, 2>)) -> Self {
        Self::new(x, yz.x(), yz.y())
    }
}

impl<T: Scalar> From<(Vector<T, 2>, T, T)> for Vector<T, 4> {
    fn from((xy, z, w): (Vector<T, 2>, T, T)) -> Self {
        Self::new(xy.x(), xy.y(), z, w)
    }
}

impl<T: Scalar> From<(T, Vector<T, 2>, T)> for Vector<T, 4> {
    fn from((x, yz, w): (T, Vector<T, 2>, T)) -> Self {
        Self::new(x, yz.x(), yz.y(), w)
    }
}

impl<T: Scalar> From<(T, T, Vector<T, 2>)> for Vector<T, 4> {
    fn from((x, y, zw): (T, T, Vector<T, 2>)) -> Self {
        Self::new(x, y, zw.x(), zw.y())
    }
}

impl<T: Scalar> From<(Vector<T, 2>, Vector<T, 2>)> for Vector<T, 4> {
    fn from((xy, zw): (Vector<T, 2>, Vector<T, 2>)) -> Self {
        Self::new(xy.x(), xy.y(), zw.x(), zw.y())
    }
}

impl<T: Scalar> From<(Vector<T, 3>, T)> for Vector<T, 4> {
    fn from((xyz, w): (Vector<T, 3>, T)) -> Self {
        Self::new(xyz.x(), xyz.y(), xyz.z(), w)
    }
}

impl<T: Scalar> From<(T, Vector<T, 3>)> for Vector<T, 4> {
    fn from((x, yzw): (T, Vector<T, 3>)) -> Self {
        Self::new(x, yzw.x(), yzw.y(), yzw.z())
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N>
where
    Arity<N>: SupportedArity,
{
    fn from(slots: [T; N]) -> Self {
        Self::from_array(slots)
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(vector: Vector<T, N>) -> Self {
        vector.slots
    }
}

/// Scalar broadcast.
impl<T: Scalar, const N: usize> From<T> for Vector<T, N>
where
    Arity<N>: SupportedArity,
{
    fn from(value: T) -> Self {
        Self::splat(value)
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N>
where
    Arity<N>: SupportedArity,
{
    fn default() -> Self {
        Self::ZERO
    }
}

/// `<c0, c1, ...>`. Formatter options apply to each component.
impl<T: Scalar, const N: usize> Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_components(f, ",")
    }
}

impl<T: Scalar, const N: usize> Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = Self::SHADER_TYPE.to_string();
        let mut tuple = f.debug_tuple(&name);
        for component in &self.slots {
            tuple.field(component);
        }
        tuple.finish()
    }
}

/// Returned by [`Vector::display_with`].
pub struct DisplayWith<'a, T: Scalar, const N: usize> {
    vector: &'a Vector<T, N>,
    separator: &'a str,
}

impl<T: Scalar, const N: usize> Display for DisplayWith<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.vector.write_components(f, self.separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Operator;
    use crate::scalar::ScalarKind;

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn layout_matches_shader_type() {
        fn check<T: Scalar, const N: usize>()
        where
            Arity<N>: SupportedArity,
        {
            let ty = Vector::<T, N>::SHADER_TYPE;
            assert_eq!(Vector::<T, N>::SIZE, ty.size(), "{ty}");
            assert_eq!(Vector::<T, N>::ALIGN, ty.align(), "{ty}");
            for slot in 0..N {
                assert_eq!(Vector::<T, N>::offset_of(slot), Some(slot * T::KIND.size()));
            }
            assert_eq!(Vector::<T, N>::offset_of(N), None);
            assert_eq!(Vector::<T, N>::unit(N), None);
        }
        check::<f32, 2>();
        check::<f32, 3>();
        check::<f32, 4>();
        check::<f64, 2>();
        check::<f64, 3>();
        check::<f64, 4>();
        check::<f16, 3>();
        check::<Bool, 4>();
        check::<u32, 3>();
        check::<i32, 2>();
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn double_is_eight_aligned() {
        assert_eq!(std::mem::align_of::<Double2>(), 8);
        assert_eq!(std::mem::size_of::<Double3>(), 24);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn compositions() {
        let xy = Int2::new(1, 2);
        let zw = Int2::new(3, 4);
        let expected = Int4::new(1, 2, 3, 4);
        assert_eq!(Int4::from((xy, 3, 4)), expected);
        assert_eq!(Int4::from((1, Int2::new(2, 3), 4)), expected);
        assert_eq!(Int4::from((1, 2, zw)), expected);
        assert_eq!(Int4::from((xy, zw)), expected);
        assert_eq!(Int4::from((Int3::new(1, 2, 3), 4)), expected);
        assert_eq!(Int4::from((1, Int3::new(2, 3, 4))), expected);
        assert_eq!(Int3::from((xy, 3)), Int3::new(1, 2, 3));
        assert_eq!(Int3::from((1, Int2::new(2, 3))), Int3::new(1, 2, 3));
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn identities() {
        assert_eq!(Float2::ZERO, Float2::new(0.0, 0.0));
        assert_eq!(UInt3::ONE, UInt3::new(1, 1, 1));
        assert_eq!(Bool3::ONE, Bool3::splat(Bool::TRUE));
        assert_eq!(Float4::unit(2), Some(Float4::UNIT_Z));
        assert_eq!(Float4::unit(4), None);
        assert_eq!(Half2::default(), Half2::ZERO);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn formatting() {
        assert_eq!(Float3::new(1.0, 2.0, 3.0).to_string(), "<1, 2, 3>");
        assert_eq!(Int4::new(1, 2, 3, 4).to_string(), "<1, 2, 3, 4>");
        assert_eq!(format!("{:.1}", Float2::new(1.0, 0.5)), "<1.0, 0.5>");
        assert_eq!(Bool2::new(Bool::TRUE, Bool::FALSE).to_string(), "<true, false>");
        assert_eq!(
            Double2::new(1.5, 2.5).display_with(".").to_string(),
            "<1.5. 2.5>"
        );
        assert_eq!(format!("{:?}", UInt2::new(7, 8)), "uint2(7, 8)");
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn indexer_and_cast_are_device_only() {
        let v = Float3::new(1.0, 2.0, 3.0);
        let err = v.at(0).unwrap_err();
        assert_eq!(err.member(), Member::Index);
        assert_eq!(err.shader_type(), ShaderType::Vector(ScalarKind::Float, 3));
        let err = v.cast::<i32>().unwrap_err();
        assert_eq!(err.member(), Member::Cast);
        assert_ne!(err.member(), Member::Operator(Operator::Add));
    }
}
