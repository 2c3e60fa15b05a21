// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
The swizzle projection algebra.

A swizzle selects 1 to 4 of a vector's slots, in any order and with repetition, and yields a
scalar (one slot) or a vector of the selection's length. Which selections exist, which can be
written through, and what they yield is a pure function of the source arity and the index
sequence:

| Attribute        | Rule                                              |
|------------------|---------------------------------------------------|
| result arity     | length of the selection                           |
| result type      | the scalar kind if the length is 1, else a vector |
| mutable          | all indices pairwise different                    |
| classification   | Host-valid for length 1, Device-only otherwise    |

There are two faces to the algebra:

- [`Selection`] is the runtime value, used to enumerate and name accessors.
- [`Swizzle`] and [`SwizzleMut`] are the compile-time selectors accepted by
  [`Vector::swizzle`] and [`Vector::swizzle_mut`]. A `SwizzleMut` can only be built from a
  selection without repeated indices, so a write through `xx` cannot be expressed.

```
use shading_types::{Alphabet, Float4, Selection, Swizzle, SwizzleMut};

let zyx = Selection::parse(4, "zyx").unwrap();
assert!(zyx.is_mutable());
assert_eq!(zyx.name(Alphabet::Color), "bgr");
assert!(!Selection::parse(4, "xx").unwrap().is_mutable());

let mut v = Float4::new(1.0, 2.0, 3.0, 4.0);
*v.swizzle_mut(SwizzleMut::new([1])) = 20.0;
assert_eq!(v.g(), 20.0);
assert!(v.swizzle(Swizzle::new([2, 1, 0])).is_err());
```
*/

use crate::alphabet::Alphabet;
use crate::context::{self, Classification, Member};
use crate::error::{DeviceResult, SelectionError};
use crate::scalar::{Scalar, ScalarKind};
use crate::sentinel::{SentinelRef, SentinelRegion};
use crate::shader_type::ShaderType;
use crate::vector::{Arity, SupportedArity, Vector};

/// The longest selection a swizzle may make.
pub const MAX_SELECTION: usize = 4;

const fn check_arity(arity: usize) -> Result<(), SelectionError> {
    if arity >= 2 && arity <= 4 {
        Ok(())
    } else {
        Err(SelectionError::UnsupportedArity(arity))
    }
}

/// Number of distinct selections over `arity` slots: `arity + arity² + arity³ + arity⁴`.
///
/// Each selection has one accessor per [`Alphabet`]. Fails for an arity no vector has.
pub const fn selection_count(arity: usize) -> Result<usize, SelectionError> {
    if let Err(err) = check_arity(arity) {
        return Err(err);
    }
    let mut total = 0;
    let mut power = 1;
    let mut len = 0;
    while len < MAX_SELECTION {
        power *= arity;
        total += power;
        len += 1;
    }
    Ok(total)
}

/// An ordered selection of 1 to 4 slots of an `arity`-slot vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    arity: usize,
    len: usize,
    indices: [usize; MAX_SELECTION],
}

impl Selection {
    pub fn new(arity: usize, indices: &[usize]) -> Result<Self, SelectionError> {
        check_arity(arity)?;
        match indices.len() {
            0 => return Err(SelectionError::Empty),
            len if len > MAX_SELECTION => return Err(SelectionError::TooLong(len)),
            _ => {}
        }
        let mut selection = Selection {
            arity,
            len: indices.len(),
            indices: [0; MAX_SELECTION],
        };
        for (slot, &index) in selection.indices.iter_mut().zip(indices) {
            if index >= arity {
                return Err(SelectionError::OutOfRange { index, arity });
            }
            *slot = index;
        }
        Ok(selection)
    }

    /// Parses an accessor name such as `"xzy"` or `"bgr"`.
    pub fn parse(arity: usize, name: &str) -> Result<Self, SelectionError> {
        check_arity(arity)?;
        let mut indices = [0; MAX_SELECTION];
        let mut len = 0;
        let mut alphabet = None;
        for label in name.chars() {
            if len == MAX_SELECTION {
                return Err(SelectionError::TooLong(name.chars().count()));
            }
            let (label_alphabet, index) =
                Alphabet::classify(label).ok_or(SelectionError::UnknownLabel(label))?;
            match alphabet {
                None => alphabet = Some(label_alphabet),
                Some(a) if a != label_alphabet => return Err(SelectionError::MixedAlphabets),
                Some(_) => {}
            }
            indices[len] = index;
            len += 1;
        }
        Selection::new(arity, &indices[..len])
    }

    /// Every selection over `arity` slots: shortest first, then in lexicographic index order.
    pub fn enumerate(arity: usize) -> Result<Selections, SelectionError> {
        check_arity(arity)?;
        Ok(Selections {
            arity,
            next: Some(Selection {
                arity,
                len: 1,
                indices: [0; MAX_SELECTION],
            }),
        })
    }

    /// The accessor name in `alphabet`.
    pub fn name(&self, alphabet: Alphabet) -> String {
        let labels = alphabet.labels();
        self.indices().iter().map(|&i| labels[i]).collect()
    }

    /// Arity of the source vector.
    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices[..self.len]
    }

    pub const fn result_arity(&self) -> usize {
        self.len
    }

    pub const fn is_scalar(&self) -> bool {
        self.len == 1
    }

    pub fn is_distinct(&self) -> bool {
        let indices = self.indices();
        indices
            .iter()
            .enumerate()
            .all(|(i, a)| !indices[i + 1..].contains(a))
    }

    /// Whether the accessor can be written through.
    ///
    /// A repeated index has no single storage location to bind a write to.
    pub fn is_mutable(&self) -> bool {
        self.is_distinct()
    }

    pub fn result_type(&self, kind: ScalarKind) -> ShaderType {
        if self.is_scalar() {
            ShaderType::Scalar(kind)
        } else {
            ShaderType::Vector(kind, self.len)
        }
    }

    pub fn classification(&self) -> Classification {
        context::classify(Member::Swizzle { selection: *self })
    }
}

/// Iterator returned by [`Selection::enumerate`].
#[derive(Debug, Clone)]
pub struct Selections {
    arity: usize,
    next: Option<Selection>,
}

impl Iterator for Selections {
    type Item = Selection;

    fn next(&mut self) -> Option<Selection> {
        let current = self.next?;
        let mut successor = current;
        //odometer over the selected indices, last index fastest
        let mut position = successor.len;
        loop {
            if position == 0 {
                //every index rolled over; grow the selection
                successor.len += 1;
                successor.indices = [0; MAX_SELECTION];
                self.next = (successor.len <= MAX_SELECTION).then_some(successor);
                break;
            }
            position -= 1;
            successor.indices[position] += 1;
            if successor.indices[position] < self.arity {
                self.next = Some(successor);
                break;
            }
            successor.indices[position] = 0;
        }
        Some(current)
    }
}

/// A compile-time selection of `L` slots from an `N`-slot vector.
///
/// Out-of-range indices are rejected when the selector is built. Used in a `const`, that is a
/// compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Swizzle<const N: usize, const L: usize> {
    indices: [usize; L],
}

impl<const N: usize, const L: usize> Swizzle<N, L> {
    pub const fn new(indices: [usize; L]) -> Self {
        assert!(N >= 2 && N <= 4, "vectors have 2, 3 or 4 components");
        assert!(L >= 1 && L <= MAX_SELECTION, "a swizzle selects 1 to 4 components");
        let mut i = 0;
        while i < L {
            assert!(indices[i] < N, "swizzle index out of range");
            i += 1;
        }
        Self { indices }
    }

    pub const fn indices(&self) -> [usize; L] {
        self.indices
    }

    pub const fn is_distinct(&self) -> bool {
        let mut i = 0;
        while i < L {
            let mut j = i + 1;
            while j < L {
                if self.indices[i] == self.indices[j] {
                    return false;
                }
                j += 1;
            }
            i += 1;
        }
        true
    }

    /// The runtime form of this selector.
    pub fn selection(&self) -> Selection {
        let mut indices = [0; MAX_SELECTION];
        indices[..L].copy_from_slice(&self.indices);
        Selection {
            arity: N,
            len: L,
            indices,
        }
    }
}

/// A compile-time selection with no repeated index; the writable form of [`Swizzle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwizzleMut<const N: usize, const L: usize> {
    inner: Swizzle<N, L>,
}

impl<const N: usize, const L: usize> SwizzleMut<N, L> {
    pub const fn new(indices: [usize; L]) -> Self {
        let inner = Swizzle::new(indices);
        assert!(
            inner.is_distinct(),
            "a writable swizzle cannot repeat a component"
        );
        Self { inner }
    }

    pub const fn from_swizzle(swizzle: Swizzle<N, L>) -> Option<Self> {
        if swizzle.is_distinct() {
            Some(Self { inner: swizzle })
        } else {
            None
        }
    }

    pub const fn as_swizzle(&self) -> Swizzle<N, L> {
        self.inner
    }
}

mod private {
    pub trait Sealed {}
}

impl<const N: usize, const L: usize> private::Sealed for Swizzle<N, L> {}
impl<const N: usize, const L: usize> private::Sealed for SwizzleMut<N, L> {}

/// Maps a selector to the value it yields from a `T` vector.
pub trait Project<T: Scalar>: private::Sealed {
    /// `T` for one component, `Vector<T, L>` otherwise.
    type Output;

    #[doc(hidden)]
    fn project(&self, source: ShaderType, slots: &[T]) -> DeviceResult<Self::Output>;
}

/// Maps a writable selector to the storage it yields from a `T` vector.
pub trait ProjectMut<T: Scalar>: private::Sealed {
    /// `&mut T` for one component, [`SentinelRef`] otherwise.
    type Ref<'a>
    where
        T: 'a;

    #[doc(hidden)]
    fn project_mut<'a>(&self, source: ShaderType, slots: &'a mut [T]) -> Self::Ref<'a>;
}

impl<T: Scalar, const N: usize> Project<T> for Swizzle<N, 1> {
    type Output = T;

    fn project(&self, _source: ShaderType, slots: &[T]) -> DeviceResult<T> {
        Ok(slots[self.indices[0]])
    }
}

impl<T: Scalar, const N: usize> ProjectMut<T> for SwizzleMut<N, 1> {
    type Ref<'a> = &'a mut T;

    fn project_mut<'a>(&self, _source: ShaderType, slots: &'a mut [T]) -> &'a mut T {
        &mut slots[self.inner.indices[0]]
    }
}

macro_rules! multi_component {
    ($($l:literal)*) => {
        $(
            impl<T: Scalar, const N: usize> Project<T> for Swizzle<N, $l> {
                type Output = Vector<T, $l>;

                fn project(&self, source: ShaderType, _slots: &[T]) -> DeviceResult<Self::Output> {
                    context::device_only(
                        source,
                        Member::Swizzle {
                            selection: self.selection(),
                        },
                    )
                }
            }

            impl<T: Scalar, const N: usize> ProjectMut<T> for SwizzleMut<N, $l>
            where
                Arity<N>: SupportedArity,
            {
                type Ref<'a> = SentinelRef<'a, T, $l>;

                fn project_mut<'a>(&self, source: ShaderType, _slots: &'a mut [T]) -> Self::Ref<'a> {
                    logwise::warn_sync!(
                        "Device-only swizzle {accessor} borrowed on host for {source}",
                        accessor = self.inner.selection().name(Alphabet::Position),
                        source = source.to_string()
                    );
                    SentinelRef::<T, $l>::new(SentinelRegion::<T>::of::<N>())
                }
            }
        )*
    };
}

multi_component!(2 3 4);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn counts() {
        assert_eq!(selection_count(2), Ok(30));
        assert_eq!(selection_count(3), Ok(120));
        assert_eq!(selection_count(4), Ok(340));
        for arity in 2..=4 {
            assert_eq!(
                Ok(Selection::enumerate(arity).unwrap().count()),
                selection_count(arity)
            );
        }
        assert_eq!(selection_count(1), Err(SelectionError::UnsupportedArity(1)));
        assert_eq!(
            selection_count(usize::MAX),
            Err(SelectionError::UnsupportedArity(usize::MAX))
        );
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn enumeration_order() {
        let names: Vec<String> = Selection::enumerate(2)
            .unwrap()
            .take(7)
            .map(|s| s.name(Alphabet::Position))
            .collect();
        assert_eq!(names, ["x", "y", "xx", "xy", "yx", "yy", "xxx"]);
        let last = Selection::enumerate(3).unwrap().last().unwrap();
        assert_eq!(last.name(Alphabet::Color), "bbbb");
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn parse_errors() {
        assert_eq!(Selection::parse(4, ""), Err(SelectionError::Empty));
        assert_eq!(Selection::parse(4, "xyzwx"), Err(SelectionError::TooLong(5)));
        let long = "x".repeat(10_000);
        assert_eq!(Selection::parse(4, &long), Err(SelectionError::TooLong(10_000)));
        assert_eq!(Selection::parse(4, "xg"), Err(SelectionError::MixedAlphabets));
        assert_eq!(Selection::parse(4, "xq"), Err(SelectionError::UnknownLabel('q')));
        assert_eq!(
            Selection::parse(2, "xz"),
            Err(SelectionError::OutOfRange { index: 2, arity: 2 })
        );
        assert_eq!(
            Selection::parse(5, "x"),
            Err(SelectionError::UnsupportedArity(5))
        );
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn derived_attributes() {
        let s = Selection::new(3, &[2, 0]).unwrap();
        assert_eq!(s.result_arity(), 2);
        assert!(!s.is_scalar());
        assert!(s.is_mutable());
        assert_eq!(
            s.result_type(ScalarKind::Int),
            ShaderType::Vector(ScalarKind::Int, 2)
        );
        assert_eq!(s.classification(), Classification::DeviceOnly);

        let s = Selection::new(3, &[1]).unwrap();
        assert_eq!(s.result_type(ScalarKind::Int), ShaderType::Scalar(ScalarKind::Int));
        assert_eq!(s.classification(), Classification::HostValid);

        assert!(!Selection::new(4, &[0, 1, 0]).unwrap().is_mutable());
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn const_selectors_agree_with_runtime_selection() {
        const YX: Swizzle<3, 2> = Swizzle::new([1, 0]);
        assert_eq!(YX.selection(), Selection::parse(3, "yx").unwrap());
        assert!(SwizzleMut::from_swizzle(YX).is_some());
        assert!(SwizzleMut::<3, 2>::from_swizzle(Swizzle::new([1, 1])).is_none());
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn identity_order_is_still_device_only() {
        let v = Vector::<i32, 3>::new(1, 2, 3);
        let err = v.swizzle(Swizzle::new([0, 1, 2])).unwrap_err();
        assert_eq!(
            err.member(),
            Member::Swizzle {
                selection: Selection::parse(3, "xyz").unwrap()
            }
        );
        assert_eq!(
            err.to_string(),
            "int3.xyz is only available in code translated for the device"
        );
    }
}
