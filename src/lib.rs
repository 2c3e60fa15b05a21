// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*! shading_types is the host-side half of an embedded shader DSL: value types that mirror a
shading language's `float4`, `int2`, `bool3` and friends.

The same source is read two ways. Host code runs it as Rust, to build constant values and copy
them into GPU-visible buffers. A translator reads functions destined for the GPU and rewrites
uses of these types into shading-language expressions. This crate gives both readers what they
need:

| Concern                 | Module                       | Host behavior                               |
|-------------------------|------------------------------|---------------------------------------------|
| Vector storage          | [`vector`]                   | `#[repr(C)]`, HLSL offsets and alignment    |
| Construction, constants | [`vector`]                   | Real values                                 |
| Component labels        | [`alphabet`]                 | `xyzw` and `rgba` alias the same slots      |
| Swizzles                | [`swizzle`], [`accessor`]    | One component: real. More: Device-only      |
| Operators, casts        | [`ops`], [`Vector::cast`]    | Device-only                                 |
| Buffer bytes and layout | [`bytes`], [`layout`]        | Real values                                 |

# Execution contexts

Every member is either Host-valid or Device-only ([`context`]). A Device-only member has its
real meaning only after translation. Called on the host, it returns an
[`InvalidExecutionContext`] naming the type and the member. A reference-shaped Device-only
accessor returns a [`SentinelRef`] instead, which never touches the vector.

```
use shading_types::{Float4, Member, Operator, Swizzle};

let v = Float4::new(1.0, 2.0, 3.0, 4.0);
assert_eq!(v.x(), 1.0);
assert_eq!(v.r(), 1.0);

let err = (v + Float4::ONE).unwrap_err();
assert_eq!(err.member(), Member::Operator(Operator::Add));
assert!(v.swizzle(Swizzle::new([0, 1])).is_err());
```

# Scalar kinds

One algebra serves every kind: `f32`, `f64`, `i32`, `u32`, [`f16`] and [`Bool`]. See
[`scalar`].
*/

pub mod accessor;
pub mod alphabet;
mod buffer_types;
pub mod bytes;
pub mod context;
mod error;
mod imp;
pub mod layout;
pub mod ops;
pub mod scalar;
mod sentinel;
mod shader_type;
pub mod swizzle;
pub mod vector;

pub use alphabet::Alphabet;
pub use buffer_types::Bool;
pub use context::{Classification, Comparison, ExecutionContext, Member, Operator, classify};
pub use error::{DeviceResult, InvalidExecutionContext, SelectionError};
#[cfg(feature = "backend_wgpu")]
pub use imp::vertex_format;
pub use scalar::{Scalar, ScalarKind, f16};
pub use sentinel::{SentinelRef, SentinelRegion};
pub use shader_type::ShaderType;
pub use swizzle::{Selection, Swizzle, SwizzleMut, selection_count};
pub use vector::{
    Bool2, Bool3, Bool4, Double2, Double3, Double4, Float2, Float3, Float4, Half2, Half3, Half4,
    Int2, Int3, Int4, UInt2, UInt3, UInt4, Vector,
};
