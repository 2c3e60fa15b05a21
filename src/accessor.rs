// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! The accessor table of a vector type.
//!
//! A shading language gives every vector one named accessor per swizzle selection and label set:
//! `v.x`, `v.zyx`, `v.rgba`, `v.xxxx`, ... The host layer does not spell these out as methods.
//! It describes them here, so that a translator can type-check user code that names them before
//! rewriting it.
//!
//! ```
//! use shading_types::{Classification, ScalarKind, ShaderType, accessor};
//!
//! let float3 = ShaderType::Vector(ScalarKind::Float, 3);
//! assert!(accessor::find(float3, "bxr").is_err());
//! let zx = accessor::find(float3, "zx").unwrap();
//! assert_eq!(zx.result_type, ShaderType::Vector(ScalarKind::Float, 2));
//! assert!(zx.mutable);
//! assert_eq!(zx.classification, Classification::DeviceOnly);
//! assert_eq!(accessor::accessors(float3).unwrap().count(), 240);
//! ```

use crate::alphabet::Alphabet;
use crate::context::Classification;
use crate::error::SelectionError;
use crate::scalar::ScalarKind;
use crate::shader_type::ShaderType;
use crate::swizzle::{Selection, selection_count};

/// The signature of one named accessor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessorDef {
    /// The accessor's name, e.g. `"xzy"` or `"bgr"`.
    pub name: String,
    pub alphabet: Alphabet,
    pub selection: Selection,
    pub result_type: ShaderType,
    /// Whether the accessor can be assigned through.
    pub mutable: bool,
    pub classification: Classification,
}

impl AccessorDef {
    fn new(kind: ScalarKind, selection: Selection, alphabet: Alphabet) -> Self {
        AccessorDef {
            name: selection.name(alphabet),
            alphabet,
            selection,
            result_type: selection.result_type(kind),
            mutable: selection.is_mutable(),
            classification: selection.classification(),
        }
    }
}

fn vector_parts(ty: ShaderType) -> Result<(ScalarKind, usize), SelectionError> {
    match ty {
        ShaderType::Vector(kind, arity) => Ok((kind, arity)),
        ShaderType::Scalar(_) => Err(SelectionError::UnsupportedArity(1)),
    }
}

/// Every accessor of `ty`, once per alphabet.
pub fn accessors(
    ty: ShaderType,
) -> Result<impl Iterator<Item = AccessorDef>, SelectionError> {
    let (kind, arity) = vector_parts(ty)?;
    Ok(Selection::enumerate(arity)?.flat_map(move |selection| {
        Alphabet::ALL
            .into_iter()
            .map(move |alphabet| AccessorDef::new(kind, selection, alphabet))
    }))
}

/// Number of accessors `accessors(ty)` yields for an `arity`-slot vector.
pub const fn accessor_count(arity: usize) -> Result<usize, SelectionError> {
    match selection_count(arity) {
        Ok(count) => Ok(Alphabet::ALL.len() * count),
        Err(err) => Err(err),
    }
}

/// Looks up the accessor called `name` on `ty`.
pub fn find(ty: ShaderType, name: &str) -> Result<AccessorDef, SelectionError> {
    let (kind, arity) = vector_parts(ty)?;
    let selection = Selection::parse(arity, name)?;
    let alphabet = name
        .chars()
        .next()
        .and_then(Alphabet::classify)
        .map(|(alphabet, _)| alphabet)
        .ok_or(SelectionError::Empty)?;
    Ok(AccessorDef::new(kind, selection, alphabet))
}
