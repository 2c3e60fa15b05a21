// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Runtime descriptions of shader value types.

use crate::scalar::ScalarKind;
use std::fmt::Display;

/// A shader value type: a scalar, or a vector of 2 to 4 scalars of one kind.
///
/// This is what a swizzle yields, what a buffer field holds, and what an
/// [`InvalidExecutionContext`](crate::InvalidExecutionContext) names.
///
/// ```
/// use shading_types::{ScalarKind, ShaderType};
///
/// let ty = ShaderType::Vector(ScalarKind::Double, 3);
/// assert_eq!(ty.to_string(), "double3");
/// assert_eq!(ty.size(), 24);
/// assert_eq!(ty.align(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderType {
    Scalar(ScalarKind),
    Vector(ScalarKind, usize),
}

impl ShaderType {
    pub const fn kind(self) -> ScalarKind {
        match self {
            ShaderType::Scalar(kind) | ShaderType::Vector(kind, _) => kind,
        }
    }

    /// Number of slots; 1 for a scalar.
    pub const fn arity(self) -> usize {
        match self {
            ShaderType::Scalar(_) => 1,
            ShaderType::Vector(_, n) => n,
        }
    }

    /// Byte size, padded to [`align`](Self::align).
    pub const fn size(self) -> usize {
        let raw = self.arity() * self.kind().size();
        round_up(raw, self.align())
    }

    pub const fn align(self) -> usize {
        self.kind().align()
    }
}

impl Display for ShaderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderType::Scalar(kind) => f.write_str(kind.shader_name()),
            ShaderType::Vector(kind, n) => write!(f, "{}{}", kind.shader_name(), n),
        }
    }
}

pub(crate) const fn round_up(value: usize, align: usize) -> usize {
    value.div_ceil(align) * align
}
