// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
use crate::scalar::{Scalar, ScalarKind};
use crate::shader_type::ShaderType;
use crate::vector::{Arity, SupportedArity, Vector};

/// The vertex attribute format that reads `ty` from a vertex buffer.
///
/// `None` for types a vertex buffer cannot carry: scalars are not vectors, `bool` has no
/// vertex format, and there is no 3-component half format.
pub fn vertex_format(ty: ShaderType) -> Option<::wgpu::VertexFormat> {
    use ::wgpu::VertexFormat as F;
    let ShaderType::Vector(kind, arity) = ty else {
        return None;
    };
    let format = match (kind, arity) {
        (ScalarKind::Float, 2) => F::Float32x2,
        (ScalarKind::Float, 3) => F::Float32x3,
        (ScalarKind::Float, 4) => F::Float32x4,
        (ScalarKind::Double, 2) => F::Float64x2,
        (ScalarKind::Double, 3) => F::Float64x3,
        (ScalarKind::Double, 4) => F::Float64x4,
        (ScalarKind::Int, 2) => F::Sint32x2,
        (ScalarKind::Int, 3) => F::Sint32x3,
        (ScalarKind::Int, 4) => F::Sint32x4,
        (ScalarKind::UInt, 2) => F::Uint32x2,
        (ScalarKind::UInt, 3) => F::Uint32x3,
        (ScalarKind::UInt, 4) => F::Uint32x4,
        (ScalarKind::Half, 2) => F::Float16x2,
        (ScalarKind::Half, 4) => F::Float16x4,
        _ => return None,
    };
    Some(format)
}

impl<T: Scalar, const N: usize> Vector<T, N>
where
    Arity<N>: SupportedArity,
{
    /// See [`vertex_format`].
    pub fn vertex_format() -> Option<::wgpu::VertexFormat> {
        vertex_format(Self::SHADER_TYPE)
    }
}
