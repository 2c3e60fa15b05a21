// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
use crate::context::Member;
use crate::shader_type::ShaderType;

/// A Device-only member was invoked on the host.
///
/// This is a programmer error: the call site belongs in a function that is translated to the
/// shading language, where the member has its real meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{ty}.{member} is only available in code translated for the device")]
pub struct InvalidExecutionContext {
    ty: ShaderType,
    member: Member,
}

impl InvalidExecutionContext {
    pub(crate) const fn new(ty: ShaderType, member: Member) -> Self {
        Self { ty, member }
    }

    /// The concrete type the member was invoked on.
    pub const fn shader_type(&self) -> ShaderType {
        self.ty
    }

    pub const fn member(&self) -> Member {
        self.member
    }
}

/// Result of a Device-only member invoked on the host.
pub type DeviceResult<T> = Result<T, InvalidExecutionContext>;

/// A swizzle selection that cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("vectors have 2, 3 or 4 components, not {0}")]
    UnsupportedArity(usize),
    #[error("a swizzle selects at least one component")]
    Empty,
    #[error("a swizzle selects at most 4 components, not {0}")]
    TooLong(usize),
    #[error("component {index} is out of range for a {arity}-component vector")]
    OutOfRange { index: usize, arity: usize },
    #[error("'{0}' is not a component label")]
    UnknownLabel(char),
    #[error("swizzle mixes xyzw and rgba labels")]
    MixedAlphabets,
}
