// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Host-valid versus Device-only members.
//!
//! The same source is interpreted in two ways. On the host it runs as ordinary Rust. Inside
//! functions destined for the GPU, an external translator rewrites uses of these types into
//! shading-language expressions. Some members mean the same thing in both places (constructors,
//! single-component access). Others only have a meaning after translation. On the host those
//! members fail immediately with [`InvalidExecutionContext`], or, where the signature has to
//! produce a storage location, hand out a [`SentinelRef`](crate::SentinelRef) instead.
//!
//! The device context is never entered at runtime. It exists here only so that the
//! classification can be queried.

use crate::alphabet::Alphabet;
use crate::error::{DeviceResult, InvalidExecutionContext};
use crate::shader_type::ShaderType;
use crate::swizzle::Selection;
use std::fmt::Display;

/// Where code is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutionContext {
    /// Executed directly by the CPU.
    Host,
    /// Translated into the shading language.
    Device,
}

/// The static classification of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    HostValid,
    DeviceOnly,
}

impl Classification {
    pub const fn is_available_in(self, context: ExecutionContext) -> bool {
        match (self, context) {
            (_, ExecutionContext::Device) => true,
            (Classification::HostValid, ExecutionContext::Host) => true,
            (Classification::DeviceOnly, ExecutionContext::Host) => false,
        }
    }
}

/// Binary and unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Neg,
    BitAnd,
    BitOr,
    BitXor,
    Not,
    Shl,
    Shr,
}

impl Operator {
    pub const fn name(self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Sub => "sub",
            Operator::Mul => "mul",
            Operator::Div => "div",
            Operator::Rem => "rem",
            Operator::Neg => "neg",
            Operator::BitAnd => "bitand",
            Operator::BitOr => "bitor",
            Operator::BitXor => "bitxor",
            Operator::Not => "not",
            Operator::Shl => "shl",
            Operator::Shr => "shr",
        }
    }
}

/// Component-wise comparisons. These yield a `bool` vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Comparison {
    pub const fn name(self) -> &'static str {
        match self {
            Comparison::Eq => "cmp_eq",
            Comparison::Ne => "cmp_ne",
            Comparison::Lt => "cmp_lt",
            Comparison::Le => "cmp_le",
            Comparison::Gt => "cmp_gt",
            Comparison::Ge => "cmp_ge",
        }
    }
}

/// A member of a vector type, for classification purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Member {
    /// `new`, `from_array`, and the composition `From` impls.
    Constructor,
    /// `ZERO`, `ONE`, `UNIT_*`.
    Identity,
    /// `splat` and `From<scalar>`.
    Broadcast,
    /// `Display` and `display_with`.
    Format,
    /// Host structural equality (`PartialEq`).
    Equality,
    /// Raw byte views.
    Bytes,
    /// A swizzle accessor such as `x` or `wz`.
    Swizzle { selection: Selection },
    Operator(Operator),
    Comparison(Comparison),
    /// Explicit conversion to another scalar kind.
    Cast,
    /// Access by runtime integer index.
    Index,
}

impl Member {
    /// The kind of member. Every swizzle is `"swizzle"`; the [`Display`] form names the
    /// accessor instead.
    pub const fn name(self) -> &'static str {
        match self {
            Member::Constructor => "new",
            Member::Identity => "identity",
            Member::Broadcast => "splat",
            Member::Format => "fmt",
            Member::Equality => "eq",
            Member::Bytes => "as_bytes",
            Member::Swizzle { .. } => "swizzle",
            Member::Operator(op) => op.name(),
            Member::Comparison(cmp) => cmp.name(),
            Member::Cast => "cast",
            Member::Index => "at",
        }
    }
}

/// The member as it is spelled at a call site. Swizzles use the `xyzw` labels.
impl Display for Member {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Member::Swizzle { selection } => f.write_str(&selection.name(Alphabet::Position)),
            other => f.write_str(other.name()),
        }
    }
}

/// The static classification of `member`.
///
/// Only single-component swizzles are Host-valid among the accessors. A multi-component
/// swizzle is Device-only even when it selects every slot in storage order.
pub const fn classify(member: Member) -> Classification {
    match member {
        Member::Constructor
        | Member::Identity
        | Member::Broadcast
        | Member::Format
        | Member::Equality
        | Member::Bytes => Classification::HostValid,
        Member::Swizzle { selection } if selection.is_scalar() => Classification::HostValid,
        Member::Swizzle { .. }
        | Member::Operator(_)
        | Member::Comparison(_)
        | Member::Cast
        | Member::Index => Classification::DeviceOnly,
    }
}

/// Fails a Device-only member invoked on the host.
pub(crate) fn device_only<R>(ty: ShaderType, member: Member) -> DeviceResult<R> {
    debug_assert_eq!(classify(member), Classification::DeviceOnly);
    logwise::warn_sync!(
        "Device-only member {member} invoked on host for {ty}",
        member = member.to_string(),
        ty = ty.to_string()
    );
    Err(InvalidExecutionContext::new(ty, member))
}
