// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Buffer layout descriptions for shader-visible data.
//!
//! Host code fills GPU buffers by copying raw bytes, so the offset of every field has to agree
//! with the offset the shader compiler assigns. This module computes those offsets for a
//! sequence of [`ShaderType`] fields under the two HLSL packing rules.
//!
//! # Overview
//!
//! - [`Packing::Structured`] is the layout of structured buffers: every field is aligned to
//!   its scalar, and the stride is padded to the largest alignment.
//! - [`Packing::ConstantBuffer`] is the layout of constant buffers: fields are packed into
//!   16-byte registers, a field never straddles a register boundary, and the total size is a
//!   whole number of registers.
//!
//! # Example
//!
//! ```
//! use shading_types::layout::{BufferLayout, Packing};
//! use shading_types::{ScalarKind, ShaderType};
//!
//! let mut layout = BufferLayout::new(Packing::ConstantBuffer);
//! layout.add_field("tint", ShaderType::Vector(ScalarKind::Float, 3));
//! layout.add_field("exposure", ShaderType::Scalar(ScalarKind::Float));
//! layout.add_field("offset", ShaderType::Vector(ScalarKind::Float, 2));
//! layout.add_field("origin", ShaderType::Vector(ScalarKind::Float, 3));
//!
//! assert_eq!(layout.field_offset("exposure"), Some(12));
//! assert_eq!(layout.field_offset("origin"), Some(32));
//! assert_eq!(layout.size(), 48);
//! ```

use crate::shader_type::{ShaderType, round_up};

/// Size of one constant-buffer register.
pub const REGISTER_SIZE: usize = 16;

/// How fields are packed into a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Packing {
    /// Natural alignment, as in structured buffers.
    Structured,
    /// 16-byte register packing, as in constant buffers.
    ConstantBuffer,
}

/// Describes the layout of one buffer element.
///
/// Fields are added in the order they appear in memory. This order must match the declaration
/// order in the shader.
#[derive(Debug, Clone)]
pub struct BufferLayout {
    packing: Packing,
    fields: Vec<BufferField>,
    cursor: usize,
    align: usize,
}

/// A field placed by a [`BufferLayout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferField {
    pub name: &'static str,
    pub ty: ShaderType,
    pub offset: usize,
}

impl BufferLayout {
    /// Creates a new, empty layout.
    pub fn new(packing: Packing) -> Self {
        Self {
            packing,
            fields: Vec::new(),
            cursor: 0,
            align: 1,
        }
    }

    /// Places a field after the previous ones and returns its offset.
    ///
    /// # Parameters
    ///
    /// * `name` - A descriptive name for the field. Must have a `'static` lifetime
    ///   (typically a string literal).
    /// * `ty` - The shader type stored in the field.
    pub fn add_field(&mut self, name: &'static str, ty: ShaderType) -> usize {
        let mut offset = round_up(self.cursor, ty.align());
        if self.packing == Packing::ConstantBuffer {
            let register_end = round_up(offset + 1, REGISTER_SIZE);
            if offset + ty.size() > register_end {
                offset = round_up(offset, REGISTER_SIZE);
            }
        }
        self.cursor = offset + ty.size();
        self.align = self.align.max(ty.align());
        self.fields.push(BufferField { name, ty, offset });
        offset
    }

    pub fn packing(&self) -> Packing {
        self.packing
    }

    pub fn fields(&self) -> &[BufferField] {
        &self.fields
    }

    pub fn field_offset(&self, name: &str) -> Option<usize> {
        self.fields.iter().find(|f| f.name == name).map(|f| f.offset)
    }

    /// Total padded size of one element.
    pub fn size(&self) -> usize {
        match self.packing {
            Packing::Structured => round_up(self.cursor, self.align),
            Packing::ConstantBuffer => round_up(self.cursor, REGISTER_SIZE),
        }
    }
}
