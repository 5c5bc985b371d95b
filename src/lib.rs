#![doc = include_str!("../readme.md")]
#![allow(clippy::uninlined_format_args)]

mod mask_format;
mod mask_op;
mod mask_token;
mod masked_core;

pub use mask_format::MaskFormat;
pub use mask_op::{EditOp, MaskEdit, edit_value, render_value, strip_value};
pub use mask_token::{CharCheck, Mask};
pub use masked_core::{MaskEvent, MaskPipe, MaskedCore};

/// Position type.
#[allow(non_camel_case_types)]
pub type upos_type = u32;

/// Mask format used when none has been set.
pub const DEFAULT_MASK: &str = "CCCCCCCCCC";

/// Prompt char used when none has been set.
pub const DEFAULT_PROMPT: char = '_';
