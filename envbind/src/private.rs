//! Items referenced by the derive macro.
//!
//! These are not meant to be used directly by users of the library, the
//! generated code names everything through this module so that the public
//! surface can move without breaking derived impls.
pub use crate::shape::{Bindable, Field, Opaque, Shape};

pub use std::vec::Vec;
