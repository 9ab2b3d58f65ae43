// ============================================================================
// Codec Module
// External representations of Dec values
// ============================================================================
//
// This module provides:
// - Serialize/Deserialize impls for Dec (string out, string or number in)
// - encode/decode helpers for JSON text

mod json;

pub use json::{decode, encode, DecodeError};
