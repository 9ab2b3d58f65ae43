// ============================================================================
// Numeric Module
// Arbitrary-precision decimal arithmetic under a fixed precision context
// ============================================================================
//
// This module provides:
// - Dec: big-integer-backed decimal value
// - MathContext / RoundingMode / DECIMAL64: the precision context
// - DecOperand: conversion of foreign operands (integers, floats, Decimal)
// - NumericError: Error types for construction and arithmetic
// - Tolerance helpers and RequirementFailed
//
// Design principles:
// - Exact add/sub/mul, context-rounded div/pow/sqrt
// - Value equality and ordering, independent of scale
// - Fallible operations return Result; operators panic only on misuse

mod context;
mod convert;
mod dec;
mod errors;
mod ops;
mod tolerance;

pub use context::{MathContext, RoundingMode, DECIMAL64};
pub use convert::DecOperand;
pub use dec::{max, min, Dec};
pub use errors::{NumericError, NumericResult};
pub use tolerance::{RequirementFailed, DEFAULT_TOLERANCE};
