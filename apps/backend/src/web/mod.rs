//! Web boundary helpers that must not leak into service code.

pub mod trace_ctx;
