//! Launchlist domain core.
//!
//! Pure business logic for the whitelist lifecycle: chain/category
//! enumerations, per-chain address validation, CSV import parsing,
//! readiness evaluation, the activity action taxonomy, and the shared
//! domain error type. This crate has no database or HTTP dependencies;
//! callers load state and pass it in.

pub mod application;
pub mod audit;
pub mod chain;
pub mod collaboration;
pub mod csv;
pub mod error;
pub mod naming;
pub mod readiness;
pub mod types;
pub mod validator;
pub mod wallet;
