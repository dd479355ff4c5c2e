//! Request handlers, one submodule per resource.
//!
//! Handlers delegate to the repositories in `launchlist_db`, run domain rules
//! from `launchlist_core`, and map failures via [`AppError`].

pub mod activity;
pub mod applications;
pub mod auth;
pub mod collabs;
pub mod projects;
pub mod public;
pub mod wallets;
