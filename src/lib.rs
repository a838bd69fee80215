//! Annual Leave Entitlement Engine
//!
//! This crate computes statutory annual leave entitlement per employee and per calendar
//! year, using tiered accrual rates that change on tenure anniversaries, a company
//! seniority bonus, and a per-year cap.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
