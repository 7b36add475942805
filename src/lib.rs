#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! postpad: a terminal client for composing and publishing posts.

pub mod api;
pub mod config;
pub mod model;
pub mod telemetry;
pub mod tui;
