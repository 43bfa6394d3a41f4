#![forbid(unsafe_code)]

pub mod config;
pub mod constants;
pub mod dom;
pub mod inspector;
pub mod ipc;
pub mod overlay;
pub mod panel;
pub mod placement;
pub mod tooltip;
