//! Pocket Pet - a virtual pet with personality-driven needs

pub mod command;
pub mod core;
pub mod entity;
