//! Domain modules

pub mod dispatch;
