//! Infrastructure modules

pub mod codec;
pub mod email;
pub mod queue;
pub mod telemetry;
