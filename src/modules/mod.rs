pub mod job;
pub mod notification;
pub mod pipeline;
pub mod preflight;
