// Domain layer module exports
// Domain is independent of infrastructure concerns

pub mod registration;
pub mod relay;
pub mod repositories;
