//! Application services: use-case orchestration.
//!
//! Each service module composes domain logic with port trait calls and
//! imports only from `crate::domain` and `crate::application::ports`.

pub mod association;
pub mod charge;
pub mod lifecycle;
pub mod poll;
pub mod port_resolver;

#[cfg(test)]
pub(crate) mod test_support;
