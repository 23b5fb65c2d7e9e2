//! Contract-test double for the DWP identity and eligibility API.
//!
//! No real identity data sits behind this service: the national insurance
//! number in each request doubles as a scenario selector, and a small set of
//! sentinel surnames forces individual verification channels off the happy
//! path. The decision engine in [`engine`] is a pure function of the request,
//! so every structurally valid identifier maps to exactly one response.

pub mod config;
pub mod engine;
pub mod error;
pub mod legacy;
pub mod routes;
pub mod telemetry;
