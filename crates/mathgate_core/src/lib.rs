//! Mathgate Core - deterministic math-problem classification and solving.
//!
//! A five-stage pipeline over free-form problem text: keyword
//! classification, rule-based parameter extraction, closed-form solving,
//! independent verification, and templated explanation — gated by a router
//! that refuses anything it does not recognize. No probabilistic inference
//! anywhere in the request path; silence over a wrong answer.

pub mod answer;
pub mod category;
pub mod classify;
pub mod config;
pub mod error;
pub mod explain;
pub mod extract;
pub mod gate;
pub mod params;
pub mod pipeline;
pub mod solve;
pub mod verify;

pub use answer::{Answer, Extremum, ExtremumKind};
pub use category::Category;
pub use classify::{classify, Classification};
pub use config::{ConfigError, Tolerances};
pub use error::{Stop, StopReason};
pub use explain::explain;
pub use extract::extract;
pub use gate::{route, Route, RouteDecision};
pub use params::{AlgebraTarget, GeometryTarget, NumberTheoryOp, ProblemInput, ProblemParams};
pub use pipeline::{Outcome, Pipeline, SolveReport};
pub use solve::solve;
pub use verify::verify;
