//! Judicial credit-purchase verifier.
//!
//! A case record (`ProcessoInput`) is serialized, embedded into a prompt
//! together with the eight fixed business policies (POL-1..POL-8), sent to an
//! external LLM, and the raw reply is normalized into a strict
//! `DecisionOutput`. The HTTP surface lives in [`gateway`]; the pipeline
//! itself is [`verifier::verify_process`].

pub mod config;
pub mod decision;
pub mod gateway;
pub mod policies;
pub mod processo;
pub mod prompt;
pub mod providers;
pub mod telemetry;
pub mod verifier;
