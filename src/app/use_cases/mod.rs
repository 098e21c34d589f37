//! Use-Cases der Application-Layer-Orchestrierung.

pub mod conversion;
pub mod picking;
