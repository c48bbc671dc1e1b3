//! Driven adapters: implementations of the domain's outbound ports.
//!
//! Adapters are thin translators between domain types and infrastructure.
//! They contain no business logic.

pub mod persistence;
