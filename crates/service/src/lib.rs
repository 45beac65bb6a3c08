//! Orchestration layer between the HTTP boundary and document storage.
//! - Enforces domain validity before anything reaches the repository.
//! - Translates storage outcomes into service-level errors.
//! - Owns the storage contract so backends stay substitutable.

pub mod document_service;
pub mod errors;
pub mod storage;
