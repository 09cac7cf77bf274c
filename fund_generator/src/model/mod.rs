//! Data model types exchanged with the quote provider.
//!
//! This module groups the serializable payloads used by the generator:
//! - `batch_response` — IEX Cloud batch endpoint response bodies.
pub mod batch_response;
