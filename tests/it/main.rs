//! Single test binary entry point.
//!
//! All integration tests are compiled into one binary to keep link time down.
//!
//! Structure:
//! - helpers: Recording surface, scripted transport and the editor builder
//! - integration: Multi-component workflow tests (gestures, sync, HTTP)
//! - unit: Single-component tests through the public API
