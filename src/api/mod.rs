//! HTTP client for the platform backend.
//!
//! The portal is the production implementation of the repository traits:
//! every query the report generators and the project service issue maps to
//! one REST call against the configured API, authenticated with a bearer
//! token from the local config.

pub mod portal;

pub use portal::{Portal, PortalConfig};
