// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod advertisement_service;

pub use advertisement_service::*;
