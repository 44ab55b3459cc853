// src/lib.rs
// DOCUMENTATION: Library root shared by the server binary, the seed CLI and integration tests
// PURPOSE: Expose the advertisement service modules

pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;

pub use errors::AdsError;
