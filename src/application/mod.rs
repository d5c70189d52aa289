/// High level client bundling the domain services
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces (traits) for the admin API
pub mod interfaces;
/// Service implementations over the authenticated HTTP client
pub mod services;
