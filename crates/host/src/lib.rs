// slide-deck-host library
// Static host for the browser frontend

// Configuration
pub mod config;

// HTTP routes
pub mod api;
