// services/resolve-dash/src/lib.rs
//
// Resolve Dashboard - Library exports
//

pub mod api;
pub mod app;
pub mod components;
pub mod dashboard;
pub mod event;
pub mod mock;
pub mod poller;
pub mod trend;
