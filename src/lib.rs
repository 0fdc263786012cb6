//! Library entrypoint for the price-targets services.
//!
//! This file exists mainly to make controller tests easy (integration tests
//! under `tests/` can import the settings, routers, controllers, services).
//! The deployable units are the binaries under `src/bin/`, one per service.

pub mod config;
pub mod error;
pub mod models;

pub mod services;

pub mod controllers;
pub mod routes;
