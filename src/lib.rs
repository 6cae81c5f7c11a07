//! Core library exports for the product catalog service.
//!
//! This crate exposes the domain entities, Diesel models, repositories,
//! routes and service layers used by the product catalog REST API.

pub mod db;
pub mod domain;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;
