//! Coursework Forum - course-work forum backend.
//!
//! Students join work groups, post contributions (text or file) under
//! assignments, comment and react; professors manage the academic catalog,
//! assignments and group rosters. Built on Actix Web and SeaORM.
//!
//! # Architecture
//! - `cache`: in-memory object cache (Moka)
//! - `config`: configuration management
//! - `entity`: SeaORM database entities
//! - `errors`: unified error handling
//! - `middlewares`: authentication and role middleware
//! - `models`: business data models
//! - `routes`: API route layer
//! - `runtime`: lifecycle management
//! - `services`: business logic layer
//! - `storage`: data storage layer (SeaORM)
//! - `utils`: utility functions

pub mod cache;
pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
