//! # TaskBoard API Server Library
//!
//! This library provides the core functionality of the TaskBoard API
//! server: a CRUD surface over users, tasks, and the task-to-user links
//! that define ownership.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
