//! Tavolo - client-side domain layer for a multi-tenant restaurant
//! directory.
//!
//! Registered owners create, edit, and publish restaurant profiles;
//! visitors browse published ones. This crate is the typed core a UI
//! builds on: the restaurant data model and its validation contract,
//! the three-state session store, and the HTTP adapter that mediates
//! between UI and backend. Rendering, routing, and form widgetry are
//! the embedding application's business.
//!
//! # Wiring
//!
//! ```ignore
//! use std::sync::Arc;
//! use tavolo::adapters::http::ReqwestTransport;
//! use tavolo::adapters::navigation::TracingNavigator;
//! use tavolo::adapters::storage::FileStore;
//! use tavolo::api::ApiClient;
//! use tavolo::config::ApiConfig;
//! use tavolo::session::SessionStore;
//!
//! let storage = Arc::new(FileStore::new(".tavolo/storage.json"));
//! let session = Arc::new(SessionStore::new(storage.clone()));
//! let client = ApiClient::new(
//!     ApiConfig::from_env(),
//!     Arc::new(ReqwestTransport::new()),
//!     storage,
//!     session,
//!     Arc::new(TracingNavigator),
//! );
//! ```

pub mod adapters;
pub mod api;
pub mod config;
pub mod domain;
pub mod ports;
pub mod session;
pub mod validation;
