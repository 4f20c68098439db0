// ABOUTME: Main library entry point for the CookSense recipe suggestion client
// ABOUTME: Provides the application session, endpoint client, favorites store and renderers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `CookSense`
//!
//! Client for the `CookSense` AI endpoints. The user collects ingredients
//! (typed or recognised from a fridge photo), asks the generation endpoint for
//! recipes, keeps a durable list of favorites, and tracks calories from meal
//! photos against a daily target.
//!
//! ## Architecture
//!
//! - **app**: `AppSession`, the single owner of all session state and flows
//! - **api**: `RecipeApi` seam with the reqwest client and a mock
//! - **storage**: durable key/value storage backing the favorites list
//! - **tags / calories / recipes / favorites**: the four state units
//! - **render**: pure projections of state to markup
//! - **ui**: busy-control guards, alerts and the preference form
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use cooksense::app::AppSession;
//! use cooksense::config::ClientConfig;
//! use cooksense::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ClientConfig::from_env()?;
//!     let mut session = AppSession::from_config(&config)?;
//!
//!     session.tags_mut().add("carrot");
//!     session.tags_mut().add("chicken");
//!     session.generate(false).await?;
//!
//!     println!("{}", session.view().results);
//!     Ok(())
//! }
//! ```

/// Application session owning all state and request flows
pub mod app;

/// Endpoint client trait, HTTP implementation and mock
pub mod api;

/// Calorie tracker with age-dependent daily targets
pub mod calories;

/// Environment-driven client configuration
pub mod config;

/// Persisted favorites list and on-screen toggle synchronization
pub mod favorites;

/// Logging configuration and tracing subscriber setup
pub mod logging;

/// Recipe session: generation results and identifier assignment
pub mod recipes;

/// Pure markup projections
pub mod render;

/// Durable key/value storage
pub mod storage;

/// Ingredient tag store
pub mod tags;

/// Controls, alerts and the preference form
pub mod ui;

pub use cooksense_core::{errors, models, AppError, AppResult, ErrorCode};
