// ABOUTME: Core types and constants for the CookSense recipe suggestion client
// ABOUTME: Foundation crate with error handling, recipe and intake models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `CookSense` Core
//!
//! Foundation crate providing shared types and constants for the `CookSense`
//! client. Nothing in here performs I/O; the root crate owns the HTTP client,
//! durable storage, and rendering.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Storage keys, endpoint paths, placeholders and alert strings
//! - **models**: Recipes, recipe versions, identifiers, age groups and intake entries

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Recipe, `RecipeId`, `AgeGroup`, `ConsumedFoodEntry`, etc.)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
