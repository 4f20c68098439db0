// ABOUTME: Re-exports command modules for the cooksense CLI
// ABOUTME: Provides the generate, photo, favorites and interactive shell commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod favorites;
pub mod generate;
pub mod photos;
pub mod shell;
