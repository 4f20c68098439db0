// ABOUTME: Re-exports helper modules for the cooksense CLI
// ABOUTME: Provides terminal display formatting for recipes, favorites and calorie stats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
