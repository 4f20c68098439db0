// ABOUTME: Photo commands for the cooksense CLI: fridge scan and meal calorie estimation
// ABOUTME: Reads image files from disk and runs them through the session's request flows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use cooksense::api::ImageUpload;
use cooksense::app::AppSession;
use cooksense_core::models::AgeGroup;
use cooksense_core::AppResult;
use std::path::{Path, PathBuf};

use crate::helpers::display::{display_entry, display_stats};

/// Recognise ingredients in a fridge photo and print them
pub async fn scan(session: &mut AppSession, image: &Path) -> AppResult<()> {
    let upload = ImageUpload::from_path(image).await?;
    session.scan_fridge(&upload).await?;

    for ingredient in session.tags().as_slice() {
        println!("{ingredient}");
    }
    Ok(())
}

/// Estimate each meal photo in order, then print the running stats
pub async fn calories(
    session: &mut AppSession,
    images: &[PathBuf],
    age_group: AgeGroup,
) -> AppResult<()> {
    session.set_age_group(age_group);
    for image in images {
        let upload = ImageUpload::from_path(image).await?;
        if let Some(entry) = session.analyze_calories(&upload).await? {
            display_entry(&entry);
        }
    }
    display_stats(&session.calories().stats());
    Ok(())
}
