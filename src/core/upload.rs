//! Upload module - validation and the simulated upload

use crate::error::{Result, ViewVoyageError};
use crate::types::{NewVideo, UploadOptions, UploadRequest, User};
use crate::utils::paths::file_url;
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tokio::fs;
use tokio::time::sleep;

/// Uploads are not probed, every one is recorded with this length
pub const UPLOAD_DURATION_SECONDS: u64 = 120;

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "webm", "mov", "mkv", "avi", "ogv"];
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "svg"];

fn has_extension(path: &Path, allowed: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| allowed.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Check that `path` looks like a video file
pub fn check_video_file(path: &Path) -> Result<()> {
    if has_extension(path, VIDEO_EXTENSIONS) {
        Ok(())
    } else {
        Err(ViewVoyageError::InvalidFileType {
            path: path.to_path_buf(),
            expected: "a video file".into(),
        })
    }
}

/// Check that `path` looks like an image file
pub fn check_image_file(path: &Path) -> Result<()> {
    if has_extension(path, IMAGE_EXTENSIONS) {
        Ok(())
    } else {
        Err(ViewVoyageError::InvalidFileType {
            path: path.to_path_buf(),
            expected: "an image file".into(),
        })
    }
}

/// Validate the form: title, description and a video are required, the
/// thumbnail is optional. Returns the video path.
pub fn validate(request: &UploadRequest) -> Result<&Path> {
    let mut missing = Vec::new();
    if request.title.is_empty() {
        missing.push("title");
    }
    if request.description.is_empty() {
        missing.push("description");
    }
    if request.video_path.is_none() {
        missing.push("video");
    }
    if !missing.is_empty() {
        return Err(ViewVoyageError::MissingFields(missing.join(", ")));
    }

    let video_path = request
        .video_path
        .as_deref()
        .ok_or_else(|| ViewVoyageError::MissingFields("video".into()))?;
    check_video_file(video_path)?;
    if let Some(ref thumbnail) = request.thumbnail_path {
        check_image_file(thumbnail)?;
    }

    Ok(video_path)
}

/// Validate the request, wait out the simulated upload and return the data
/// for a new catalog entry. Signed-out uploads are owned by the guest user.
///
/// Nothing is written anywhere; dropping the future before it resolves
/// discards the upload.
pub async fn upload(
    request: &UploadRequest,
    owner: Option<&User>,
    options: &UploadOptions,
) -> Result<NewVideo> {
    let video_path = validate(request)?;

    // The files must exist even though nothing is copied
    fs::metadata(video_path).await?;
    if let Some(ref thumbnail) = request.thumbnail_path {
        fs::metadata(thumbnail).await?;
    }

    let spinner = if options.show_progress {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Uploading...");
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        Some(spinner)
    } else {
        None
    };

    sleep(options.delay).await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let thumbnail_url = request
        .thumbnail_path
        .as_deref()
        .map(file_url)
        .unwrap_or_else(|| options.default_thumbnail_url.clone());

    tracing::debug!(title = %request.title, "upload finished");

    Ok(NewVideo {
        title: request.title.clone(),
        description: request.description.clone(),
        thumbnail_url,
        video_url: file_url(video_path),
        upload_date: Utc::now(),
        duration_seconds: UPLOAD_DURATION_SECONDS,
        owner: owner.cloned().unwrap_or_else(User::guest),
    })
}
