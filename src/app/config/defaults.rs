// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Thumbnail**: Attachment thumbnail edge length
//! - **Crop Zoom**: Crop editor zoom slider bounds and step
//! - **Notifications**: Toast timing

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Default thumbnail edge length in logical pixels.
pub const DEFAULT_THUMBNAIL_SIZE: u16 = 160;

/// Minimum thumbnail edge length.
pub const MIN_THUMBNAIL_SIZE: u16 = 64;

/// Maximum thumbnail edge length.
pub const MAX_THUMBNAIL_SIZE: u16 = 512;

// ==========================================================================
// Crop Zoom Defaults
// ==========================================================================

/// Lowest zoom the crop editor slider offers by default.
pub const DEFAULT_CROP_ZOOM_MIN: f32 = 0.5;

/// Highest zoom the crop editor slider offers by default.
pub const DEFAULT_CROP_ZOOM_MAX: f32 = 4.0;

/// Default slider step for crop zoom.
pub const DEFAULT_CROP_ZOOM_STEP: f32 = 0.05;

/// Hard floor for the configurable zoom minimum. Zoom must stay positive.
pub const CROP_ZOOM_FLOOR: f32 = 0.1;

/// Hard ceiling for the configurable zoom maximum.
pub const CROP_ZOOM_CEILING: f32 = 10.0;

/// Smallest configurable zoom step.
pub const MIN_CROP_ZOOM_STEP: f32 = 0.01;

/// Largest configurable zoom step.
pub const MAX_CROP_ZOOM_STEP: f32 = 1.0;

/// Pan range of the crop editor sliders, in percent of the element box.
pub const CROP_PAN_LIMIT_PERCENT: f32 = 100.0;

/// Rotation range of the crop editor slider, in degrees.
pub const CROP_ROTATION_LIMIT_DEGREES: f32 = 180.0;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Auto-dismiss delay for success and info toasts (milliseconds).
pub const NOTIFICATION_DISMISS_MS: u64 = 3000;

/// Auto-dismiss delay for warning toasts (milliseconds).
pub const NOTIFICATION_WARNING_DISMISS_MS: u64 = 5000;
