//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "sarpa";

/// Default identification endpoint for online mode.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/predict";

/// Default total request timeout for online identification, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connect timeout for online identification, in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Multipart field name the identification server expects for the image.
pub const UPLOAD_PART_NAME: &str = "image";

/// MIME type assumed when an image handle carries none.
pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// File name used for uploads when an image handle carries none.
pub const DEFAULT_UPLOAD_NAME: &str = "animal.jpg";

/// Scientific-name placeholder shown when a predicted species has no
/// record in the offline database.
pub const OFFLINE_PLACEHOLDER: &str = "No further details available offline.";

/// Message used when the server fails without reporting an error of its own.
pub const UNKNOWN_SERVER_ERROR: &str = "An unknown API error occurred.";

/// On-device model input constants.
pub mod model_input {
    /// Input image width expected by the classifier.
    pub const WIDTH: u32 = 224;

    /// Input image height expected by the classifier.
    pub const HEIGHT: u32 = 224;

    /// Input channels (RGB).
    pub const CHANNELS: usize = 3;
}
