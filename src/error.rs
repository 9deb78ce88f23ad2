//! Error types for sarpa.

/// Result type alias for sarpa operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for sarpa.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// No image was supplied for identification.
    #[error("no image selected")]
    NoImageSelected,

    /// Failed to read an image file.
    #[error("failed to read image file '{path}'")]
    ImageRead {
        /// Path to the image file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to decode an image for on-device classification.
    #[error("offline error: failed to decode image '{path}': {reason}")]
    ImageDecode {
        /// Path to the image file.
        path: std::path::PathBuf,
        /// Description of the decode failure.
        reason: String,
    },

    /// Failed to read the species database file.
    #[error("failed to read species database '{path}'")]
    DatabaseRead {
        /// Path to the database file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the species database.
    #[error("failed to parse species database '{path}'")]
    DatabaseParse {
        /// Path to the database file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Species not present in the database.
    #[error("species '{name}' not found in the database")]
    SpeciesNotFound {
        /// Name that was looked up.
        name: String,
    },

    /// Model file does not exist.
    #[error("model file does not exist: {path}")]
    ModelFileNotFound {
        /// Path to the missing model file.
        path: std::path::PathBuf,
    },

    /// Labels file does not exist.
    #[error("labels file does not exist: {path}")]
    LabelsFileNotFound {
        /// Path to the missing labels file.
        path: std::path::PathBuf,
    },

    /// Failed to read the labels file.
    #[error("failed to read labels file '{path}'")]
    LabelsRead {
        /// Path to the labels file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to build the on-device classifier.
    #[error("failed to initialize offline classifier: {reason}")]
    ClassifierBuild {
        /// Description of the build failure.
        reason: String,
    },

    /// The on-device classifier failed to initialize earlier in the session.
    #[error("offline classifier unavailable: {reason}")]
    ClassifierUnavailable {
        /// Description of the original initialization failure.
        reason: String,
    },

    /// On-device inference failed.
    #[error("offline error: inference failed: {reason}")]
    Inference {
        /// Description of the inference failure.
        reason: String,
    },

    /// The classifier produced no usable prediction.
    #[error("offline error: classifier produced no prediction")]
    EmptyPrediction,

    /// Image upload to the identification server failed.
    #[error("upload to '{url}' failed, check network and server address")]
    Upload {
        /// Endpoint URL that failed.
        url: String,
        /// Underlying transport error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The server response body could not be parsed.
    #[error("failed to parse server response")]
    ResponseParse {
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The server response parsed but is missing required fields.
    #[error("invalid server response: {reason}")]
    ResponseInvalid {
        /// Description of what was missing or malformed.
        reason: String,
    },

    /// The server reported an identification error.
    #[error("{message}")]
    Server {
        /// Error message reported by the server, verbatim.
        message: String,
    },

    /// Internal error (for unexpected failures).
    #[error("internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}
