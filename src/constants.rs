//! Editor-wide constants.
//!
//! Centralizes element identifiers and defaults shared by the editor, the
//! sync client and the settings file.

// ============================================================================
// Presentation Surface Identifiers
// ============================================================================

/// Element id of the selection frame (pointer-down starts a move)
pub const FRAME_ID: &str = "selection-frame";

/// Prefix shared by every resize handle element id
pub const HANDLE_PREFIX: &str = "selection-handle-";

/// Element id of the top-left resize handle
pub const HANDLE_NW_ID: &str = "selection-handle-nw";

/// Element id of the bottom-right resize handle
pub const HANDLE_SE_ID: &str = "selection-handle-se";

// ============================================================================
// Sync Defaults
// ============================================================================

/// Path appended to a derivative reference to fetch its rendered content
pub const CONTENT_PATH: &str = "content";

/// Query parameter carrying the cache-defeating stamp of the preview URL
pub const DEFAULT_PREVIEW_CACHE_PARAM: &str = "t";

/// User agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("derivative-editor/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Settings
// ============================================================================

/// Directory name under the platform config dir
pub const SETTINGS_DIR_NAME: &str = "derivative-editor";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Log filter used when neither `RUST_LOG` nor the settings provide one
pub const DEFAULT_LOG_FILTER: &str = "info";
