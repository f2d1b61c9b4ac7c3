//! Default values for modmine configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// Layout Defaults
// ============================================================================

/// Directory under the module root holding type declarations.
pub const DEFAULT_TYPES_DIR: &str = "types";

/// Directory under the module root holding one provider directory per type.
pub const DEFAULT_PROVIDERS_DIR: &str = "providers";

/// Manifest file name under the module root.
pub const DEFAULT_MANIFEST_FILE: &str = "Manifest";

/// File extensions to consider (empty means every regular file).
pub const DEFAULT_EXTENSIONS: &[&str] = &[];

// ============================================================================
// Extraction Defaults
// ============================================================================

/// Abort the run when a type or provider file has no declaration anchor.
pub const DEFAULT_STRICT_ANCHORS: bool = false;

// ============================================================================
// Output Defaults
// ============================================================================

/// Pretty-print the JSON document.
pub const DEFAULT_PRETTY: bool = true;

// ============================================================================
// Config File Locations
// ============================================================================

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = "modmine.toml";

/// Directory name under the user config dir.
pub const USER_CONFIG_DIR: &str = "modmine";

/// File name inside the user config directory.
pub const USER_CONFIG_FILE: &str = "config.toml";
