/// Canonical `chrono` format string for calendar dates (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Upper bound on occurrences produced from a single recurring event.
///
/// Applied on top of the rule's own interval so an oversized interval cannot
/// exhaust memory.
pub const DEFAULT_MAX_OCCURRENCES: u32 = 10_000;

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Prefix for environment variables read by [`crate::config::load_config`].
pub const ENV_PREFIX: &str = "CADENCE";

/// Optional configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "cadence.toml";
