use std::borrow::Cow;
use thiserror::Error;

/** Main Result type alias for shell operations
 *
 * # Usage
 * ```no_run
 * use astral::result::Result;
 *
 * fn load_properties() -> Result<toml::Table> {
 *     // Function automatically propagates ShellError
 *     let content = std::fs::read_to_string("astral.toml")?;
 *     Ok(toml::from_str(&content)?)
 * }
 * ```
 */
pub type Result<T> = std::result::Result<T, ShellError>;

/** Error enumeration for the astral shell
 *
 * # Error Categories
 * - **Io**: File system and I/O operations
 * - **InvalidConnectionString**: `-z` value fails host:port syntax, host
 *   validity, or port-range checks
 * - **NotFound**: a file-valued option (`-v`, `--irc`, `-p`) names a path
 *   that does not exist
 * - **Config**: a supplied file exists but its contents do not parse
 * - **TomlParse**: TOML parsing failures (properties file)
 * - **Json**: JSON processing failures (variables file)
 *
 * # Design Notes
 * - Uses `Cow<'static, str>` for efficient string storage
 * - Automatic From implementations for common error types
 * - Validation errors are unrecoverable at this layer: the caller aborts
 *   startup and prints the message
 */
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid connection string: {0}")]
    InvalidConnectionString(Cow<'static, str>),

    #[error("Not found: {0}")]
    NotFound(Cow<'static, str>),

    #[error("Config error: {0}")]
    Config(Cow<'static, str>),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ShellError {
    /** Creates an InvalidConnectionString error with flexible message input
     *
     * # Arguments
     * * `msg` - Message implementing Into<Cow<'static, str>>; should carry
     *   the offending raw value so the user can see what was rejected
     *
     * # Example
     * ```ignore
     * ShellError::connection(format!("missing port in '{}'", value));
     * ```
     */
    pub fn connection(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidConnectionString(msg.into())
    }

    /** Creates a NotFound error with flexible message input
     *
     * # Use Cases
     * - File-valued options pointing at nonexistent paths
     * - Missing configuration files
     */
    pub fn not_found(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::NotFound(msg.into())
    }

    /** Creates a Config error with flexible message input
     *
     * # Use Cases
     * - Variables file that is not a JSON object
     * - Properties file validation failures
     */
    pub fn config(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Config(msg.into())
    }
}
