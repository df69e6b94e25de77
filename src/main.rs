use astral::cli::Cli;
use astral::result::Result;
use clap::Parser;
use dirs::config_dir;
use env_logger::Builder;
use log::LevelFilter;
use std::fs::OpenOptions;

/** Main entry point for the astral shell
 *
 * # Process Flow
 * 1. Initialize logging system with file output
 * 2. Parse command line arguments using Clap
 * 3. Validate options and start the interactive shell
 * 4. Handle errors and exit with appropriate codes
 *
 * # Error Handling
 * - Logging failures are non-fatal (fallback to creation)
 * - Clap parsing errors are displayed and exit with proper codes
 * - Option validation errors abort startup before the shell runs
 *
 * # Example
 * ```bash
 * # Start with a coordination endpoint and preloaded variables
 * astral -z host1:8888 -v variables.json
 *
 * # Plain prompt without ANSI colors
 * astral --na
 * ```
 */
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging before any other operations
    init_logging().await;

    // Parse command line arguments with error handling
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Print clap error message to stderr
            e.print().expect("Failed to print clap error");
            std::process::exit(e.exit_code());
        }
    };

    // Validate options and run the shell session
    cli.execute().await
}

/** Initializes the logging system with file-based output
 *
 * # Configuration
 * - Log file location: platform-specific config directory
 * - Log level: Info and above
 * - Output: Append mode to preserve historical logs
 * - Fallback: Current directory if config directory unavailable
 *
 * # Directory Structure
 * - Linux: `~/.config/astral/astral.log`
 * - macOS: `~/Library/Application Support/astral/astral.log`
 * - Windows: `%APPDATA%\astral\astral.log`
 *
 * # Notes
 * - Creates directory structure if it doesn't exist
 * - Keeps stdout/stderr clean for the interactive prompt
 */
async fn init_logging() {
    let log_file = get_log_file_path();

    // Ensure log directory exists
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent).ok(); // Non-fatal if directory creation fails
    }

    // Configure and initialize the logger
    Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(
            OpenOptions::new()
                .create(true) // Create file if it doesn't exist
                .append(true) // Append to existing logs
                .open(&log_file)
                .unwrap_or_else(|_| {
                    // Fallback: create new file if open fails
                    std::fs::File::create(&log_file).expect("Failed to create log file")
                }),
        )))
        .filter_level(LevelFilter::Info) // Log info level and above
        .init();

    log::info!("astral started");
}

/** Determines the appropriate log file path based on platform
 *
 * # Returns
 * - Platform-specific config directory path when available
 * - Current working directory as fallback
 * - Direct filename as last resort
 */
fn get_log_file_path() -> std::path::PathBuf {
    if let Some(config_dir) = config_dir() {
        // Use platform-specific config directory
        config_dir.join("astral").join("astral.log")
    } else {
        // Fallback to current directory
        std::env::current_dir()
            .map(|p| p.join("astral.log"))
            .unwrap_or_else(|_| "astral.log".into())
    }
}
