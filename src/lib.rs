/// astral - An interactive shell for the Astral query language
///
/// This crate provides a small REPL-style shell with a focus on:
/// - Strict validation of startup options before the session begins
/// - Connection-string (`host:port`) parsing with dotted-quad and
///   hostname classification
/// - Variable and properties preloading from user-supplied files
///
/// Main modules:
/// - cli: Command-line interface parsing, option validation and execution
/// - result: Error handling and result types
/// - shell: Interactive session runtime (banner, prompt, variable store)
pub mod cli;
pub mod result;
pub mod shell;
