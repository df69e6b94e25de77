use crate::cli::Cli;
use crate::result::{Result, ShellError};
use once_cell::sync::Lazy;
use regex::Regex;
use smol_str::SmolStr;
use std::fmt;
use std::path::Path;

static HOSTNAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9.-]+$").unwrap());

/// Host token of a connection string, classified by a parse attempt:
/// four all-numeric dot-separated segments commit to the dotted-quad
/// branch, anything else is held to the hostname character class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Host {
    DottedQuad([u8; 4]),
    Name(SmolStr),
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Host::DottedQuad([a, b, c, d]) => write!(f, "{}.{}.{}.{}", a, b, c, d),
            Host::Name(name) => write!(f, "{}", name),
        }
    }
}

/// Endpoint parsed from a `-z` value. Transient: derived during
/// validation and handed to the shell for display and logging only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionEndpoint {
    pub host: Host,
    pub port: u16,
}

impl fmt::Display for ConnectionEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

pub struct OptionsValidator;

impl OptionsValidator {
    /// Checks every recognized, present option before the shell starts.
    /// Each option is validated independently; the first violation is
    /// returned and remaining checks are skipped.
    pub fn validate(cli: &Cli) -> Result<()> {
        if let Some(value) = &cli.zookeeper {
            Self::parse_connection_string(value)?;
        }

        if let Some(path) = &cli.variables {
            Self::validate_file_exists("-v", path)?;
        }

        if let Some(path) = &cli.inputrc {
            Self::validate_file_exists("--irc", path)?;
        }

        if let Some(path) = &cli.properties {
            Self::validate_file_exists("-p", path)?;
        }

        Ok(())
    }

    /// Parses a `host:port` connection string. Exactly one `:` must
    /// separate a non-empty host token from a numeric port token.
    pub fn parse_connection_string(value: &str) -> Result<ConnectionEndpoint> {
        let (host, port) = value.split_once(':').ok_or_else(|| {
            ShellError::connection(format!("missing port in '{}', expected host:port", value))
        })?;

        if host.is_empty() {
            return Err(ShellError::connection(format!(
                "missing host in '{}', expected host:port",
                value
            )));
        }

        let host = Self::parse_host(host, value)?;
        let port = Self::parse_port(port, value)?;

        Ok(ConnectionEndpoint { host, port })
    }

    fn parse_host(host: &str, value: &str) -> Result<Host> {
        let segments: Vec<&str> = host.split('.').collect();
        let dotted_quad = segments.len() == 4
            && segments
                .iter()
                .all(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()));

        if dotted_quad {
            // Committed to the dotted-quad branch; an out-of-range
            // segment fails here rather than falling back to the
            // hostname check.
            let mut octets = [0u8; 4];
            for (octet, segment) in octets.iter_mut().zip(&segments) {
                *octet = segment.parse().map_err(|_| {
                    ShellError::connection(format!(
                        "address segment '{}' out of range 0-255 in '{}'",
                        segment, value
                    ))
                })?;
            }
            return Ok(Host::DottedQuad(octets));
        }

        if HOSTNAME_REGEX.is_match(host) {
            Ok(Host::Name(host.into()))
        } else {
            Err(ShellError::connection(format!(
                "invalid host name '{}' in '{}'",
                host, value
            )))
        }
    }

    fn parse_port(port: &str, value: &str) -> Result<u16> {
        if port.is_empty() {
            return Err(ShellError::connection(format!(
                "missing port in '{}', expected host:port",
                value
            )));
        }

        let port: u32 = port.parse().map_err(|_| {
            ShellError::connection(format!("invalid port '{}' in '{}'", port, value))
        })?;

        match port {
            1..=65535 => Ok(port as u16),
            _ => Err(ShellError::connection(format!(
                "port {} out of range 1-65535 in '{}'",
                port, value
            ))),
        }
    }

    fn validate_file_exists(option: &str, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(ShellError::not_found(format!(
                "{} file not found: {}",
                option,
                path.display()
            )));
        }

        Ok(())
    }
}
