use crate::cli::validator::{ConnectionEndpoint, OptionsValidator};
use crate::cli::Cli;
use crate::result::{Result, ShellError};
use smol_str::SmolStr;
use std::collections::HashMap;
use tokio::fs;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

const DEFAULT_PROMPT: &str = "[astral]>";

#[derive(Debug)]
pub struct Shell {
    endpoint: Option<ConnectionEndpoint>,
    variables: HashMap<SmolStr, serde_json::Value>,
    properties: toml::Table,
    no_ansi: bool,
}

impl Shell {
    /// Builds the shell state from validated options: re-parses the
    /// endpoint for display, preloads the variables map and properties
    /// table, and notes the inputrc.
    pub async fn load(cli: Cli) -> Result<Self> {
        let endpoint = match &cli.zookeeper {
            Some(value) => Some(OptionsValidator::parse_connection_string(value)?),
            None => None,
        };

        let variables = match &cli.variables {
            Some(path) => {
                let content = fs::read_to_string(path).await?;
                let parsed: serde_json::Value = serde_json::from_str(&content)?;
                match parsed {
                    serde_json::Value::Object(map) => map
                        .into_iter()
                        .map(|(name, value)| (SmolStr::new(name), value))
                        .collect(),
                    _ => {
                        return Err(ShellError::config(format!(
                            "variables file is not a JSON map: {}",
                            path.display()
                        )))
                    }
                }
            }
            None => HashMap::new(),
        };

        let properties = match &cli.properties {
            Some(path) => {
                let content = fs::read_to_string(path).await?;
                toml::from_str(&content).map_err(|e| {
                    ShellError::config(format!("invalid properties format: {}", e))
                })?
            }
            None => toml::Table::new(),
        };

        if let Some(path) = &cli.inputrc {
            // Line-editor integration is not wired up; record the
            // requested inputrc so sessions can be diagnosed.
            log::info!("Using inputrc from {}", path.display());
        }

        Ok(Self {
            endpoint,
            variables,
            properties,
            no_ansi: cli.no_ansi,
        })
    }

    pub async fn run(mut self) -> Result<()> {
        self.print_banner();

        let mut stdout = tokio::io::stdout();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            stdout.write_all(self.prompt().as_bytes()).await?;
            stdout.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break; // EOF
            };
            let input = line.trim();

            match input {
                "" => continue,
                "quit" | "exit" => break,
                "%vars" => self.print_variables(),
                _ => self.evaluate(input),
            }
        }

        log::info!("Shell session ended");
        Ok(())
    }

    fn print_banner(&self) {
        println!("astral v{}", env!("CARGO_PKG_VERSION"));
        if let Some(endpoint) = &self.endpoint {
            log::info!("Coordination endpoint: {}", endpoint);
            println!("coordination endpoint: {}", endpoint);
        }
        if !self.variables.is_empty() {
            println!("{} variable(s) loaded", self.variables.len());
        }
        println!("type 'quit' or 'exit' to leave the shell");
    }

    fn prompt(&self) -> String {
        let label = self
            .properties
            .get("prompt")
            .and_then(|value| value.as_str())
            .unwrap_or(DEFAULT_PROMPT);

        if self.no_ansi {
            format!("{} ", label)
        } else {
            format!("\x1b[1;34m{}\x1b[0m ", label)
        }
    }

    fn print_variables(&self) {
        if self.variables.is_empty() {
            println!("no variables defined");
            return;
        }
        for (name, value) in &self.variables {
            println!("{} = {}", name, value);
        }
    }

    fn evaluate(&mut self, input: &str) {
        if let Some((name, value)) = input.split_once(":=") {
            let name = name.trim();
            if name.is_empty() {
                println!("assignment requires a variable name");
                return;
            }
            self.variables.insert(
                SmolStr::new(name),
                serde_json::Value::String(value.trim().to_string()),
            );
            return;
        }

        match self.variables.get(input) {
            Some(value) => println!("{}", value),
            None => println!("{}: undefined variable", input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn cli() -> Cli {
        Cli {
            zookeeper: None,
            variables: None,
            inputrc: None,
            properties: None,
            no_ansi: false,
        }
    }

    #[tokio::test]
    async fn loads_variables_from_json_map() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "jim", "count": 3}}"#).unwrap();

        let mut options = cli();
        options.variables = Some(file.path().to_path_buf());

        let shell = Shell::load(options).await.unwrap();
        assert_eq!(
            shell.variables.get("name"),
            Some(&serde_json::Value::String("jim".to_string()))
        );
        assert_eq!(shell.variables.len(), 2);
    }

    #[tokio::test]
    async fn rejects_variables_file_that_is_not_a_map() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"["not", "a", "map"]"#).unwrap();

        let mut options = cli();
        options.variables = Some(file.path().to_path_buf());

        let err = Shell::load(options).await.unwrap_err();
        assert!(matches!(err, ShellError::Config(_)));
    }

    #[tokio::test]
    async fn prompt_honors_properties_and_no_ansi() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "prompt = \"astral$\"").unwrap();

        let mut options = cli();
        options.properties = Some(file.path().to_path_buf());
        options.no_ansi = true;

        let shell = Shell::load(options).await.unwrap();
        assert_eq!(shell.prompt(), "astral$ ");
    }

    #[tokio::test]
    async fn assignment_then_lookup_round_trips() {
        let mut shell = Shell::load(cli()).await.unwrap();
        shell.evaluate("greeting := hello");
        assert_eq!(
            shell.variables.get("greeting"),
            Some(&serde_json::Value::String("hello".to_string()))
        );
    }
}
