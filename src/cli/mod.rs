pub mod validator;

use crate::result::Result;
use crate::shell::Shell;
use clap::Parser;
use std::path::PathBuf;
use validator::OptionsValidator;

#[derive(Parser, Debug)]
#[command(name = "astral")]
#[command(about = "Interactive shell for the Astral query language")]
#[command(version = "0.1.0")]
#[command(author = "Matthias Theodore \"mxp96\" Bartholomew")]
#[command(
    help_template = "{before-help}{name} v{version}\nAuthor: {author}\n\n{about-with-newline}\n{usage-heading} {usage}\n\n{all-args}{after-help}"
)]
pub struct Cli {
    #[arg(
        short = 'z',
        long = "zookeeper",
        value_name = "HOST:PORT",
        help = "Coordination service to connect to, as host:port"
    )]
    pub zookeeper: Option<String>,

    #[arg(
        short = 'v',
        long = "variables",
        value_name = "FILE",
        help = "File containing a JSON map of variables to preload"
    )]
    pub variables: Option<PathBuf>,

    #[arg(
        long = "irc",
        alias = "inputrc",
        value_name = "FILE",
        help = "File containing the inputrc if not the default ~/.inputrc"
    )]
    pub inputrc: Option<PathBuf>,

    #[arg(
        short = 'p',
        long = "properties",
        value_name = "FILE",
        help = "File containing shell properties"
    )]
    pub properties: Option<PathBuf>,

    #[arg(
        long = "na",
        alias = "no-ansi",
        help = "Make the input prompt not use ANSI colors"
    )]
    pub no_ansi: bool,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        // Abort startup on the first invalid option; nothing below this
        // line runs with unchecked input.
        OptionsValidator::validate(&self)?;

        let shell = Shell::load(self).await?;
        shell.run().await
    }
}
