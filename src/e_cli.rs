use crate::e_style::ColorChoice;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Summarize compiler and linker diagnostics from a build log.",
    long_about = "Reads build output from stdin (or the given log files) and prints the \
errors, warnings and multiple definitions it found, grouped by file.",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[arg(
        long,
        value_enum,
        default_value_t = ColorChoice::Auto,
        help = "When to color the report (default: auto)."
    )]
    pub color: ColorChoice,

    #[arg(
        long,
        short = 'f',
        value_enum,
        default_value_t = OutputFormat::Text,
        help = "Report format (default: text)."
    )]
    pub format: OutputFormat,

    #[arg(help = "Build log files to read instead of stdin. Use - for stdin.")]
    pub inputs: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write <ARTIFACT>.md5 next to each built artifact.
    Checksum {
        #[arg(required = true, help = "Built artifacts, e.g. firmware.bin littlefs.bin")]
        artifacts: Vec<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    #[cfg(feature = "uses_serde")]
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["e_build_summary"]);
        assert_eq!(cli.color, ColorChoice::Auto);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.inputs.is_empty());
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_inputs_and_color() {
        let cli = Cli::parse_from(["e_build_summary", "--color", "never", "a.log", "-"]);
        assert_eq!(cli.color, ColorChoice::Never);
        assert_eq!(cli.inputs, vec!["a.log".to_string(), "-".to_string()]);
    }

    #[test]
    fn test_checksum_subcommand() {
        let cli = Cli::parse_from(["e_build_summary", "checksum", "firmware.bin", "littlefs.bin"]);
        match cli.command {
            Some(Command::Checksum { artifacts }) => {
                assert_eq!(
                    artifacts,
                    vec![PathBuf::from("firmware.bin"), PathBuf::from("littlefs.bin")]
                );
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_checksum_requires_an_artifact() {
        assert!(Cli::try_parse_from(["e_build_summary", "checksum"]).is_err());
    }

    #[cfg(feature = "uses_serde")]
    #[test]
    fn test_json_format() {
        let cli = Cli::parse_from(["e_build_summary", "-f", "json"]);
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
