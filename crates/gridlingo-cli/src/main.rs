mod commands;
mod input_output;
mod logging;
mod storage_args;

use clap::Parser;
use commands::Commands;

/// gridlingo
#[derive(clap::Parser, Debug)]
pub struct Args {
    #[command(flatten)]
    pub logging: logging::LogArgs,

    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.logging.setup_logging(2)?;

    args.command.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_encode() {
        let args = Args::try_parse_from([
            "gridlingo",
            "-vv",
            "encode",
            "--model",
            "GoToRedBall",
            "--input",
            "obs.jsonl",
            "--batch-size",
            "4",
        ])
        .unwrap();

        assert!(!args.logging.quiet);
        match args.command {
            Commands::Encode(cmd) => {
                assert_eq!(cmd.model, "GoToRedBall");
                assert_eq!(cmd.batch_size.get(), 4);
                assert_eq!(cmd.capacity, 100);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_requires_model() {
        assert!(Args::try_parse_from(["gridlingo", "vocab"]).is_err());
        assert!(Args::try_parse_from(["gridlingo", "paths", "--model", "GoToDoor"]).is_ok());
    }

    #[test]
    fn test_parse_rejects_zero_batch() {
        assert!(
            Args::try_parse_from(["gridlingo", "encode", "--model", "m", "--batch-size", "0"])
                .is_err()
        );
    }
}
