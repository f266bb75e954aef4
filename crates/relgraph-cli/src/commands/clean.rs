//! Clean command implementation.

use crate::cli::CleanArgs;
use crate::error::Result;
use crate::output::Formatter;
use relgraph_extractor::clean_labeled_text;
use std::fs;

/// Execute the clean command.
pub fn execute_clean(args: CleanArgs, formatter: &Formatter) -> Result<()> {
    let labeled = fs::read_to_string(&args.input)?;
    let cleaned = clean_labeled_text(&labeled);
    fs::write(&args.output, &cleaned)?;

    let lines = cleaned.lines().count();
    println!(
        "{}",
        formatter.success(&format!(
            "Cleaned {} lines into {}",
            lines,
            args.output.display()
        ))
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_clean_writes_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("labeled.txt");
        let output = dir.path().join("clean.txt");
        fs::write(&input, "Acme was founded. | founder\n\n  Globex is big |x\n").unwrap();

        let args = CleanArgs {
            input,
            output: output.clone(),
        };
        execute_clean(args, &Formatter::new(OutputFormat::Quiet, false)).unwrap();

        assert_eq!(
            fs::read_to_string(output).unwrap(),
            "Acme was founded.\nGlobex is big\n"
        );
    }

    #[test]
    fn test_missing_input_is_io_error() {
        let dir = TempDir::new().unwrap();
        let args = CleanArgs {
            input: dir.path().join("missing.txt"),
            output: dir.path().join("out.txt"),
        };
        let result = execute_clean(args, &Formatter::new(OutputFormat::Quiet, false));
        assert!(matches!(result, Err(crate::error::CliError::Io(_))));
    }
}
