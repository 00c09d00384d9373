//! Generate command implementation
//!
//! Wraps a text file into ROM banks and emits them in the requested format.

use anyhow::{Context, Result};
use colored::Colorize;
use romtext_backend_text::{generate_banks, Bank};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

use super::report::GenerateReport;
use crate::emit::{write_asm, write_bin, write_plaintext, OutputFormat};
use crate::input::{load_profile, load_widths, read_text, split_lines};

/// Run the generate command
///
/// # Arguments
/// * `widths_path` - Path to the JSON width table
/// * `input_path` - Text file to convert (default: stdin)
/// * `start_bank` - Number of the first bank
/// * `format` - Output format
/// * `output` - Output file, or directory for `bin` (default: stdout)
/// * `profile_name` - Optional built-in layout profile (default, wide)
/// * `profile_file` - Optional JSON layout profile, overrides `profile_name`
/// * `report_path` - Optional path for a JSON report of the banks
///
/// # Returns
/// Exit code: 0 success, 1 error
#[allow(clippy::too_many_arguments)]
pub fn run(
    widths_path: &str,
    input_path: Option<&str>,
    start_bank: u32,
    format: OutputFormat,
    output: Option<&str>,
    profile_name: Option<&str>,
    profile_file: Option<&str>,
    report_path: Option<&str>,
) -> Result<ExitCode> {
    if format == OutputFormat::Bin && output.is_none() {
        anyhow::bail!("--output <DIR> is required with --format bin");
    }

    let profile = load_profile(profile_name, profile_file.map(Path::new))?;
    let table = load_widths(Path::new(widths_path))?;
    table
        .validate_for_profile(&profile)
        .with_context(|| format!("Width table {} is unusable", widths_path))?;

    eprintln!(
        "{} {}",
        "Generating from:".cyan().bold(),
        input_path.unwrap_or("<stdin>")
    );
    eprintln!("{} {}", "Profile:".dimmed(), profile.name);

    let text = read_text(input_path.map(Path::new))?;
    let lines = split_lines(&text);
    info!(lines = lines.len(), "read input");

    let banks = generate_banks(&table, &profile, start_bank, lines)
        .context("Failed to generate text banks")?;
    info!(banks = banks.len(), "generated banks");

    match (format, output) {
        (OutputFormat::Bin, Some(dir)) => {
            let paths = write_bin(Path::new(dir), &banks)
                .with_context(|| format!("Failed to write banks to: {}", dir))?;
            for path in &paths {
                eprintln!("  {} {}", "wrote".dimmed(), path.display());
            }
        }
        (_, Some(path)) => {
            let file =
                File::create(path).with_context(|| format!("Failed to create: {}", path))?;
            let mut out = BufWriter::new(file);
            render(&mut out, format, &banks)
                .and_then(|_| out.flush())
                .with_context(|| format!("Failed to write to: {}", path))?;
        }
        (_, None) => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            render(&mut out, format, &banks)
                .and_then(|_| out.flush())
                .context("Failed to write to stdout")?;
        }
    }

    if let Some(report_path) = report_path {
        let report = GenerateReport::new(&profile, start_bank, &banks);
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        fs::write(report_path, json)
            .with_context(|| format!("Failed to write report: {}", report_path))?;
    }

    let last = banks.last().map(|b| b.number).unwrap_or(start_bank);
    eprintln!(
        "{} {} bank(s), {}..={}",
        "SUCCESS".green().bold(),
        banks.len(),
        start_bank,
        last
    );

    Ok(ExitCode::SUCCESS)
}

/// Writes banks in one of the stream formats.
///
/// `bin` has no single-stream form and writes nothing here.
pub fn render<W: Write>(out: &mut W, format: OutputFormat, banks: &[Bank]) -> io::Result<()> {
    match format {
        OutputFormat::Asm => write_asm(out, banks),
        OutputFormat::Plaintext => write_plaintext(out, banks),
        OutputFormat::Bin => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_widths(dir: &TempDir, width: u32) -> String {
        let path = dir.path().join("widths.json");
        fs::write(&path, serde_json::to_string(&vec![width; 96]).unwrap()).unwrap();
        path.to_string_lossy().into_owned()
    }

    fn write_text(dir: &TempDir, text: &[u8]) -> String {
        let path = dir.path().join("book.txt");
        let mut file = File::create(&path).unwrap();
        file.write_all(text).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_generate_asm_to_file() {
        let dir = TempDir::new().unwrap();
        let widths = write_widths(&dir, 8);
        let text = write_text(&dir, b"Hi\n");
        let out = dir.path().join("text.asm");
        let report = dir.path().join("report.json");

        run(
            &widths,
            Some(&text),
            2,
            OutputFormat::Asm,
            Some(out.to_str().unwrap()),
            None,
            None,
            Some(report.to_str().unwrap()),
        )
        .unwrap();

        let asm = fs::read_to_string(&out).unwrap();
        let mut lines = asm.lines();
        assert_eq!(
            lines.next(),
            Some("SECTION \"Text Data Bank 2\", ROMX[$4000], BANK[2]")
        );
        assert_eq!(lines.next(), Some("db 72"));
        assert_eq!(lines.next(), Some("db 105"));
        // "Hi" terminator plus 20 padding lines
        assert_eq!(lines.filter(|l| *l == "db 0").count(), 21);

        let report: GenerateReport =
            serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
        assert_eq!(report.banks.len(), 1);
        assert_eq!(report.banks[0].len, 23);
        assert_eq!(report.total_lines, 21);
    }

    #[test]
    fn test_bin_requires_output() {
        let err = run("unused.json", None, 2, OutputFormat::Bin, None, None, None, None)
            .unwrap_err();
        assert!(err.to_string().contains("--output"));
    }

    #[test]
    fn test_packing_failure_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let widths = write_widths(&dir, 8);
        let text = write_text(&dir, b"fits\nabcdefgh\n");
        let profile = dir.path().join("profile.json");
        fs::write(&profile, r#"{"bank_max_bytes": 6}"#).unwrap();
        let out = dir.path().join("text.asm");
        let report = dir.path().join("report.json");

        let err = run(
            &widths,
            Some(&text),
            2,
            OutputFormat::Asm,
            Some(out.to_str().unwrap()),
            None,
            Some(profile.to_str().unwrap()),
            Some(report.to_str().unwrap()),
        )
        .unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("does not fit"), "message was: {}", msg);
        assert!(!out.exists());
        assert!(!report.exists());
    }

    #[test]
    fn test_unusable_width_table_is_rejected() {
        let dir = TempDir::new().unwrap();
        let widths = write_widths(&dir, 90);
        let text = write_text(&dir, b"x\n");
        let out = dir.path().join("text.asm");

        let err = run(
            &widths,
            Some(&text),
            2,
            OutputFormat::Asm,
            Some(out.to_str().unwrap()),
            None,
            None,
            None,
        )
        .unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("unusable"), "message was: {}", msg);
        assert!(!out.exists());
    }
}
