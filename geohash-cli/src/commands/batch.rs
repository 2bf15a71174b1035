use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

pub fn run(
    input: PathBuf,
    output: Option<PathBuf>,
    lat_col: String,
    lon_col: String,
    precision: i64,
) -> Result<()> {
    let precision = geohash::checked_precision(precision).context("Invalid --precision")?;

    let extension = input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    if extension != "csv" {
        bail!("Unsupported file format: {}. Use .csv", extension);
    }

    let file = File::open(&input).context("Failed to open input file")?;

    // Prepare output
    let output_path = output.unwrap_or_else(|| default_output_path(&input));
    let output_file = File::create(&output_path).context("Failed to create output file")?;

    let stats = process_csv(
        BufReader::new(file),
        BufWriter::new(output_file),
        &lat_col,
        &lon_col,
        precision,
        true,
    )?;

    if stats.invalid > 0 {
        println!(
            "{} of {} rows had invalid coordinates (left blank)",
            stats.invalid, stats.rows
        );
    }
    println!("Output written to: {}", output_path.display());
    Ok(())
}

#[derive(Debug, Default, PartialEq)]
struct BatchStats {
    rows: u64,
    invalid: u64,
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{}_geohash.csv", stem))
}

fn process_csv<R: Read, W: Write>(
    reader: R,
    writer: W,
    lat_col: &str,
    lon_col: &str,
    precision: usize,
    show_progress: bool,
) -> Result<BatchStats> {
    let mut reader = csv::Reader::from_reader(reader);

    // Find column indices
    let headers = reader.headers()?.clone();
    let lat_idx = headers
        .iter()
        .position(|h| h == lat_col)
        .with_context(|| format!("Column '{}' not found in CSV", lat_col))?;
    let lon_idx = headers
        .iter()
        .position(|h| h == lon_col)
        .with_context(|| format!("Column '{}' not found in CSV", lon_col))?;

    // Collect records for progress bar
    let records: Vec<_> = reader.records().collect::<Result<_, _>>()?;

    let pb = if show_progress {
        let pb = ProgressBar::new(records.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
                )?
                .progress_chars("#>-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut writer = csv::Writer::from_writer(writer);

    // Write header
    let mut new_headers: Vec<&str> = headers.iter().collect();
    new_headers.push("geohash");
    writer.write_record(&new_headers)?;

    let mut stats = BatchStats::default();

    for record in records {
        let lat = record.get(lat_idx).and_then(|s| s.trim().parse::<f64>().ok());
        let lon = record.get(lon_idx).and_then(|s| s.trim().parse::<f64>().ok());

        let hash = match (lat, lon) {
            (Some(lat), Some(lon)) => geohash::encode(lat, lon, precision).ok(),
            _ => None,
        };
        if hash.is_none() {
            stats.invalid += 1;
        }
        stats.rows += 1;

        let mut new_record: Vec<&str> = record.iter().collect();
        new_record.push(hash.as_deref().unwrap_or(""));
        writer.write_record(&new_record)?;

        pb.inc(1);
    }

    pb.finish_with_message("done");
    writer.flush()?;

    Ok(stats)
}
