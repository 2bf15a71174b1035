use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct EncodeResponse<'a> {
    geohash: &'a str,
    lat: f64,
    lon: f64,
    precision: usize,
}

pub fn run(lat: f64, lon: f64, precision: i64, json: bool) -> Result<()> {
    println!("{}", format_encode(lat, lon, precision, json)?);
    Ok(())
}

fn format_encode(lat: f64, lon: f64, precision: i64, json: bool) -> Result<String> {
    let precision = geohash::checked_precision(precision).context("Invalid --precision")?;
    let hash = geohash::encode(lat, lon, precision).context("Failed to encode coordinate")?;

    if !json {
        return Ok(hash);
    }

    let response = EncodeResponse {
        geohash: &hash,
        lat,
        lon,
        precision,
    };
    Ok(serde_json::to_string(&response)?)
}
