use anyhow::{Context, Result};
use geohash::Interval;
use serde::Serialize;

#[derive(Serialize)]
struct IntervalResponse {
    min: f64,
    max: f64,
    center: f64,
    error: f64,
}

impl From<Interval> for IntervalResponse {
    fn from(interval: Interval) -> Self {
        Self {
            min: interval.min,
            max: interval.max,
            center: interval.center,
            error: interval.error,
        }
    }
}

#[derive(Serialize)]
struct DecodeResponse {
    geohash: String,
    lat: IntervalResponse,
    lon: IntervalResponse,
}

pub fn run(hash: &str, json: bool) -> Result<()> {
    println!("{}", format_decode(hash, json)?);
    Ok(())
}

fn format_decode(hash: &str, json: bool) -> Result<String> {
    let cell = geohash::decode(hash).with_context(|| format!("Failed to decode '{}'", hash))?;

    if json {
        let response = DecodeResponse {
            geohash: hash.to_lowercase(),
            lat: cell.lat.into(),
            lon: cell.lon.into(),
        };
        return Ok(serde_json::to_string(&response)?);
    }

    Ok(format!(
        "Geohash: {}\n\nCenter: {:.6}, {:.6}\nLatitude:  {:.6} to {:.6} (±{:.6}°)\nLongitude: {:.6} to {:.6} (±{:.6}°)",
        hash.to_lowercase(),
        cell.lat.center,
        cell.lon.center,
        cell.lat.min,
        cell.lat.max,
        cell.lat.error,
        cell.lon.min,
        cell.lon.max,
        cell.lon.error
    ))
}
