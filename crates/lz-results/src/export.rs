//! Columnar trajectory export.
//!
//! Format contract for downstream plotting tools: one sample per line,
//! four whitespace-separated columns `t x y z` in that order, scientific
//! notation with 15 digits after the decimal point.

use std::path::Path;

use crate::types::TrajectorySample;
use crate::{ResultsError, ResultsResult};

/// Render samples to the columnar text format.
pub fn format_trajectory(samples: &[TrajectorySample]) -> String {
    let mut out = String::with_capacity(samples.len() * 96);
    for s in samples {
        out.push_str(&format!("{:.15e} {:.15e} {:.15e} {:.15e}\n", s.t, s.x, s.y, s.z));
    }
    out
}

/// Write samples to `path` in the columnar text format.
pub fn write_trajectory(path: &Path, samples: &[TrajectorySample]) -> ResultsResult<()> {
    std::fs::write(path, format_trajectory(samples))?;
    Ok(())
}

/// Parse the columnar text format back into samples.
pub fn parse_trajectory(content: &str) -> ResultsResult<Vec<TrajectorySample>> {
    let mut samples = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace().map(str::parse::<f64>);
        let mut next = |name: &str| -> ResultsResult<f64> {
            fields
                .next()
                .ok_or_else(|| ResultsError::Parse {
                    line: idx + 1,
                    message: format!("missing column {name}"),
                })?
                .map_err(|e| ResultsError::Parse {
                    line: idx + 1,
                    message: e.to_string(),
                })
        };
        samples.push(TrajectorySample {
            t: next("t")?,
            x: next("x")?,
            y: next("y")?,
            z: next("z")?,
        });
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_is_four_scientific_columns() {
        let samples = vec![TrajectorySample {
            t: 0.0,
            x: 10.0,
            y: 9.928,
            z: 10.073,
        }];
        let out = format_trajectory(&samples);
        let line = out.lines().next().unwrap();
        let cols: Vec<&str> = line.split_whitespace().collect();
        assert_eq!(cols.len(), 4);
        assert!(cols.iter().all(|c| c.contains('e')));
        assert!(cols[1].starts_with("1.000000000000000e1"));
    }

    #[test]
    fn round_trip_preserves_values() {
        let samples = vec![
            TrajectorySample {
                t: 0.0,
                x: 10.0,
                y: 10.0,
                z: 10.0,
            },
            TrajectorySample {
                t: 0.001,
                x: 10.0,
                y: 9.928,
                z: 10.073333333333333,
            },
        ];
        let parsed = parse_trajectory(&format_trajectory(&samples)).unwrap();
        assert_eq!(parsed.len(), 2);
        for (a, b) in samples.iter().zip(&parsed) {
            assert!((a.t - b.t).abs() < 1e-14);
            assert!((a.y - b.y).abs() < 1e-12);
        }
    }

    #[test]
    fn parse_rejects_short_lines() {
        let err = parse_trajectory("1.0 2.0 3.0\n").unwrap_err();
        assert!(matches!(err, ResultsError::Parse { line: 1, .. }));
    }

    #[test]
    fn parse_skips_blank_lines() {
        let parsed = parse_trajectory("\n1.0 2.0 3.0 4.0\n\n").unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].z, 4.0);
    }
}
