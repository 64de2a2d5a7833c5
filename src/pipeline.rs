//! Four-step merge pipeline.
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │ sample CSV  │───▶│  transform  │───▶│   mapping   │───▶│  join/match │
//! │ (id+trials) │    │ (row/trial) │    │ (frag → id) │    │ (final CSV) │
//! └─────────────┘    └─────────────┘    └─────────────┘    └─────────────┘
//! ```
//!
//! Fully sequential: each file is opened, consumed or written, and closed
//! before the next step begins. The mapping is the only state shared
//! across steps, built once and only read afterward. Any failure
//! propagates immediately and terminates the run.

use crate::config::Config;
use crate::error::PipelineResult;
use crate::logs::{log_info, log_success, log_warning};
use crate::mapping::build_mapping;
use crate::matcher::{match_and_write, MatchStats};
use crate::transform::transform_csv;

/// Summary of a completed run.
#[derive(Debug, Clone, Copy)]
pub struct MergeReport {
    /// Input rows read from the sample CSV.
    pub rows_in: usize,
    /// Fragment mapping entries (after duplicate overwrite).
    pub mapping_entries: usize,
    /// Join outcome counts.
    pub stats: MatchStats,
}

/// Run the full merge pipeline with the given config.
pub fn run(config: &Config) -> PipelineResult<MergeReport> {
    let sample_data = config.sample_data();
    let transformed = config.transformation_file();
    let reformed = config.file_with_wavelengths();
    let final_file = config.final_file();

    log_info(format!("Transforming {}", sample_data.display()));
    let rows_in = transform_csv(&sample_data, &transformed)?;
    println!("Transformation complete.");
    log_success(format!("{} input rows, {} trial rows written", rows_in, rows_in * 4));

    let map = build_mapping(&transformed)?;
    log_info(format!("Mapping built: {} fragment entries", map.len()));

    let stats = match_and_write(&map, &reformed, &final_file)?;
    println!("Matching and writing to final CSV complete.");
    log_success(format!("{} rows matched into {}", stats.matched, final_file.display()));
    if stats.dropped > 0 {
        log_warning(format!("{} rows dropped (no fragment or no mapping hit)", stats.dropped));
    }

    Ok(MergeReport {
        rows_in,
        mapping_entries: map.len(),
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_run_end_to_end() {
        let dir = tempdir().unwrap();
        let sample = dir.path().join("normal_data.csv");
        let transformed = dir.path().join("transformed_data.csv");
        let reformed = dir.path().join("reformed.csv");
        let final_file = dir.path().join("final.csv");

        fs::write(&sample, "12345/ab,11111,22222,33333,44444\n").unwrap();
        fs::write(
            &reformed,
            "scan_022222_x.txt,400,0.5\nscan_099999_y.txt,410,0.6\n",
        )
        .unwrap();

        let config = Config::parse(&format!(
            "sample_data={}\ntransformation_file={}\nfile_with_wavelengths={}\nfinal_file={}",
            sample.display(),
            transformed.display(),
            reformed.display(),
            final_file.display(),
        ))
        .unwrap();

        let report = run(&config).unwrap();
        assert_eq!(report.rows_in, 1);
        assert_eq!(report.mapping_entries, 4);
        assert_eq!(report.stats, MatchStats { matched: 1, dropped: 1 });

        // Trial 2 (22222 padded to 022222) matched the second scan fragment.
        let content = fs::read_to_string(&final_file).unwrap();
        assert_eq!(content.lines().next(), Some("12345d_ab_2,400,0.5"));
    }

    #[test]
    fn test_run_propagates_short_row() {
        let dir = tempdir().unwrap();
        let sample = dir.path().join("normal_data.csv");
        fs::write(&sample, "too,short\n").unwrap();

        let config = Config::parse(&format!(
            "sample_data={}\ntransformation_file={}\nfile_with_wavelengths={}\nfinal_file={}",
            sample.display(),
            dir.path().join("t.csv").display(),
            dir.path().join("r.csv").display(),
            dir.path().join("f.csv").display(),
        ))
        .unwrap();

        assert!(run(&config).is_err());
    }
}
