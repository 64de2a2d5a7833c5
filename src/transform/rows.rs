//! Row-per-trial explosion of the sample CSV.
//!
//! Each input row carries a sample id in cell 0 and four trial values in
//! cells 1-4. Every cell is cleaned of spaces and periods, the id is
//! rewritten, and one output row is written per trial with a `_1`..`_4`
//! suffix on the id. Trial values of exactly 5 characters are left-padded
//! with a single `0` to 6.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::{TransformError, TransformResult};
use crate::transform::sample_id::transform_sample_id;

/// Number of trial values per input row.
const TRIALS_PER_ROW: usize = 4;

/// Strip spaces and periods from a non-empty cell. Empty cells stay empty.
pub fn clean_cell(cell: &str) -> String {
    if cell.is_empty() {
        return String::new();
    }
    cell.chars().filter(|c| *c != ' ' && *c != '.').collect()
}

/// Left-pad a trial value with `0` when it is exactly 5 characters long.
fn pad_trial(trial: &str) -> String {
    if trial.chars().count() == 5 {
        format!("0{trial}")
    } else {
        trial.to_string()
    }
}

/// Explode one input row into its 4 `(derived_id, trial_value)` pairs.
///
/// `row` is the 1-based row number, used only for error context. Cells
/// beyond index 4 are ignored.
pub fn explode_row(record: &StringRecord, row: usize) -> TransformResult<Vec<(String, String)>> {
    if record.len() < TRIALS_PER_ROW + 1 {
        return Err(TransformError::ShortRow { row });
    }

    let cleaned: Vec<String> = record.iter().map(clean_cell).collect();
    let base_id = transform_sample_id(&cleaned[0]);

    let pairs = cleaned[1..=TRIALS_PER_ROW]
        .iter()
        .enumerate()
        .map(|(i, trial)| (format!("{}_{}", base_id, i + 1), pad_trial(trial)))
        .collect();

    Ok(pairs)
}

/// Transform the sample CSV at `input` into the row-per-trial CSV at
/// `output`, overwriting any existing file. Returns the input row count.
///
/// The writer flushes after every row, so a mid-run crash leaves a
/// consistent prefix of the output rather than a corrupt file.
pub fn transform_csv(input: &Path, output: &Path) -> TransformResult<usize> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(File::open(input)?);
    let mut writer = WriterBuilder::new().from_writer(File::create(output)?);

    let mut rows_in = 0;
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        rows_in += 1;

        for (id, trial) in explode_row(&record, idx + 1)? {
            writer.write_record([id.as_str(), trial.as_str()])?;
            writer.flush()?;
        }
    }

    Ok(rows_in)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn record(cells: &[&str]) -> StringRecord {
        StringRecord::from(cells.to_vec())
    }

    #[test]
    fn test_clean_cell_strips_spaces_and_periods() {
        assert_eq!(clean_cell("1 .1"), "11");
        assert_eq!(clean_cell("  a.b.c  "), "abc");
    }

    #[test]
    fn test_clean_cell_empty_stays_empty() {
        assert_eq!(clean_cell(""), "");
    }

    #[test]
    fn test_pad_only_length_five() {
        assert_eq!(pad_trial("22222"), "022222");
        assert_eq!(pad_trial("333333"), "333333");
        assert_eq!(pad_trial("4"), "4");
        assert_eq!(pad_trial(""), "");
    }

    #[test]
    fn test_explode_row_example() {
        // Worked example: 12345/ab with trials 1.1, 22222, 333333, 4.
        let rec = record(&["12345/ab", "1.1", "22222", "333333", "4"]);
        let pairs = explode_row(&rec, 1).unwrap();

        assert_eq!(
            pairs,
            vec![
                ("12345d_ab_1".to_string(), "11".to_string()),
                ("12345d_ab_2".to_string(), "022222".to_string()),
                ("12345d_ab_3".to_string(), "333333".to_string()),
                ("12345d_ab_4".to_string(), "4".to_string()),
            ]
        );
    }

    #[test]
    fn test_explode_row_always_four_outputs() {
        let rec = record(&["x/y", "1", "2", "3", "4", "ignored", "also ignored"]);
        let pairs = explode_row(&rec, 1).unwrap();

        assert_eq!(pairs.len(), 4);
        let suffixes: Vec<&str> = pairs.iter().map(|(id, _)| &id[id.len() - 2..]).collect();
        assert_eq!(suffixes, vec!["_1", "_2", "_3", "_4"]);
    }

    #[test]
    fn test_explode_row_short_row_fails() {
        let rec = record(&["x/y", "1", "2"]);
        let err = explode_row(&rec, 9).unwrap_err();
        assert!(matches!(err, TransformError::ShortRow { row: 9 }));
    }

    #[test]
    fn test_transform_csv_end_to_end() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("normal_data.csv");
        let output = dir.path().join("transformed_data.csv");
        fs::write(&input, "12345/ab,1.1,22222,333333,4\n678/cd,55555,66666,7,8\n").unwrap();

        let rows_in = transform_csv(&input, &output).unwrap();
        assert_eq!(rows_in, 2);

        let content = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "12345d_ab_1,11");
        assert_eq!(lines[1], "12345d_ab_2,022222");
        assert_eq!(lines[4], "678d_cd_1,055555");
        assert_eq!(lines[7], "678d_cd_4,8");
    }

    #[test]
    fn test_transform_csv_overwrites_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        fs::write(&input, "a/b,1,2,3,4\n").unwrap();
        fs::write(&output, "stale content\nfrom a previous run\n").unwrap();

        transform_csv(&input, &output).unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert!(!content.contains("stale"));
        assert_eq!(content.lines().count(), 4);
    }

    #[test]
    fn test_transform_csv_short_row_aborts() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        fs::write(&input, "a/b,1,2,3,4\nshort,1,2\n").unwrap();

        let err = transform_csv(&input, &output).unwrap_err();
        assert!(matches!(err, TransformError::ShortRow { row: 2 }));

        // The first row was already written and flushed.
        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content.lines().count(), 4);
    }
}
