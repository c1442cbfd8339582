//! Capture CSV parser.
//!
//! Parses a headered oscilloscope export into a [`Trace`].
//!
//! # Expected format
//!
//! ```csv
//! Time,Vgs,Vds,Is
//! 0.0,12.0,0.4,21.0
//! 1e-9,11.8,0.5,20.9
//! ```
//!
//! Header names match case-insensitively and may appear in any column
//! order; extra columns are ignored. Any malformed cell fails the whole
//! load, so a `Trace` is never partially populated.

use crate::error::{Result, SlewmeterError};
use crate::trace::Trace;
use tracing::debug;

/// Required capture columns, in trace order.
const COLUMNS: [&str; 4] = ["Time", "Vgs", "Vds", "Is"];

/// Parse a capture CSV string into a validated [`Trace`].
pub fn parse(input: &str) -> Result<Trace> {
    let mut reader = csv::Reader::from_reader(input.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| SlewmeterError::Load(format!("bad header row: {}", e)))?;
    let mut positions = [0usize; 4];
    for (slot, name) in positions.iter_mut().zip(COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
            .ok_or_else(|| SlewmeterError::Load(format!("missing column '{}'", name)))?;
    }

    let mut times = Vec::new();
    let mut vgs = Vec::new();
    let mut vds = Vec::new();
    let mut is = Vec::new();

    for (row, record) in reader.records().enumerate() {
        // header occupies line 1
        let line = row + 2;
        let record = record.map_err(|e| load_err(line, &format!("{}", e)))?;

        let mut cells = [0.0f64; 4];
        for (k, &pos) in positions.iter().enumerate() {
            let raw = record
                .get(pos)
                .ok_or_else(|| load_err(line, &format!("missing '{}' cell", COLUMNS[k])))?;
            cells[k] = raw.trim().parse().map_err(|_| {
                load_err(line, &format!("bad {} value '{}'", COLUMNS[k], raw.trim()))
            })?;
        }
        times.push(cells[0]);
        vgs.push(cells[1]);
        vds.push(cells[2]);
        is.push(cells[3]);
    }

    debug!(samples = times.len(), "parsed capture");
    Trace::new(times, vgs, vds, is)
}

fn load_err(line: usize, detail: &str) -> SlewmeterError {
    SlewmeterError::Load(format!("line {}: {}", line, detail))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- happy path tests ----

    #[test]
    fn test_parse_basic_capture() {
        let input = "\
Time,Vgs,Vds,Is
0.0,12.0,0.4,21.0
1e-9,11.8,0.5,20.9
2e-9,11.5,0.7,20.5
";
        let trace = parse(input).unwrap();
        assert_eq!(trace.len(), 3);
        assert_eq!(trace.times, vec![0.0, 1e-9, 2e-9]);
        assert_eq!(trace.vgs, vec![12.0, 11.8, 11.5]);
        assert_eq!(trace.vds, vec![0.4, 0.5, 0.7]);
        assert_eq!(trace.is, vec![21.0, 20.9, 20.5]);
    }

    #[test]
    fn test_parse_case_insensitive_headers() {
        let input = "\
TIME,VGS,VDS,IS
0.0,1.0,2.0,3.0
1.0,1.1,2.1,3.1
";
        let trace = parse(input).unwrap();
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.vds, vec![2.0, 2.1]);
    }

    #[test]
    fn test_parse_reordered_and_extra_columns() {
        let input = "\
Is,Vds,Vgs,Time,Comment
3.0,2.0,1.0,0.0,first
3.5,2.5,1.5,0.5,second
";
        let trace = parse(input).unwrap();
        assert_eq!(trace.times, vec![0.0, 0.5]);
        assert_eq!(trace.vgs, vec![1.0, 1.5]);
        assert_eq!(trace.vds, vec![2.0, 2.5]);
        assert_eq!(trace.is, vec![3.0, 3.5]);
    }

    #[test]
    fn test_parse_whitespace_around_cells() {
        let input = "\
Time, Vgs, Vds, Is
0.0, 1.0, 2.0, 3.0
1.0, 1.5, 2.5, 3.5
";
        let trace = parse(input).unwrap();
        assert_eq!(trace.vgs, vec![1.0, 1.5]);
    }

    // ---- failure tests ----

    #[test]
    fn test_missing_column_fails() {
        let input = "\
Time,Vgs,Vds
0.0,1.0,2.0
1.0,1.5,2.5
";
        let err = parse(input).unwrap_err();
        match err {
            SlewmeterError::Load(msg) => assert!(msg.contains("missing column 'Is'")),
            other => panic!("expected Load error, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_numeric_cell_names_line_and_column() {
        let input = "\
Time,Vgs,Vds,Is
0.0,1.0,2.0,3.0
1.0,oops,2.5,3.5
";
        let err = parse(input).unwrap_err();
        match err {
            SlewmeterError::Load(msg) => {
                assert!(msg.contains("line 3"), "message was: {}", msg);
                assert!(msg.contains("Vgs"), "message was: {}", msg);
                assert!(msg.contains("oops"), "message was: {}", msg);
            }
            other => panic!("expected Load error, got {:?}", other),
        }
    }

    #[test]
    fn test_single_row_fails_validation() {
        let input = "\
Time,Vgs,Vds,Is
0.0,1.0,2.0,3.0
";
        let err = parse(input).unwrap_err();
        assert!(matches!(err, SlewmeterError::Load(_)));
    }

    #[test]
    fn test_non_monotonic_time_fails() {
        let input = "\
Time,Vgs,Vds,Is
0.0,1.0,2.0,3.0
2.0,1.0,2.0,3.0
1.0,1.0,2.0,3.0
";
        let err = parse(input).unwrap_err();
        match err {
            SlewmeterError::Load(msg) => assert!(msg.contains("strictly increasing")),
            other => panic!("expected Load error, got {:?}", other),
        }
    }

    #[test]
    fn test_nan_time_cell_fails() {
        // "nan" parses as a float, so it must be caught by trace validation
        let input = "\
Time,Vgs,Vds,Is
0.0,1.0,2.0,3.0
nan,1.1,2.1,3.1
2.0,1.2,2.2,3.2
";
        let err = parse(input).unwrap_err();
        match err {
            SlewmeterError::Load(msg) => assert!(msg.contains("strictly increasing")),
            other => panic!("expected Load error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input_fails() {
        let err = parse("").unwrap_err();
        assert!(matches!(err, SlewmeterError::Load(_)));
    }
}
