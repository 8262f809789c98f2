//! Problem instances: the persisted text format and its loader.
//!
//! An instance is whitespace-separated non-negative integers: a header line
//! `rows cols vehicles rides bonus steps`, then one record per ride
//! `start_row start_col end_row end_col earliest_start latest_finish`.
//! Ride ids are assigned by record position, starting at 0.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ride::{Ride, RideId};
use crate::spatial::GridPoint;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instance {
    pub rows: u32,
    pub cols: u32,
    pub vehicle_count: usize,
    pub bonus: u64,
    pub max_steps: u64,
    pub rides: Vec<Ride>,
}

/// Errors raised while loading an instance. A malformed input is fatal and
/// is reported before any simulation state is built.
#[derive(Debug)]
pub enum InstanceError {
    Io(io::Error),
    Malformed { line: usize, message: String },
}

impl From<io::Error> for InstanceError {
    fn from(err: io::Error) -> Self {
        InstanceError::Io(err)
    }
}

impl fmt::Display for InstanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstanceError::Io(err) => write!(f, "failed to read instance: {err}"),
            InstanceError::Malformed { line, message } => {
                write!(f, "malformed instance at line {line}: {message}")
            }
        }
    }
}

impl std::error::Error for InstanceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InstanceError::Io(err) => Some(err),
            InstanceError::Malformed { .. } => None,
        }
    }
}

fn parse_fields<const N: usize>(line: &str, line_no: usize) -> Result<[u64; N], InstanceError> {
    let mut fields = [0u64; N];
    let mut tokens = line.split_whitespace();
    for (index, field) in fields.iter_mut().enumerate() {
        let token = tokens.next().ok_or_else(|| InstanceError::Malformed {
            line: line_no,
            message: format!("expected {N} fields, found {index}"),
        })?;
        *field = token.parse().map_err(|_| InstanceError::Malformed {
            line: line_no,
            message: format!("invalid integer {token:?}"),
        })?;
    }
    if let Some(extra) = tokens.next() {
        return Err(InstanceError::Malformed {
            line: line_no,
            message: format!("unexpected trailing field {extra:?}"),
        });
    }
    Ok(fields)
}

fn to_coord(value: u64, line_no: usize) -> Result<u32, InstanceError> {
    u32::try_from(value).map_err(|_| InstanceError::Malformed {
        line: line_no,
        message: format!("coordinate {value} out of range"),
    })
}

pub fn parse_instance(input: &str) -> Result<Instance, InstanceError> {
    let lines: Vec<(usize, &str)> = input
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    let Some(&(header_line, header)) = lines.first() else {
        return Err(InstanceError::Malformed {
            line: 1,
            message: "empty instance".to_string(),
        });
    };
    let [rows, cols, vehicle_count, ride_count, bonus, max_steps] =
        parse_fields::<6>(header, header_line)?;

    let records = &lines[1..];
    if records.len() as u64 != ride_count {
        let line = lines.last().map(|&(line_no, _)| line_no).unwrap_or(header_line);
        return Err(InstanceError::Malformed {
            line,
            message: format!(
                "expected {ride_count} ride records, found {}",
                records.len()
            ),
        });
    }

    let mut rides = Vec::with_capacity(records.len());
    for (id, &(line_no, line)) in records.iter().enumerate() {
        let [start_row, start_col, end_row, end_col, earliest_start, latest_finish] =
            parse_fields::<6>(line, line_no)?;
        rides.push(Ride::new(
            id as RideId,
            GridPoint::new(to_coord(start_row, line_no)?, to_coord(start_col, line_no)?),
            GridPoint::new(to_coord(end_row, line_no)?, to_coord(end_col, line_no)?),
            earliest_start,
            latest_finish,
        ));
    }

    Ok(Instance {
        rows: to_coord(rows, header_line)?,
        cols: to_coord(cols, header_line)?,
        vehicle_count: vehicle_count as usize,
        bonus,
        max_steps,
        rides,
    })
}

pub fn load_instance(path: impl AsRef<Path>) -> Result<Instance, InstanceError> {
    let text = fs::read_to_string(path)?;
    parse_instance(&text)
}

/// Writes an instance back out in the text format `parse_instance` reads.
pub fn write_instance<W: Write>(writer: &mut W, instance: &Instance) -> io::Result<()> {
    writeln!(
        writer,
        "{} {} {} {} {} {}",
        instance.rows,
        instance.cols,
        instance.vehicle_count,
        instance.rides.len(),
        instance.bonus,
        instance.max_steps
    )?;
    for ride in &instance.rides {
        writeln!(
            writer,
            "{} {} {} {} {} {}",
            ride.origin.row,
            ride.origin.col,
            ride.destination.row,
            ride.destination.col,
            ride.earliest_start,
            ride.latest_finish
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
3 4 2 3 2 10
0 0 1 3 2 9
1 2 1 0 0 9
2 0 2 2 0 9
";

    #[test]
    fn parses_header_and_rides() {
        let instance = parse_instance(SAMPLE).expect("valid instance");
        assert_eq!(instance.rows, 3);
        assert_eq!(instance.cols, 4);
        assert_eq!(instance.vehicle_count, 2);
        assert_eq!(instance.bonus, 2);
        assert_eq!(instance.max_steps, 10);
        assert_eq!(instance.rides.len(), 3);

        let first = instance.rides[0];
        assert_eq!(first.id, 0);
        assert_eq!(first.origin, GridPoint::new(0, 0));
        assert_eq!(first.destination, GridPoint::new(1, 3));
        assert_eq!(first.earliest_start, 2);
        assert_eq!(first.latest_finish, 9);
        assert_eq!(first.distance, 4);
    }

    #[test]
    fn ids_follow_record_order() {
        let instance = parse_instance(SAMPLE).expect("valid instance");
        let ids: Vec<u32> = instance.rides.iter().map(|ride| ride.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn rejects_short_header() {
        let err = parse_instance("3 4 2\n").expect_err("missing header fields");
        match err {
            InstanceError::Malformed { line, message } => {
                assert_eq!(line, 1);
                assert!(message.contains("expected 6 fields"), "{message}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_non_integer_field_with_line_number() {
        let err = parse_instance("3 4 1 1 2 10\n0 0 x 3 2 9\n").expect_err("bad integer");
        match err {
            InstanceError::Malformed { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("invalid integer"), "{message}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_record_count_mismatch() {
        let err = parse_instance("3 4 2 3 2 10\n0 0 1 3 2 9\n").expect_err("missing records");
        assert!(matches!(err, InstanceError::Malformed { .. }));

        let err = parse_instance("3 4 2 1 2 10\n0 0 1 3 2 9\n1 2 1 0 0 9\n")
            .expect_err("extra records");
        assert!(matches!(err, InstanceError::Malformed { .. }));
    }

    #[test]
    fn rejects_trailing_fields() {
        let err = parse_instance("3 4 1 1 2 10\n0 0 1 3 2 9 7\n").expect_err("trailing field");
        assert!(matches!(err, InstanceError::Malformed { line: 2, .. }));
    }

    #[test]
    fn missing_file_surfaces_an_io_error() {
        let err = load_instance("/nonexistent/instance.in").expect_err("missing file");
        assert!(matches!(err, InstanceError::Io(_)));
    }

    #[test]
    fn written_instances_parse_back() {
        let instance = parse_instance(SAMPLE).expect("valid instance");
        let mut buffer = Vec::new();
        write_instance(&mut buffer, &instance).expect("write to memory");
        let text = String::from_utf8(buffer).expect("utf8");
        let reparsed = parse_instance(&text).expect("round trip");
        assert_eq!(reparsed.rides, instance.rides);
        assert_eq!(reparsed.vehicle_count, instance.vehicle_count);
    }
}
