use std::error::Error;
use std::fmt;
use std::fs;
use std::num::{ParseFloatError, ParseIntError};

#[derive(Debug)]
pub enum ParseError {
    Io(std::io::Error),
    ParseInt(ParseIntError),
    ParseFloat(ParseFloatError),
    InvalidInput(String),
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> ParseError {
        ParseError::Io(err)
    }
}

impl From<ParseIntError> for ParseError {
    fn from(err: ParseIntError) -> ParseError {
        ParseError::ParseInt(err)
    }
}

impl From<ParseFloatError> for ParseError {
    fn from(err: ParseFloatError) -> ParseError {
        ParseError::ParseFloat(err)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Io(err) => write!(f, "io error: {}", err),
            ParseError::ParseInt(err) => write!(f, "invalid x value: {}", err),
            ParseError::ParseFloat(err) => write!(f, "invalid sample: {}", err),
            ParseError::InvalidInput(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for ParseError {}

/// One measurement series extracted from a single result file.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub x: Vec<i64>,
    pub y: Vec<f64>,
}

/// Reads a result file and extracts both axes from its content.
pub fn parse(input_file: &str) -> Result<Series, ParseError> {
    let input = fs::read_to_string(input_file)?;
    Ok(Series {
        x: extract_x_axis(&input)?,
        y: extract_y_axis(&input)?,
    })
}

// A header line starts a new measurement group; everything else is a raw sample.
fn is_header(line: &str) -> bool {
    line.chars().next().map_or(false, |c| c.is_alphabetic())
}

/// One x value per header line, in file order. The x value is the second
/// whitespace-delimited token after the first ':'.
pub fn extract_x_axis(input: &str) -> Result<Vec<i64>, ParseError> {
    let mut x_axis = Vec::new();
    for line in input.lines() {
        if !is_header(line) {
            continue;
        }
        let rest = line
            .split_once(':')
            .ok_or_else(|| ParseError::InvalidInput(format!("Header without ':': {}", line)))?
            .1;
        let x_point = rest.split_whitespace().nth(1).ok_or_else(|| {
            ParseError::InvalidInput(format!("Header without an x value: {}", line))
        })?;
        x_axis.push(x_point.parse()?);
    }
    Ok(x_axis)
}

/// One y value per non-empty measurement group: the mean of the group's
/// samples, scaled from ops/ms to thousands of ops/ms.
pub fn extract_y_axis(input: &str) -> Result<Vec<f64>, ParseError> {
    let mut y_axis = Vec::new();
    let mut samples: Vec<f64> = Vec::new();
    for line in input.lines() {
        if is_header(line) {
            // Consecutive headers leave nothing to average; emit no point.
            if !samples.is_empty() {
                y_axis.push(mean_in_thousands(&samples));
                samples.clear();
            }
        } else {
            samples.push(line.trim().parse()?);
        }
    }
    if !samples.is_empty() {
        y_axis.push(mean_in_thousands(&samples));
    }
    Ok(y_axis)
}

fn mean_in_thousands(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64 / 1000.0
}

#[test]
fn one_group_is_averaged_and_scaled() {
    let input = "Threads Num: run 10 iters\n2.0\n4.0\n6.0\n";
    assert_eq!(extract_y_axis(input).unwrap(), vec![0.004]);
}

#[test]
fn groups_are_emitted_in_file_order() {
    let input = "label: foo 10 bar\n1.0\n3.0\nlabel: foo 20 bar\n2000.0\n";
    assert_eq!(extract_x_axis(input).unwrap(), vec![10, 20]);
    assert_eq!(extract_y_axis(input).unwrap(), vec![0.002, 2.0]);
}

#[test]
fn consecutive_headers_emit_no_point() {
    let input = "a: run 1 x\nb: run 2 x\n5.0\n";
    assert_eq!(extract_x_axis(input).unwrap(), vec![1, 2]);
    assert_eq!(extract_y_axis(input).unwrap(), vec![0.005]);
}

#[test]
fn x_axis_has_one_value_per_header() {
    let input = "a: run 1 x\n7.0\n8.0\nb: run 2 x\nc: run 3 x\n9.0\n";
    assert_eq!(extract_x_axis(input).unwrap(), vec![1, 2, 3]);
}

#[test]
fn trailing_samples_are_flushed() {
    let input = "a: run 1 x\n1.0\nb: run 2 x\n3000.0\n5000.0";
    assert_eq!(extract_y_axis(input).unwrap(), vec![0.001, 4.0]);
}

#[test]
fn empty_input_yields_empty_axes() {
    assert_eq!(extract_x_axis("").unwrap(), Vec::<i64>::new());
    assert_eq!(extract_y_axis("").unwrap(), Vec::<f64>::new());
}

#[test]
fn header_without_colon_fails() {
    assert!(extract_x_axis("label foo 10 bar\n").is_err());
}

#[test]
fn header_without_second_token_fails() {
    assert!(extract_x_axis("label: 10\n").is_err());
}

#[test]
fn non_numeric_sample_fails() {
    assert!(extract_y_axis("a: run 1 x\n12x4\n").is_err());
}

#[test]
fn parse_reads_both_axes_from_a_file() {
    use std::io::Write;

    let path = std::env::temp_dir().join("bench_graph_parse_test.txt");
    let mut file = fs::File::create(&path).unwrap();
    write!(file, "label: foo 10 bar\n1.0\n3.0\nlabel: foo 20 bar\n2000.0\n").unwrap();

    let series = parse(path.to_str().unwrap()).unwrap();
    assert_eq!(series.x, vec![10, 20]);
    assert_eq!(series.y, vec![0.002, 2.0]);

    fs::remove_file(&path).unwrap();
}
