//! Textual description of a clipping scene.
//!
//! The first line holds the amount N of segments, followed by N lines of four numbers
//! (`x1 y1 x2 y2`) and a last line with the clip window (`xmin ymin xmax ymax`). Numbers are
//! separated by whitespace and anything after the window line is ignored.

use std::str::FromStr;

use num_traits::Float;
use thiserror::Error;

use crate::cartesian::{Segment, Window};

/// The reasons why an input text cannot be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid input: it must include the number of segments and the clip window")]
    TooShort,
    #[error("invalid number of segments: the first line must hold a positive integer")]
    InvalidCount,
    #[error(
        "invalid input: {expected} lines are required to describe every segment and the clip window, got {found}"
    )]
    MissingLines { expected: usize, found: usize },
    #[error("invalid coordinates at line {line}: 4 numbers are required")]
    InvalidSegment { line: usize },
    #[error("invalid clip window coordinates: 4 numbers are required")]
    InvalidWindow,
}

/// The segments and window described by an input text.
#[derive(Debug, Clone, PartialEq)]
pub struct Input<T = f64> {
    pub segments: Vec<Segment<T>>,
    pub window: Window<T>,
}

impl<T> FromStr for Input<T>
where
    T: Float + FromStr,
{
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = input.trim().lines().collect();
        if lines.len() < 2 {
            return Err(ParseError::TooShort);
        }

        let count = lines[0]
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|&count| count > 0)
            .ok_or(ParseError::InvalidCount)?;

        let expected = count.checked_add(2).ok_or(ParseError::InvalidCount)?;
        if lines.len() < expected {
            return Err(ParseError::MissingLines {
                expected,
                found: lines.len(),
            });
        }

        let segments = lines[1..expected - 1]
            .iter()
            .enumerate()
            .map(|(index, line)| {
                quadruple(line)
                    .map(Segment::from)
                    .ok_or(ParseError::InvalidSegment { line: index + 2 })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let window = quadruple(lines[expected - 1])
            .map(Window::from)
            .ok_or(ParseError::InvalidWindow)?;

        Ok(Self { segments, window })
    }
}

/// Returns the four numbers in the given line, if it holds exactly four numbers.
fn quadruple<T>(line: &str) -> Option<[T; 4]>
where
    T: Float + FromStr,
{
    let numbers = line
        .split_whitespace()
        .map(|word| word.parse::<T>().ok().filter(|number| !number.is_nan()))
        .collect::<Option<Vec<T>>>()?;

    numbers.try_into().ok()
}

#[cfg(test)]
mod tests {
    use crate::{
        cartesian::{Segment, Window},
        input::{Input, ParseError},
    };

    #[test]
    fn parse_input() {
        struct Test {
            name: &'static str,
            input: &'static str,
            want: Result<Input<f64>, ParseError>,
        }

        vec![
            Test {
                name: "single segment",
                input: "1\n-5 5 15 5\n0 0 10 10",
                want: Ok(Input {
                    segments: vec![Segment::from([-5., 5., 15., 5.])],
                    window: Window::from([0., 0., 10., 10.]),
                }),
            },
            Test {
                name: "surrounding blank space and carriage returns",
                input: "\n  2\r\n1 2 3 4\r\n-1.5   2e1 3 4\r\n0 0 10 10\r\n\n",
                want: Ok(Input {
                    segments: vec![
                        Segment::from([1., 2., 3., 4.]),
                        Segment::from([-1.5, 20., 3., 4.]),
                    ],
                    window: Window::from([0., 0., 10., 10.]),
                }),
            },
            Test {
                name: "trailing lines are ignored",
                input: "1\n1 2 3 4\n0 0 10 10\nwhatever",
                want: Ok(Input {
                    segments: vec![Segment::from([1., 2., 3., 4.])],
                    window: Window::from([0., 0., 10., 10.]),
                }),
            },
            Test {
                name: "single line",
                input: "1",
                want: Err(ParseError::TooShort),
            },
            Test {
                name: "zero segments",
                input: "0\n0 0 10 10",
                want: Err(ParseError::InvalidCount),
            },
            Test {
                name: "negative amount of segments",
                input: "-1\n0 0 10 10",
                want: Err(ParseError::InvalidCount),
            },
            Test {
                name: "amount of segments is not a number",
                input: "two\n1 2 3 4\n0 0 10 10",
                want: Err(ParseError::InvalidCount),
            },
            Test {
                name: "amount of segments at the integer limit",
                input: "18446744073709551615\n1 2 3 4\n0 0 10 10",
                want: Err(ParseError::InvalidCount),
            },
            Test {
                name: "missing window",
                input: "2\n1 2 3 4\n0 0 10 10",
                want: Err(ParseError::MissingLines {
                    expected: 4,
                    found: 3,
                }),
            },
            Test {
                name: "segment with three numbers",
                input: "2\n1 2 3 4\n1 2 3\n0 0 10 10",
                want: Err(ParseError::InvalidSegment { line: 3 }),
            },
            Test {
                name: "segment with a word",
                input: "1\n1 2 three 4\n0 0 10 10",
                want: Err(ParseError::InvalidSegment { line: 2 }),
            },
            Test {
                name: "segment with not a number",
                input: "1\n1 2 NaN 4\n0 0 10 10",
                want: Err(ParseError::InvalidSegment { line: 2 }),
            },
            Test {
                name: "window with five numbers",
                input: "1\n1 2 3 4\n0 0 10 10 10",
                want: Err(ParseError::InvalidWindow),
            },
        ]
        .into_iter()
        .for_each(|test| {
            let got = test.input.parse::<Input<f64>>();
            assert_eq!(
                got, test.want,
                "{}: got input = {got:?}, want = {:?}",
                test.name, test.want
            );
        });
    }
}
