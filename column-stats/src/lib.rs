/*! Streaming summary statistics for the columns of a table.

Each column gets an [`Accumulator`] chosen by its declared [`Kind`].  Cells
are fed in one at a time, in line order, and once the input is exhausted
the accumulator produces a [`Summary`].

```
# use column_stats::*;
let mut acc = Accumulator::new(Kind::Numeric);
for (line, cell) in ["1", "2", "", ""].iter().enumerate() {
    acc.update(cell, line as u64 + 2).unwrap();
}
match acc.summarize() {
    Summary::Numeric(x) => {
        assert_eq!(x.count, 4);
        assert_eq!(x.null_count, 2);
        assert_eq!(x.avg, Some(1.5));
    }
    Summary::Text(_) => unreachable!(),
}
```

*/

mod numeric;
mod text;

pub use numeric::*;
pub use text::*;

use serde::Serialize;
use std::fmt;

/// The declared type of a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Numeric,
    Text,
}

impl Kind {
    /// Interprets the text inside a header annotation, eg. `number` for
    /// `price(number)`.  Only an exact `number` is numeric.
    pub fn from_annotation(annotation: Option<&str>) -> Kind {
        match annotation {
            Some("number") => Kind::Numeric,
            _ => Kind::Text,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Kind::Numeric => f.write_str("numeric"),
            Kind::Text => f.write_str("text"),
        }
    }
}

#[derive(Clone, Debug)]
pub enum Accumulator {
    Numeric(NumericStats),
    Text(TextStats),
}

impl Accumulator {
    pub fn new(kind: Kind) -> Accumulator {
        match kind {
            Kind::Numeric => Accumulator::Numeric(NumericStats::new()),
            Kind::Text => Accumulator::Text(TextStats::new()),
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Accumulator::Numeric(_) => Kind::Numeric,
            Accumulator::Text(_) => Kind::Text,
        }
    }

    /// Feeds one (already trimmed) cell.  `line` is the 1-based line the
    /// cell came from, and is only used for error reporting.
    pub fn update(&mut self, cell: &str, line: u64) -> Result<(), Error> {
        match self {
            Accumulator::Numeric(x) => x.update(cell, line),
            Accumulator::Text(x) => {
                x.update(cell);
                Ok(())
            }
        }
    }

    pub fn summarize(&self) -> Summary {
        match self {
            Accumulator::Numeric(x) => Summary::Numeric(x.summarize()),
            Accumulator::Text(x) => Summary::Text(x.summarize()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Summary {
    Numeric(NumericSummary),
    Text(TextSummary),
}

impl Summary {
    pub fn count(&self) -> usize {
        match self {
            Summary::Numeric(x) => x.count,
            Summary::Text(x) => x.count,
        }
    }

    pub fn null_count(&self) -> usize {
        match self {
            Summary::Numeric(x) => x.null_count,
            Summary::Text(x) => x.null_count,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    BadNumber { text: String, line: u64 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::BadNumber { text, line } => {
                write!(f, "Failed to parse supposed float '{}' at line {}", text, line)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_annotation() {
        assert_eq!(Kind::from_annotation(Some("number")), Kind::Numeric);
        assert_eq!(Kind::from_annotation(Some("Number")), Kind::Text);
        assert_eq!(Kind::from_annotation(Some(" number")), Kind::Text);
        assert_eq!(Kind::from_annotation(Some("text")), Kind::Text);
        assert_eq!(Kind::from_annotation(None), Kind::Text);
    }

    #[test]
    fn dispatch_by_kind() {
        let mut num = Accumulator::new(Kind::Numeric);
        let mut txt = Accumulator::new(Kind::Text);
        assert_eq!(num.kind(), Kind::Numeric);
        assert_eq!(txt.kind(), Kind::Text);

        // The same cell is fatal for one kind and fine for the other
        assert_eq!(
            num.update("bad", 2),
            Err(Error::BadNumber {
                text: "bad".into(),
                line: 2
            })
        );
        assert_eq!(txt.update("bad", 2), Ok(()));

        let summary = txt.summarize();
        assert_eq!(summary.count(), 1);
        assert_eq!(summary.null_count(), 0);
        assert!(matches!(summary, Summary::Text(_)));
    }

    #[test]
    fn error_message() {
        let e = Error::BadNumber {
            text: "bad".into(),
            line: 2,
        };
        assert_eq!(e.to_string(), "Failed to parse supposed float 'bad' at line 2");
    }

    #[test]
    fn summarize_is_repeatable() {
        let mut acc = Accumulator::new(Kind::Text);
        for cell in ["b", "a", "", "ccc"] {
            acc.update(cell, 2).unwrap();
        }
        assert_eq!(acc.summarize(), acc.summarize());
    }
}
