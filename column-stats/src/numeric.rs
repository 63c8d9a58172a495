use crate::Error;
use serde::Serialize;

/// Running statistics for a numeric column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumericStats {
    /// every cell seen, including nulls
    count: usize,
    null_count: usize,
    total: f64,
    least: f64,
    most: f64,
}

impl Default for NumericStats {
    fn default() -> NumericStats {
        NumericStats {
            count: 0,
            null_count: 0,
            total: 0.,
            least: f64::INFINITY,
            most: f64::NEG_INFINITY,
        }
    }
}

impl NumericStats {
    pub fn new() -> NumericStats {
        NumericStats::default()
    }

    /// An empty cell counts as a null.  Anything else must parse as an
    /// `f64`, or we return an error naming the cell and its line.
    pub fn update(&mut self, cell: &str, line: u64) -> Result<(), Error> {
        self.count += 1;
        if cell.is_empty() {
            self.null_count += 1;
            return Ok(());
        }
        let x = cell.parse::<f64>().map_err(|_| Error::BadNumber {
            text: cell.to_string(),
            line,
        })?;
        self.total += x;
        self.least = nan_or(self.least, x, f64::min);
        self.most = nan_or(self.most, x, f64::max);
        Ok(())
    }

    pub fn summarize(&self) -> NumericSummary {
        let n = self.count - self.null_count;
        // With no non-null values least/most are still infinite and the
        // average would be 0/0
        let seen = |x: f64| if n == 0 { None } else { Some(x) };
        NumericSummary {
            count: self.count,
            null_count: self.null_count,
            min: seen(self.least),
            max: seen(self.most),
            total: self.total,
            avg: seen(self.total / n as f64),
        }
    }
}

/// Like `f64::min`/`f64::max`, but a NaN on either side wins
fn nan_or(a: f64, b: f64, f: fn(f64, f64) -> f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        f(a, b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct NumericSummary {
    pub count: usize,
    pub null_count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub total: f64,
    pub avg: Option<f64>,
}
