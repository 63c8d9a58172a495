use anyhow::*;
use column_stats::{Extreme, Summary};
use serde_json::json;
use std::fmt;
use std::io::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

/// Writes the report for one column.  In text mode that's a block ending
/// in a blank line; in JSON mode it's a single line.
pub fn write_column(
    mut out: impl Write,
    name: &str,
    summary: &Summary,
    format: Format,
) -> Result<()> {
    match format {
        Format::Text => {
            writeln!(out, "{}:", name)?;
            writeln!(out, "{}", PrettySummary(summary))?;
        }
        Format::Json => {
            let mut obj = serde_json::to_value(summary)?;
            if let Some(map) = obj.as_object_mut() {
                map.insert("field".into(), json!(name));
            }
            writeln!(out, "{}", obj)?;
        }
    }
    Ok(())
}

pub struct PrettySummary<'a>(pub &'a Summary);

impl fmt::Display for PrettySummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, " count:      {}", self.0.count())?;
        writeln!(f, " null_count: {}", self.0.null_count())?;
        match self.0 {
            Summary::Numeric(x) => {
                writeln!(f, " min:        {}", Fixed(x.min, 3))?;
                writeln!(f, " max:        {}", Fixed(x.max, 3))?;
                writeln!(f, " total:      {}", Fixed(Some(x.total), 3))?;
                writeln!(f, " avg:        {}", Fixed(x.avg, 3))
            }
            Summary::Text(x) => {
                writeln!(f, " count(shortest str): {}", PrettyExtreme(&x.shortest))?;
                writeln!(f, " count(longest str):  {}", PrettyExtreme(&x.longest))?;
                writeln!(f, " average length:      {}", Fixed(x.avg_len, 2))
            }
        }
    }
}

/// A float with a fixed number of decimals, or "N/A"
struct Fixed(Option<f64>, usize);

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(x) => write!(f, "{:.*}", self.1, x),
            None => f.write_str("N/A"),
        }
    }
}

struct PrettyExtreme<'a>(&'a Option<Extreme>);

impl fmt::Display for PrettyExtreme<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(x) => write!(f, "{} {}", x.count, x.value),
            None => f.write_str("N/A"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use column_stats::{NumericSummary, TextSummary};

    fn render(summary: &Summary, format: Format) -> String {
        let mut out = vec![];
        write_column(&mut out, "col", summary, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn numeric() {
        let summary = Summary::Numeric(NumericSummary {
            count: 4,
            null_count: 2,
            min: Some(1.),
            max: Some(2.),
            total: 3.,
            avg: Some(1.5),
        });
        assert_eq!(
            render(&summary, Format::Text),
            "col:
 count:      4
 null_count: 2
 min:        1.000
 max:        2.000
 total:      3.000
 avg:        1.500

"
        );
    }

    #[test]
    fn rounding() {
        assert_eq!(Fixed(Some(2. / 3.), 3).to_string(), "0.667");
        assert_eq!(Fixed(Some(-1234.5678), 2).to_string(), "-1234.57");
        assert_eq!(Fixed(Some(1e21), 1).to_string(), "1000000000000000000000.0");
        assert_eq!(Fixed(None, 3).to_string(), "N/A");
    }

    #[test]
    fn degenerate() {
        let summary = Summary::Numeric(NumericSummary {
            count: 1,
            null_count: 1,
            min: None,
            max: None,
            total: 0.,
            avg: None,
        });
        let out = render(&summary, Format::Text);
        assert!(out.contains(" min:        N/A\n"));
        assert!(out.contains(" total:      0.000\n"));
        assert!(out.contains(" avg:        N/A\n"));

        let summary = Summary::Text(TextSummary {
            count: 2,
            null_count: 2,
            shortest: None,
            longest: None,
            avg_len: None,
        });
        assert_eq!(
            render(&summary, Format::Text),
            "col:
 count:      2
 null_count: 2
 count(shortest str): N/A
 count(longest str):  N/A
 average length:      N/A

"
        );
    }

    #[test]
    fn json() {
        let summary = Summary::Text(TextSummary {
            count: 3,
            null_count: 1,
            shortest: Some(Extreme {
                count: 1,
                value: "a".into(),
            }),
            longest: Some(Extreme {
                count: 1,
                value: "bcd".into(),
            }),
            avg_len: Some(2.),
        });
        let out = render(&summary, Format::Json);
        assert!(out.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            json!({
                "field": "col",
                "kind": "text",
                "count": 3,
                "null_count": 1,
                "shortest": { "count": 1, "value": "a" },
                "longest": { "count": 1, "value": "bcd" },
                "avg_len": 2.0,
            })
        );
    }
}
