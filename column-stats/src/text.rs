use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Exact occurrence counts for every distinct value in a text column.
///
/// The empty string is the null value.  Memory grows with the number of
/// distinct values; nothing is ever evicted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextStats {
    counts: BTreeMap<String, usize>,
}

impl TextStats {
    pub fn new() -> TextStats {
        TextStats::default()
    }

    pub fn update(&mut self, cell: &str) {
        if let Some(n) = self.counts.get_mut(cell) {
            *n += 1;
        } else {
            self.counts.insert(cell.to_string(), 1);
        }
    }

    /// The number of times `value` has been seen
    pub fn occurrences(&self, value: &str) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn summarize(&self) -> TextSummary {
        let count = self.counts.values().sum::<usize>();
        let null_count = self.occurrences("");

        // The map iterates in ascending order, and `min_by_key` keeps the
        // first of several equal keys, so ties go to the alphabetically
        // smallest value.
        let non_null = || {
            self.counts
                .iter()
                .filter(|(s, _)| !s.is_empty())
                .map(|(s, &n)| (s, s.chars().count(), n))
        };
        let shortest = non_null().min_by_key(|&(_, len, _)| len);
        let longest = non_null().min_by_key(|&(_, len, _)| Reverse(len));
        let len_total = non_null().map(|(_, len, n)| len * n).sum::<usize>();

        let extreme = |(s, _, n): (&String, usize, usize)| Extreme {
            count: n,
            value: s.clone(),
        };
        let non_null_count = count - null_count;
        TextSummary {
            count,
            null_count,
            shortest: shortest.map(extreme),
            longest: longest.map(extreme),
            avg_len: if non_null_count == 0 {
                None
            } else {
                Some(len_total as f64 / non_null_count as f64)
            },
        }
    }
}

impl<'a> Extend<&'a str> for TextStats {
    fn extend<T: IntoIterator<Item = &'a str>>(&mut self, iter: T) {
        for cell in iter {
            self.update(cell);
        }
    }
}

impl<'a> FromIterator<&'a str> for TextStats {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> TextStats {
        let mut stats = TextStats::new();
        stats.extend(iter);
        stats
    }
}

/// The shortest or longest value of a column, with its own occurrence count
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Extreme {
    pub count: usize,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextSummary {
    pub count: usize,
    pub null_count: usize,
    pub shortest: Option<Extreme>,
    pub longest: Option<Extreme>,
    /// Average length in characters over the non-null cells
    pub avg_len: Option<f64>,
}
