//! Per-producer win history, built fresh for each aggregation.

/// One award win credited to a producer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProducerWin {
    pub year: i32,
    pub title: String,
}

/// A producer and every win credited to them, in the order the wins were seen.
///
/// Identity is the exact name string. No case, whitespace or punctuation
/// folding happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProducerRecord {
    pub name: String,
    pub wins: Vec<ProducerWin>,
}

impl ProducerRecord {
    /// A record holding a single win.
    pub fn new(name: impl Into<String>, year: i32, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            wins: vec![ProducerWin {
                year,
                title: title.into(),
            }],
        }
    }

    /// The same producer with one more win appended.
    pub fn with_win(mut self, year: i32, title: impl Into<String>) -> Self {
        self.push_win(year, title);
        self
    }

    pub(crate) fn push_win(&mut self, year: i32, title: impl Into<String>) {
        self.wins.push(ProducerWin {
            year,
            title: title.into(),
        });
    }

    /// Win years in ascending order.
    pub fn win_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.wins.iter().map(|w| w.year).collect();
        years.sort_unstable();
        years
    }
}
