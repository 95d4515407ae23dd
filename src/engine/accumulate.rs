//! Group winning movies by producer.

use std::collections::HashMap;

use crate::model::{Movie, ProducerRecord};

/// Build one win history per distinct producer name.
///
/// Records come back in first-seen order. Every `(producer, movie)` credit
/// adds one win, so a name listed twice on the same movie gets two wins
/// for it.
pub fn accumulate_producers<'a, I>(winners: I) -> Vec<ProducerRecord>
where
    I: IntoIterator<Item = &'a Movie>,
{
    let mut records: Vec<ProducerRecord> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for movie in winners {
        for name in &movie.producers {
            match index.get(name.as_str()) {
                Some(&slot) => records[slot].push_win(movie.year, &movie.title),
                None => {
                    index.insert(name.as_str(), records.len());
                    records.push(ProducerRecord::new(name, movie.year, &movie.title));
                }
            }
        }
    }

    records
}
