use crate::frequency::FrequencyTable;

/// Number of words shown in the histogram.
pub const TOP_N: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub word: String,
    pub count: usize,
}

impl RankedEntry {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Returns at most `limit` entries sorted by count in descending order.
///
/// Words with equal counts keep the order in which they were first seen.
#[must_use]
pub fn rank(table: FrequencyTable, limit: usize) -> Vec<RankedEntry> {
    let mut entries: Vec<_> = table
        .into_iter()
        .map(|(word, count)| RankedEntry { word, count })
        .collect();
    // stable: equal counts stay in first-seen order
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(limit);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::split_text_into_words;

    fn table(text: &str) -> FrequencyTable {
        split_text_into_words(text).collect()
    }

    #[test]
    fn rank_by_descending_count() {
        let ranked = rank(table("The cat sat. The CAT sat on the mat!"), TOP_N);
        assert_eq!(
            ranked,
            vec![
                RankedEntry::new("the", 3),
                RankedEntry::new("cat", 2),
                RankedEntry::new("sat", 2),
                RankedEntry::new("on", 1),
                RankedEntry::new("mat", 1),
            ]
        );
    }

    #[test]
    fn truncate_to_limit() {
        let text = (0..50)
            .flat_map(|i| std::iter::repeat(format!("w{i}")).take(i + 1))
            .collect::<Vec<_>>()
            .join(" ");
        let ranked = rank(table(&text), TOP_N);
        assert_eq!(ranked.len(), TOP_N);
        assert_eq!(ranked[0], RankedEntry::new("w49", 50));
        assert_eq!(ranked[TOP_N - 1], RankedEntry::new("w30", 31));
        assert!(ranked.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn return_all_words_if_less_than_limit() {
        let ranked = rank(table("c b a a b a"), TOP_N);
        assert_eq!(ranked.len(), 3);
        assert_eq!(
            ranked,
            vec![
                RankedEntry::new("a", 3),
                RankedEntry::new("b", 2),
                RankedEntry::new("c", 1),
            ]
        );
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let ranked = rank(table("zeta alpha mu alpha zeta mu"), TOP_N);
        let words: Vec<_> = ranked.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["zeta", "alpha", "mu"]);
    }

    #[test]
    fn rank_empty_table() {
        assert!(rank(FrequencyTable::new(), TOP_N).is_empty());
    }
}
