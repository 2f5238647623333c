use indexmap::IndexMap;

/// Occurrence count per normalized word.
///
/// Words are kept in the order they were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable(IndexMap<String, usize>);

impl FrequencyTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, word: String) {
        *self.0.entry(word).or_insert(0) += 1;
    }

    #[must_use]
    pub fn count(&self, word: &str) -> usize {
        self.0.get(word).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts, i.e. the number of counted words.
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(word, count)| (word.as_str(), *count))
    }
}

impl FromIterator<String> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = String>>(words: I) -> Self {
        words.into_iter().fold(Self::new(), |mut table, word| {
            table.add(word);
            table
        })
    }
}

impl IntoIterator for FrequencyTable {
    type Item = (String, usize);
    type IntoIter = indexmap::map::IntoIter<String, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
