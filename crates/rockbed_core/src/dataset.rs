//! Immutable, indexed collection of simulation records
//!
//! The dataset is built once from the loader's output and then only read.
//! Alongside the records it keeps, for every dimension, a map from each
//! distinct value to the ascending list of record positions holding it, so
//! cascading filters intersect short index lists instead of rescanning the
//! table on every configuration change.

use rustc_hash::FxHashMap;

use crate::model::{Dimension, FixedDimensions, Record};

type ValueIndex = FxHashMap<String, Vec<usize>>;

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
    index: [ValueIndex; Dimension::COUNT],
}

impl Dataset {
    /// Take ownership of records in table order
    ///
    /// Records are trusted to have all seven dimensions set; rows that do not
    /// are the loader's responsibility to drop.
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        let mut index: [ValueIndex; Dimension::COUNT] =
            std::array::from_fn(|_| FxHashMap::default());

        for (position, record) in records.iter().enumerate() {
            for dim in Dimension::ALL {
                index[dim.index()]
                    .entry(record.value(dim).to_string())
                    .or_default()
                    .push(position);
            }
        }

        tracing::debug!(
            records = records.len(),
            locations = index[Dimension::Location.index()].len(),
            "dataset indexed"
        );

        Self { records, index }
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Record> {
        self.records.get(position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Ascending positions of the records whose `dim` equals `value`
    #[must_use]
    pub fn positions_with(&self, dim: Dimension, value: &str) -> &[usize] {
        self.index[dim.index()]
            .get(value)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every distinct value of `dim`, sorted ascending
    #[must_use]
    pub fn distinct_values(&self, dim: Dimension) -> Vec<String> {
        let mut values: Vec<String> = self.index[dim.index()].keys().cloned().collect();
        values.sort_unstable();
        values
    }

    /// Ascending positions of the records consistent with every fixed dimension
    ///
    /// The result does not depend on the order dimensions were fixed in.
    #[must_use]
    pub fn matching_positions(&self, fixed: &FixedDimensions) -> Vec<usize> {
        let mut lists: Vec<&[usize]> = fixed
            .iter()
            .map(|(dim, value)| self.positions_with(dim, value))
            .collect();

        if lists.is_empty() {
            return (0..self.records.len()).collect();
        }

        lists.sort_by_key(|list| list.len());
        let (smallest, rest) = lists.split_at(1);

        smallest[0]
            .iter()
            .copied()
            .filter(|position| rest.iter().all(|list| list.binary_search(position).is_ok()))
            .collect()
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
