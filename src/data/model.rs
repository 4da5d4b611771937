use indexmap::IndexMap;
use rand::Rng;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    #[error("cannot remove the last remaining entry")]
    LastEntry,
    #[error("entry index {index} out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
}

// ---------------------------------------------------------------------------
// Dataset – a non-empty sequence of values
// ---------------------------------------------------------------------------

/// Ordered numeric values. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    values: Vec<f64>,
}

impl Dataset {
    /// Build a dataset from `values`; `None` when empty.
    pub fn new(values: Vec<f64>) -> Option<Self> {
        if values.is_empty() {
            None
        } else {
            Some(Dataset { values })
        }
    }

    /// A fresh dataset holding a single zero.
    pub fn zero() -> Self {
        Dataset { values: vec![0.0] }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Remove the entry at `index`, refusing to empty the dataset.
    pub fn remove(&mut self, index: usize) -> Result<f64, DatasetError> {
        self.check_index(index)?;
        if self.values.len() == 1 {
            return Err(DatasetError::LastEntry);
        }
        Ok(self.values.remove(index))
    }

    pub fn set(&mut self, index: usize, value: f64) -> Result<(), DatasetError> {
        self.check_index(index)?;
        self.values[index] = value;
        Ok(())
    }

    pub fn has_negative(&self) -> bool {
        self.values.iter().any(|&v| v < 0.0)
    }

    fn check_index(&self, index: usize) -> Result<(), DatasetError> {
        if index < self.values.len() {
            Ok(())
        } else {
            Err(DatasetError::IndexOutOfRange {
                index,
                len: self.values.len(),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// DatasetCollection – named datasets in insertion order
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct DatasetCollection {
    datasets: IndexMap<String, Dataset>,
}

impl DatasetCollection {
    /// The five example datasets available at startup.
    pub fn seeded<R: Rng>(rng: &mut R) -> Self {
        let random: Vec<f64> = (0..20).map(|_| rng.gen_range(-100.0..100.0)).collect();

        let seeds: [(&str, Vec<f64>); 5] = [
            ("quadratic", vec![0.1, 1.0, 4.0, 9.0, 16.0]),
            ("negative quadratic", vec![-0.1, -1.0, -4.0, -9.0, -16.0]),
            ("alternating", vec![-1.0, 3.0, -1.0, 3.0, -1.0, 3.0]),
            ("random", random),
            (
                "inflation '90-'22",
                vec![
                    4.8, 5.6, 1.5, 1.9, 0.2, 2.1, 1.6, 1.6, 1.0, 1.7, 2.7, 2.5, 2.3, 2.8, 1.9,
                    2.2, 2.0, 2.1, 2.4, 0.3, 1.8, 2.9, 1.5, 0.9, 1.9, 1.1, 1.4, 1.6, 2.3, 1.9,
                    0.7, 3.4, 6.8,
                ],
            ),
        ];

        let datasets = seeds
            .into_iter()
            .filter_map(|(name, values)| Some((name.to_string(), Dataset::new(values)?)))
            .collect();
        DatasetCollection { datasets }
    }

    pub fn get(&self, name: &str) -> Option<&Dataset> {
        self.datasets.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Dataset> {
        self.datasets.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.datasets.contains_key(name)
    }

    /// Insert a new dataset at the end. Returns `false` if the name is taken.
    pub fn insert(&mut self, name: String, dataset: Dataset) -> bool {
        if self.datasets.contains_key(&name) {
            return false;
        }
        self.datasets.insert(name, dataset);
        true
    }

    /// Dataset names in display order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.datasets.keys().map(String::as_str)
    }

    pub fn first_name(&self) -> Option<&str> {
        self.datasets.keys().next().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empty_dataset_is_rejected() {
        assert!(Dataset::new(Vec::new()).is_none());
    }

    #[test]
    fn last_entry_cannot_be_removed() {
        let mut ds = Dataset::new(vec![1.0, 2.0]).unwrap();
        assert_eq!(ds.remove(0), Ok(1.0));
        assert_eq!(ds.remove(0), Err(DatasetError::LastEntry));
        assert_eq!(ds.values(), &[2.0]);
    }

    #[test]
    fn out_of_range_index() {
        let mut ds = Dataset::zero();
        assert_eq!(
            ds.set(3, 1.0),
            Err(DatasetError::IndexOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(ds.values(), &[0.0]);
    }

    #[test]
    fn seeded_collection_order_and_random_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let coll = DatasetCollection::seeded(&mut rng);
        let names: Vec<&str> = coll.names().collect();
        assert_eq!(
            names,
            vec![
                "quadratic",
                "negative quadratic",
                "alternating",
                "random",
                "inflation '90-'22"
            ]
        );
        let random = coll.get("random").unwrap();
        assert_eq!(random.values().len(), 20);
        assert!(random.values().iter().all(|v| (-100.0..100.0).contains(v)));
        assert_eq!(coll.get("inflation '90-'22").unwrap().values().len(), 33);
    }

    #[test]
    fn seeding_is_reproducible_for_a_fixed_seed() {
        let a = DatasetCollection::seeded(&mut StdRng::seed_from_u64(42));
        let b = DatasetCollection::seeded(&mut StdRng::seed_from_u64(42));
        assert_eq!(a.get("random"), b.get("random"));
    }

    #[test]
    fn duplicate_insert_is_refused() {
        let mut coll = DatasetCollection::default();
        assert!(coll.insert("a".into(), Dataset::zero()));
        assert!(!coll.insert("a".into(), Dataset::new(vec![5.0]).unwrap()));
        assert_eq!(coll.names().count(), 1);
        assert_eq!(coll.get("a").unwrap().values(), &[0.0]);
    }
}
