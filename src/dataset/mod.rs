//! Dataset manager: the working array and its reset snapshot
//!
//! The manager keeps two copies of the data:
//! - `working`: mutated in place by the step engine
//! - `original`: the values captured at the last generate/load, used by [`DatasetManager::reset`]
//!
//! `original` is only ever replaced as a whole, so a reset always restores
//! exactly what the last generate or load produced.

use crate::engine::errors::EngineError;
use rand::Rng;
use std::ops::RangeInclusive;
use tracing::info;

#[derive(Debug, Clone)]
pub struct DatasetManager {
    working: Vec<i32>,
    original: Vec<i32>,
    max_value: i32,
    value_range: RangeInclusive<i32>,
}

impl DatasetManager {
    /// Create an empty manager producing values in `value_range`
    pub fn new(value_range: RangeInclusive<i32>) -> Result<Self, EngineError> {
        if value_range.is_empty() {
            return Err(EngineError::InvalidRange {
                min: *value_range.start(),
                max: *value_range.end(),
            });
        }

        Ok(DatasetManager {
            working: Vec::new(),
            original: Vec::new(),
            max_value: 0,
            value_range,
        })
    }

    /// Fill the dataset with `size` random values from a fresh random source
    pub fn generate(&mut self, size: usize) -> Result<&[i32], EngineError> {
        self.generate_with(size, &mut rand::thread_rng())
    }

    /// Fill the dataset with `size` random values drawn from `rng`
    pub fn generate_with<R: Rng + ?Sized>(
        &mut self,
        size: usize,
        rng: &mut R,
    ) -> Result<&[i32], EngineError> {
        if size == 0 {
            return Err(EngineError::InvalidSize { requested: size });
        }

        let values = (0..size)
            .map(|_| rng.gen_range(self.value_range.clone()))
            .collect();
        self.install(values);
        info!(size, max = self.max_value, "generated dataset");
        Ok(&self.working)
    }

    /// Install caller-provided values as both the working and the original data
    pub fn load(&mut self, values: Vec<i32>) -> Result<&[i32], EngineError> {
        if values.is_empty() {
            return Err(EngineError::InvalidSize { requested: 0 });
        }

        self.install(values);
        info!(size = self.working.len(), "loaded dataset");
        Ok(&self.working)
    }

    /// Restore the working array from the snapshot taken at the last generate/load
    pub fn reset(&mut self) {
        if self.original.is_empty() {
            return;
        }
        self.working.clone_from(&self.original);
    }

    fn install(&mut self, values: Vec<i32>) {
        self.max_value = values.iter().copied().max().unwrap_or(0);
        self.original = values.clone();
        self.working = values;
    }

    pub fn working(&self) -> &[i32] {
        &self.working
    }

    pub fn working_mut(&mut self) -> &mut [i32] {
        &mut self.working
    }

    pub fn original(&self) -> &[i32] {
        &self.original
    }

    pub fn len(&self) -> usize {
        self.working.len()
    }

    pub fn is_empty(&self) -> bool {
        self.working.is_empty()
    }

    /// Largest value of the current dataset (0 when empty), used for bar scaling
    pub fn max_value(&self) -> i32 {
        self.max_value
    }

    pub fn value_range(&self) -> RangeInclusive<i32> {
        self.value_range.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_respects_size_and_range() {
        let mut dataset = DatasetManager::new(10..=200).unwrap();
        let values = dataset.generate(100).unwrap().to_vec();

        assert_eq!(values.len(), 100);
        assert!(values.iter().all(|v| (10..=200).contains(v)));
        assert_eq!(dataset.original(), values.as_slice());
        assert_eq!(dataset.max_value(), *values.iter().max().unwrap());
    }

    #[test]
    fn test_generate_zero_is_rejected() {
        let mut dataset = DatasetManager::new(10..=200).unwrap();
        assert_eq!(
            dataset.generate(0),
            Err(EngineError::InvalidSize { requested: 0 })
        );
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_generate_with_seed_is_reproducible() {
        let mut a = DatasetManager::new(1..=9).unwrap();
        let mut b = DatasetManager::new(1..=9).unwrap();
        let first = a
            .generate_with(20, &mut StdRng::seed_from_u64(7))
            .unwrap()
            .to_vec();
        let second = b
            .generate_with(20, &mut StdRng::seed_from_u64(7))
            .unwrap()
            .to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reset_restores_original() {
        let mut dataset = DatasetManager::new(10..=200).unwrap();
        dataset.load(vec![40, 10, 30, 20, 50]).unwrap();

        dataset.working_mut().sort_unstable();
        assert_eq!(dataset.working(), &[10, 20, 30, 40, 50]);

        dataset.reset();
        assert_eq!(dataset.working(), &[40, 10, 30, 20, 50]);
        assert_eq!(dataset.max_value(), 50);
    }

    #[test]
    fn test_reset_without_data_is_noop() {
        let mut dataset = DatasetManager::new(10..=200).unwrap();
        dataset.reset();
        assert!(dataset.is_empty());
        assert_eq!(dataset.max_value(), 0);
    }

    #[test]
    fn test_empty_range_is_rejected() {
        #[allow(clippy::reversed_empty_ranges)]
        let result = DatasetManager::new(200..=10);
        assert_eq!(
            result.unwrap_err(),
            EngineError::InvalidRange { min: 200, max: 10 }
        );
    }
}
