use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::dataset::{DatasetSplit, FilePair};

/// Number of leading items assigned to `train`: `floor(count * ratio)`,
/// clamped to `count`.
pub fn compute_split_index(count: usize, train_ratio: f64) -> usize {
    let index = (count as f64 * train_ratio).floor();
    if index <= 0.0 {
        0
    } else {
        (index as usize).min(count)
    }
}

/// Uniform random permutation of the pairs.
pub fn shuffle_pairs<R: Rng + ?Sized>(pairs: &mut [FilePair], rng: &mut R) {
    pairs.shuffle(rng);
}

/// Assignment of every discovered pair to exactly one split
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitPlan {
    pub split_index: usize,
    pub train: Vec<FilePair>,
    pub val: Vec<FilePair>,
}

impl SplitPlan {
    /// Slice an already ordered list: the first `split_index` pairs go to
    /// `train`, the rest to `val`.
    pub fn from_ordered(mut pairs: Vec<FilePair>, train_ratio: f64) -> Self {
        let split_index = compute_split_index(pairs.len(), train_ratio);
        let val = pairs.split_off(split_index);
        Self {
            split_index,
            train: pairs,
            val,
        }
    }

    pub fn pairs(&self, split: DatasetSplit) -> &[FilePair] {
        match split {
            DatasetSplit::Train => &self.train,
            DatasetSplit::Val => &self.val,
        }
    }

    pub fn len(&self) -> usize {
        self.train.len() + self.val.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;
    use std::path::PathBuf;

    fn pair(name: &str, labeled: bool) -> FilePair {
        FilePair {
            image: PathBuf::from(format!("images/{}.jpg", name)),
            label: labeled.then(|| PathBuf::from(format!("labels/{}.txt", name))),
        }
    }

    fn names(pairs: &[FilePair]) -> Vec<String> {
        pairs
            .iter()
            .map(|p| p.image.file_stem().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_split_index_truncates() {
        assert_eq!(compute_split_index(5, 0.8), 4);
        assert_eq!(compute_split_index(7, 0.8), 5);
        assert_eq!(compute_split_index(3, 0.5), 1);
        assert_eq!(compute_split_index(0, 0.8), 0);
    }

    #[test]
    fn test_split_index_extremes() {
        assert_eq!(compute_split_index(10, 0.0), 0);
        assert_eq!(compute_split_index(10, 1.0), 10);
    }

    #[test]
    fn test_split_index_stays_near_ratio() {
        for total in 0..200usize {
            for ratio in [0.1, 0.25, 0.5, 0.7, 0.8, 0.9] {
                let index = compute_split_index(total, ratio) as i64;
                let expected = (total as f64 * ratio).round() as i64;
                assert!((index - expected).abs() <= 1, "total={} ratio={}", total, ratio);
            }
        }
    }

    #[test]
    fn test_plan_from_ordered_scenario() {
        let ordered = vec![
            pair("b", false),
            pair("d", false),
            pair("a", true),
            pair("e", false),
            pair("c", true),
        ];

        let plan = SplitPlan::from_ordered(ordered, 0.8);

        assert_eq!(plan.split_index, 4);
        assert_eq!(names(&plan.train), vec!["b", "d", "a", "e"]);
        assert_eq!(names(&plan.val), vec!["c"]);
        assert_eq!(plan.len(), 5);
    }

    #[test]
    fn test_plan_extremes() {
        let pairs: Vec<FilePair> = ["a", "b", "c"].iter().map(|n| pair(n, false)).collect();

        let all_train = SplitPlan::from_ordered(pairs.clone(), 1.0);
        assert_eq!(all_train.pairs(DatasetSplit::Train).len(), 3);
        assert!(all_train.pairs(DatasetSplit::Val).is_empty());

        let all_val = SplitPlan::from_ordered(pairs, 0.0);
        assert!(all_val.pairs(DatasetSplit::Train).is_empty());
        assert_eq!(all_val.pairs(DatasetSplit::Val).len(), 3);
    }

    #[test]
    fn test_empty_plan() {
        let plan = SplitPlan::from_ordered(Vec::new(), 0.8);
        assert!(plan.is_empty());
        assert_eq!(plan.split_index, 0);
    }

    #[test]
    fn test_shuffle_keeps_every_pair_once() {
        let original: Vec<FilePair> = (0..50).map(|i| pair(&format!("img{}", i), i % 3 == 0)).collect();
        let mut shuffled = original.clone();
        let mut rng = StdRng::seed_from_u64(7);

        shuffle_pairs(&mut shuffled, &mut rng);

        let before: HashSet<_> = original.iter().map(|p| p.image.clone()).collect();
        let after: HashSet<_> = shuffled.iter().map(|p| p.image.clone()).collect();
        assert_eq!(shuffled.len(), original.len());
        assert_eq!(before, after);
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible() {
        let original: Vec<FilePair> = (0..20).map(|i| pair(&format!("img{}", i), false)).collect();
        let mut first = original.clone();
        let mut second = original;

        shuffle_pairs(&mut first, &mut StdRng::seed_from_u64(42));
        shuffle_pairs(&mut second, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
    }
}
