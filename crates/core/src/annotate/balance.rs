use crate::model::LabeledDataset;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use std::collections::BTreeMap;
use tracing::debug;

/// Down-samples every label to the size of the smallest one.
///
/// Labels are visited in name order and each draws a uniform sample from a
/// single `Xoshiro256StarStar` stream seeded with `seed`, so the result is a
/// pure function of `(dataset, seed)`. Kept entries retain their original
/// relative order.
pub fn balance(dataset: &LabeledDataset, seed: u64) -> LabeledDataset {
    let mut groups: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (index, label) in dataset.labels().iter().enumerate() {
        groups.entry(label.as_str()).or_default().push(index);
    }

    let Some(target) = groups.values().map(Vec::len).min() else {
        return LabeledDataset::new();
    };

    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
    let mut keep = Vec::with_capacity(target * groups.len());
    for indices in groups.values() {
        let chosen = rand::seq::index::sample(&mut rng, indices.len(), target);
        keep.extend(chosen.iter().map(|i| indices[i]));
    }
    keep.sort_unstable();

    let mut balanced = LabeledDataset::with_capacity(keep.len());
    for index in keep {
        balanced.push(
            dataset.words()[index].as_str(),
            dataset.labels()[index].as_str(),
        );
    }

    debug!(
        before = dataset.len(),
        after = balanced.len(),
        per_label = target,
        "Balanced labeled dataset"
    );
    balanced
}
