use std::sync::Arc;

use proptest::prelude::*;

use talent_core::config::LearningConfig;
use talent_core::models::NewFeedback;
use talent_learning::WeightAdapter;
use talent_storage::StorageEngine;

fn verdicts() -> impl Strategy<Value = Vec<(bool, f64)>> {
    prop::collection::vec((any::<bool>(), 0.0f64..=10.0), 1..25)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn weights_stay_normalized_and_bounded(events in verdicts()) {
        let engine = Arc::new(StorageEngine::open_in_memory().unwrap());
        let adapter = WeightAdapter::new(engine.clone(), engine.clone(), LearningConfig::default());
        for (i, (hired, score)) in events.iter().enumerate() {
            let label = if *hired { "Good Fit" } else { "Not a Fit" };
            let entry = NewFeedback::parse(format!("c-{i}"), "hm", *score, label, None).unwrap();
            adapter.record(&entry).unwrap();

            let w = adapter.current();
            prop_assert!((w.weight_sum() - 1.0).abs() < 1e-9);
            prop_assert!(w.similarity_weight >= 0.3 - 1e-9 && w.similarity_weight <= 0.8 + 1e-9);
            prop_assert!(w.screening_weight >= 0.2 - 1e-9 && w.screening_weight <= 0.7 + 1e-9);
            prop_assert!(w.confidence >= 0.5 && w.confidence <= 0.95 + 1e-9);
        }
    }
}
