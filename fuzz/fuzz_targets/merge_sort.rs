#![no_main]

use csb_core::{Entity, merge_sort_by_score};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let items: Vec<Entity> = data
        .chunks(2)
        .zip(1..)
        .map(|(chunk, id)| {
            let score = chunk.iter().fold(0u16, |acc, &b| (acc << 8) | u16::from(b));
            Entity::new(id, f64::from(score))
        })
        .collect();

    let sorted = merge_sort_by_score(&items);
    assert_eq!(sorted.len(), items.len());
    assert!(sorted.windows(2).all(|w| w[0].score <= w[1].score));

    let again = merge_sort_by_score(&sorted);
    assert!(sorted.iter().zip(&again).all(|(a, b)| a.score == b.score));
});
