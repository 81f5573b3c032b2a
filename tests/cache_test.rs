//! Move cache properties observable through the engine, plus the
//! capacity bound of the cache itself.

mod common;

use gambit_engine::cache::MoveCache;
use gambit_engine::{Difficulty, Side};

#[tokio::test]
async fn test_repeat_query_skips_search() {
    let engine = common::deterministic_engine();

    let first = engine
        .choose_move(common::ITALIAN_FEN, Side::Black, Difficulty::Easy)
        .await
        .unwrap();
    assert_eq!(engine.search_count(), 1);

    let second = engine
        .choose_move(common::ITALIAN_FEN, Side::Black, Difficulty::Easy)
        .await
        .unwrap();
    assert_eq!(engine.search_count(), 1, "second query must hit the cache");
    assert_eq!(first.san, second.san);
}

#[tokio::test]
async fn test_difficulty_is_part_of_the_cache_key() {
    let engine = common::deterministic_engine();

    engine
        .choose_move(common::ITALIAN_FEN, Side::Black, Difficulty::Easy)
        .await
        .unwrap();
    engine
        .choose_move(common::ITALIAN_FEN, Side::Black, Difficulty::Medium)
        .await
        .unwrap();

    assert_eq!(engine.search_count(), 2);
}

#[test]
fn test_capacity_bound_evicts_first_inserted() {
    let mut cache = MoveCache::new(1000);
    for n in 0..1001 {
        cache.put((format!("fen-{n}"), Side::White, Difficulty::Hard), "e4".into());
    }

    assert_eq!(cache.len(), 1000);
    assert!(cache
        .get(&("fen-0".to_string(), Side::White, Difficulty::Hard))
        .is_none());
    assert!(cache
        .get(&("fen-1".to_string(), Side::White, Difficulty::Hard))
        .is_some());
    assert!(cache
        .get(&("fen-1000".to_string(), Side::White, Difficulty::Hard))
        .is_some());
}
