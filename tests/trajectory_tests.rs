use tabular_uct::{table::Lookup, DecisionState, EdgeId, Trajectory, TranspositionTable};

#[derive(Clone, Debug)]
struct Pair;

impl DecisionState for Pair {
    type Action = bool;
    type Key = u8;

    fn key(&self) -> Self::Key {
        0
    }

    fn actions(&self) -> Vec<bool> {
        vec![false, true]
    }

    fn is_feasible(&self, _action: &bool) -> bool {
        true
    }
}

fn table_with_pair() -> (TranspositionTable<u8, bool>, Vec<EdgeId>) {
    let mut table = TranspositionTable::new();
    table.lookup_or_create(&Pair);
    let ids = match table.lookup_or_create(&Pair) {
        Lookup::Existing(feasible) => feasible.ids().to_vec(),
        other => panic!("expected an existing class, got {:?}", other),
    };
    (table, ids)
}

#[test]
fn test_record_keeps_order_and_duplicates() {
    let (_, ids) = table_with_pair();
    let mut trajectory = Trajectory::new();
    assert!(trajectory.is_empty());

    trajectory.record(ids[1]);
    trajectory.record(ids[0]);
    trajectory.record(ids[1]);

    assert_eq!(trajectory.len(), 3);
    assert_eq!(trajectory.path(), &[ids[1], ids[0], ids[1]]);
}

#[test]
fn test_drain_updates_every_occurrence() {
    let (mut table, ids) = table_with_pair();
    let mut trajectory = Trajectory::new();

    trajectory.record(ids[1]);
    trajectory.record(ids[1]);
    trajectory.record(ids[0]);

    let applied = trajectory.drain_and_clear(&mut table, 1.0, 0.5);
    assert_eq!(applied, 3);
    assert!(trajectory.is_empty());

    let first = table.edge(ids[0]).unwrap();
    let second = table.edge(ids[1]).unwrap();
    assert_eq!(first.visits(), 1);
    assert_eq!(second.visits(), 2);
    assert!((first.reward() - 0.5).abs() < 1e-12);
    assert!((second.reward() - 0.75).abs() < 1e-12);
}

#[test]
fn test_drain_empty_trajectory() {
    let (mut table, ids) = table_with_pair();
    let mut trajectory = Trajectory::new();

    assert_eq!(trajectory.drain_and_clear(&mut table, 1.0, 0.5), 0);
    assert_eq!(table.edge(ids[0]).unwrap().visits(), 0);
    assert_eq!(table.edge(ids[1]).unwrap().visits(), 0);
}

#[test]
fn test_drain_skips_ids_from_another_table() {
    let (_, ids) = table_with_pair();
    let mut empty: TranspositionTable<u8, bool> = TranspositionTable::new();
    let mut trajectory = Trajectory::new();

    trajectory.record(ids[0]);
    trajectory.record(ids[1]);

    assert_eq!(trajectory.drain_and_clear(&mut empty, 1.0, 0.5), 0);
    assert!(trajectory.is_empty());
}
