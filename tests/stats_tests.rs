use tabular_uct::{stats::format_bytes, TableStatistics};

#[test]
fn test_empty_statistics() {
    let stats = TableStatistics::default();
    assert_eq!(stats.hit_rate(), 0.0);
    assert_eq!(stats.branching_factor(), 0.0);
    assert!(stats.summary().contains("Episodes: 0"));
}

#[test]
fn test_derived_values() {
    let stats = TableStatistics {
        classes: 4,
        edges: 12,
        hits: 30,
        misses: 10,
        episodes: 5,
        backed_up: 40,
        estimated_bytes: 3 * 1024 * 1024,
    };

    assert!((stats.hit_rate() - 0.75).abs() < 1e-12);
    assert!((stats.branching_factor() - 3.0).abs() < 1e-12);

    let summary = stats.summary();
    assert!(summary.contains("Edges: 12"));
    assert!(summary.contains("Memory usage: 3.00MB"));
}

#[test]
fn test_estimate_grows_with_edges() {
    let small = TableStatistics::estimate_bytes::<u64, u8>(1, 3);
    let large = TableStatistics::estimate_bytes::<u64, u8>(1, 30);
    assert!(large > small);
    assert_eq!(TableStatistics::estimate_bytes::<u64, u8>(0, 0), 0);
}

#[test]
fn test_format_bytes() {
    assert_eq!(format_bytes(512), "0.50KB");
    assert_eq!(format_bytes(1536), "1.50KB");
    assert_eq!(format_bytes(5 * 1024 * 1024), "5.00MB");
    assert_eq!(format_bytes(2 * 1024 * 1024 * 1024), "2.00GB");
}
