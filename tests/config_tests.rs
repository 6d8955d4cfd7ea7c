use tabular_uct::{config::BestActionCriteria, UctConfig, UctError};

#[test]
fn test_config_builder_methods() {
    // Test that all builder methods correctly set their respective values
    let config = UctConfig::default()
        .with_exploration_constant(2.0)
        .with_decay_rate(0.05)
        .with_initial_capacity(4096)
        .with_best_action_criteria(BestActionCriteria::MostVisits);

    assert_eq!(config.exploration_constant, 2.0);
    assert_eq!(config.decay_rate, 0.05);
    assert_eq!(config.initial_capacity, 4096);
    assert_eq!(config.best_action_criteria, BestActionCriteria::MostVisits);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_default_values() {
    let config = UctConfig::default();

    assert_eq!(config.exploration_constant, 1.0);
    assert!((config.decay_rate - 0.00001).abs() < 1e-15);
    assert_eq!(config.initial_capacity, 0);
    assert_eq!(config.best_action_criteria, BestActionCriteria::HighestReward);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validation() {
    let invalid = [
        UctConfig::default().with_exploration_constant(-0.5),
        UctConfig::default().with_exploration_constant(f64::NAN),
        UctConfig::default().with_exploration_constant(f64::INFINITY),
        UctConfig::default().with_decay_rate(0.0),
        UctConfig::default().with_decay_rate(1.5),
        UctConfig::default().with_decay_rate(f64::NAN),
    ];

    for config in invalid.iter() {
        assert!(
            matches!(config.validate(), Err(UctError::InvalidConfiguration(_))),
            "{:?} should be rejected",
            config
        );
    }

    // Boundaries that are allowed
    assert!(UctConfig::default().with_exploration_constant(0.0).validate().is_ok());
    assert!(UctConfig::default().with_decay_rate(1.0).validate().is_ok());
}
