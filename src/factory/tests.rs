use super::RecordFactory;

use anyhow::Result;
use chrono::NaiveDateTime;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GeneratorConfig;
use crate::models::{FaultKind, Invariant, InvariantContext};
use crate::types::TIMESTAMP_FORMAT;

fn create_config() -> Result<GeneratorConfig> {
    let base = NaiveDateTime::parse_from_str("2024-06-30 12:00:00", TIMESTAMP_FORMAT)?;
    Ok(GeneratorConfig::new().with_seed(11).with_base_time(base))
}

fn context(config: &GeneratorConfig) -> InvariantContext<'_> {
    InvariantContext {
        base_moment: config.base_moment(),
        currencies: &config.currencies
    }
}

#[test]
fn test_unfaulted_records_satisfy_every_invariant() -> Result<()> {
    let config = create_config()?;
    let factory = RecordFactory::new(&config, config.base_moment());
    let mut rng = config.build_rng();

    for index in 1..=2_000 {
        let record = factory.build(index, None, &mut rng);
        let transaction = &record.transaction;

        assert!(record.fault.is_none());
        assert!(transaction.violated_invariants(&context(&config)).is_empty());
        assert!(config.accounts.contains(&transaction.account_id));
        assert!(config.transaction_types.contains(&transaction.transaction_type));
        assert!(config.categories.contains(&transaction.category));
        assert!(config.descriptions.contains(&transaction.description));
        assert!(config.statuses.contains(&transaction.status));
    }

    Ok(())
}

#[test]
fn test_each_fault_breaks_exactly_its_own_invariant() -> Result<()> {
    let config = create_config()?;
    let factory = RecordFactory::new(&config, config.base_moment());
    let mut rng = config.build_rng();

    for kind in FaultKind::ALL {
        for index in 1..=200 {
            let record = factory.build(index, Some(kind), &mut rng);

            assert_eq!(record.fault, Some(kind));
            assert_eq!(record.transaction.violated_invariants(&context(&config)), vec![kind.violates()]);
        }
    }

    Ok(())
}

#[test]
fn test_forced_missing_id_leaves_other_fields_valid() -> Result<()> {
    let config = create_config()?;
    let factory = RecordFactory::new(&config, config.base_moment());
    let mut rng = config.build_rng();

    let record = factory.build(1, Some(FaultKind::MissingId), &mut rng);
    let transaction = &record.transaction;

    assert_eq!(transaction.transaction_id, "");
    for invariant in Invariant::ALL {
        if invariant != Invariant::TransactionIdPresent {
            assert!(invariant.holds(transaction, &context(&config)), "{invariant:?} should hold");
        }
    }

    Ok(())
}

#[test]
fn test_invalid_currency_uses_configured_sentinel() -> Result<()> {
    let config = create_config()?;
    let factory = RecordFactory::new(&config, config.base_moment());
    let mut rng = config.build_rng();

    let record = factory.build(9, Some(FaultKind::InvalidCurrency), &mut rng);

    assert_eq!(record.transaction.currency, "XXX");
    assert_eq!(record.transaction.transaction_id, "TXN2024063000000009");

    Ok(())
}

#[test]
fn test_fault_rate_tracks_configured_probability() -> Result<()> {
    let config = create_config()?;
    let factory = RecordFactory::new(&config, config.base_moment());
    let mut rng = StdRng::seed_from_u64(99);
    let sample_size = 20_000;

    let faulted = (1..=sample_size)
        .filter(|index| factory.generate(*index, &mut rng).is_faulted())
        .count();

    let rate = faulted as f64 / sample_size as f64;
    assert!((rate - 0.05).abs() < 0.01, "observed fault rate {rate}");

    Ok(())
}

#[test]
fn test_zero_fault_probability_never_injects() -> Result<()> {
    let config = create_config()?.with_fault_probability(0.0);
    let factory = RecordFactory::new(&config, config.base_moment());
    let mut rng = config.build_rng();

    assert!((1..=1_000).all(|index| !factory.generate(index, &mut rng).is_faulted()));

    Ok(())
}

#[test]
fn test_same_seed_reproduces_same_records() -> Result<()> {
    let config = create_config()?;
    let factory = RecordFactory::new(&config, config.base_moment());
    let mut first = config.build_rng();
    let mut second = config.build_rng();

    for index in 1..=100 {
        assert_eq!(factory.generate(index, &mut first), factory.generate(index, &mut second));
    }

    Ok(())
}
