use scatter_rs::core::{AxisDomain, DomainPadding, HealthDataset, Metric, StateRecord};

fn record(state: &str, abbr: &str, values: [f64; 6]) -> StateRecord {
    let [poverty, healthcare, age, income, smokes, obesity] = values;
    StateRecord {
        state: state.to_owned(),
        abbr: abbr.to_owned(),
        poverty,
        healthcare,
        age,
        income,
        smokes,
        obesity,
    }
}

fn sample_dataset() -> HealthDataset {
    HealthDataset::new(vec![
        record("Alabama", "AL", [18.1, 11.3, 38.6, 42830.0, 21.1, 33.5]),
        record("Alaska", "AK", [9.1, 9.1, 33.8, 71583.0, 19.9, 29.7]),
        record("Colorado", "CO", [12.0, 11.4, 36.1, 60629.0, 15.7, 21.3]),
    ])
    .expect("valid dataset")
}

#[test]
fn padded_domain_brackets_every_record_value() {
    let dataset = sample_dataset();
    let pads = DomainPadding::new(1.0, 1.0);

    for metric in Metric::X_CHOICES.into_iter().chain(Metric::Y_CHOICES) {
        let domain =
            AxisDomain::from_dataset(&dataset, metric, pads).expect("domain for every metric");

        for state in &dataset {
            let value = state.metric(metric);
            assert!(
                value >= domain.min() + pads.low - 1e-9,
                "{metric}: {value} below unpadded min"
            );
            assert!(
                value <= domain.max() - pads.high + 1e-9,
                "{metric}: {value} above unpadded max"
            );
        }
    }
}

#[test]
fn default_pads_match_dashboard_constants() {
    let dataset = sample_dataset();

    let x_domain = AxisDomain::from_dataset(&dataset, Metric::Poverty, DomainPadding::x_default())
        .expect("x domain");
    assert!((x_domain.min() - 8.1).abs() <= 1e-9);
    assert!((x_domain.max() - 19.1).abs() <= 1e-9);

    let y_domain =
        AxisDomain::from_dataset(&dataset, Metric::Healthcare, DomainPadding::y_default())
            .expect("y domain");
    assert!((y_domain.min() - 8.6).abs() <= 1e-9);
    assert!((y_domain.max() - 13.4).abs() <= 1e-9);
}

#[test]
fn pads_are_metric_independent() {
    // Income differs from poverty by orders of magnitude; the pads do not.
    let dataset = sample_dataset();
    let domain = AxisDomain::from_dataset(&dataset, Metric::Income, DomainPadding::x_default())
        .expect("income domain");

    assert!((domain.min() - 42829.0).abs() <= 1e-9);
    assert!((domain.max() - 71584.0).abs() <= 1e-9);
}

#[test]
fn single_record_dataset_needs_pads_to_widen_the_domain() {
    let dataset = HealthDataset::new(vec![record(
        "Alaska",
        "AK",
        [9.1, 9.1, 33.8, 71583.0, 19.9, 29.7],
    )])
    .expect("valid dataset");

    let zero_pads = DomainPadding::new(0.0, 0.0);
    assert!(AxisDomain::from_dataset(&dataset, Metric::Poverty, zero_pads).is_err());

    let widened = AxisDomain::from_dataset(&dataset, Metric::Poverty, DomainPadding::x_default())
        .expect("padded domain");
    assert!(widened.contains(9.1));
}

#[test]
fn negative_or_non_finite_pads_are_rejected() {
    let dataset = sample_dataset();
    assert!(
        AxisDomain::from_dataset(&dataset, Metric::Poverty, DomainPadding::new(-1.0, 1.0)).is_err()
    );
    assert!(
        AxisDomain::from_dataset(&dataset, Metric::Poverty, DomainPadding::new(0.5, f64::NAN))
            .is_err()
    );
}

#[test]
fn empty_dataset_is_rejected_at_construction() {
    assert!(HealthDataset::new(Vec::new()).is_err());
}

#[test]
fn non_finite_metric_is_rejected_at_construction() {
    let result = HealthDataset::new(vec![record(
        "Nowhere",
        "NW",
        [f64::NAN, 9.1, 33.8, 71583.0, 19.9, 29.7],
    )]);
    assert!(result.is_err());
}
