use proptest::prelude::*;
use scatter_rs::api::{RenderStyle, build_render_frame};
use scatter_rs::core::{
    AxisDomain, DomainPadding, HealthDataset, LinearScale, Metric, PlotArea, PlotMargins,
    StateRecord, Viewport,
};
use scatter_rs::interaction::SelectionState;

type MetricRow = (f64, f64, f64, f64, f64, f64);

fn metric_row_strategy() -> impl Strategy<Value = MetricRow> {
    (
        0.0f64..50.0,
        0.0f64..50.0,
        20.0f64..60.0,
        20_000.0f64..90_000.0,
        0.0f64..50.0,
        0.0f64..50.0,
    )
}

fn dataset_strategy() -> impl Strategy<Value = HealthDataset> {
    prop::collection::vec(metric_row_strategy(), 1..40).prop_map(|rows| {
        let records = rows
            .into_iter()
            .enumerate()
            .map(
                |(index, (poverty, healthcare, age, income, smokes, obesity))| StateRecord {
                    state: format!("State {index}"),
                    abbr: format!("S{index:02}"),
                    poverty,
                    healthcare,
                    age,
                    income,
                    smokes,
                    obesity,
                },
            )
            .collect();
        HealthDataset::new(records).expect("generated dataset is valid")
    })
}

fn selection_strategy() -> impl Strategy<Value = SelectionState> {
    (0usize..3, 0usize..3).prop_map(|(x, y)| {
        SelectionState::new(Metric::X_CHOICES[x], Metric::Y_CHOICES[y])
            .expect("choice pair is valid")
    })
}

proptest! {
    #[test]
    fn frame_preserves_dataset_length_and_order(
        dataset in dataset_strategy(),
        selection in selection_strategy()
    ) {
        let viewport = Viewport::new(500, 400);
        let plot = PlotArea::from_viewport(viewport, PlotMargins::default()).expect("plot area");
        let x_scale = LinearScale::new(
            AxisDomain::from_dataset(&dataset, selection.x_metric(), DomainPadding::x_default())
                .expect("x domain"),
            plot.x_range(),
        ).expect("x scale");
        let y_scale = LinearScale::new(
            AxisDomain::from_dataset(&dataset, selection.y_metric(), DomainPadding::y_default())
                .expect("y domain"),
            plot.y_range(),
        ).expect("y scale");

        let frame = build_render_frame(
            &dataset, selection, x_scale, y_scale, viewport, plot, RenderStyle::default(),
        ).expect("frame builds");

        prop_assert_eq!(frame.markers.len(), dataset.len());
        prop_assert_eq!(frame.tooltips.len(), dataset.len());
        for (marker, state) in frame.markers.iter().zip(&dataset) {
            prop_assert_eq!(&marker.id, &state.abbr);
        }

        prop_assert_eq!(frame.x_choices.iter().filter(|c| c.active).count(), 1);
        prop_assert_eq!(frame.y_choices.iter().filter(|c| c.active).count(), 1);
    }

    #[test]
    fn every_marker_stays_inside_the_padded_plot_extents(
        dataset in dataset_strategy()
    ) {
        let viewport = Viewport::new(500, 400);
        let plot = PlotArea::from_viewport(viewport, PlotMargins::default()).expect("plot area");
        let selection = SelectionState::default();
        let x_scale = LinearScale::new(
            AxisDomain::from_dataset(&dataset, selection.x_metric(), DomainPadding::x_default())
                .expect("x domain"),
            plot.x_range(),
        ).expect("x scale");
        let y_scale = LinearScale::new(
            AxisDomain::from_dataset(&dataset, selection.y_metric(), DomainPadding::y_default())
                .expect("y domain"),
            plot.y_range(),
        ).expect("y scale");

        let frame = build_render_frame(
            &dataset, selection, x_scale, y_scale, viewport, plot, RenderStyle::default(),
        ).expect("frame builds");

        // Data values sit strictly inside the padded domain, so every marker
        // lands strictly inside the plot rectangle.
        for marker in &frame.markers {
            prop_assert!(marker.x > 0.0 && marker.x < plot.width);
            prop_assert!(marker.y > 0.0 && marker.y < plot.height);
        }
    }
}
