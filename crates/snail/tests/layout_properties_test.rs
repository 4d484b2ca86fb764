use serde_json::{Value, json};
use snail::{
    Circle, Dimensions, Error, GeometryFailure, InputData, Layout, SnailOptions, StartPosition,
    TOLERANCE, generate, layout,
};

const STARTS: [StartPosition; 4] = [
    StartPosition::Top,
    StartPosition::Left,
    StartPosition::Bottom,
    StartPosition::Right,
];

fn datasets() -> Vec<(&'static str, Vec<f64>)> {
    vec![
        ("equal", vec![1.0; 200]),
        ("equal_large", vec![7.5; 50]),
        ("linear_desc", (1..=100).rev().map(f64::from).collect()),
        ("squares_desc", (1..=30).rev().map(|k| f64::from(k * k)).collect()),
        ("powers_desc", (1..=20).rev().map(|k| 2f64.powi(k)).collect()),
        (
            "plateaus",
            vec![10.0, 8.0, 8.0, 5.0, 5.0, 5.0, 3.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0],
        ),
    ]
}

/// Inputs outside the sorted shapes above; they may stop early but never overlap.
fn unordered_datasets() -> Vec<(String, Vec<f64>)> {
    let mut sets = vec![
        ("linear_asc".to_string(), (1..=50).map(f64::from).collect()),
        ("squares_asc".to_string(), (1..=20).map(|k| f64::from(k * k)).collect()),
        (
            "with_zero".to_string(),
            vec![4.0, 2.0, 1.0, 0.0, 1.0, 1.0],
        ),
    ];
    let mut seed = 0x2545_f491_4f6c_dd1d_u64;
    for round in 0..8 {
        let values = (0..60)
            .map(|_| {
                seed ^= seed << 13;
                seed ^= seed >> 7;
                seed ^= seed << 17;
                1.0 + (seed % 10_000) as f64 / 100.0
            })
            .collect();
        sets.push((format!("random_{round}"), values));
    }
    sets
}

fn assert_no_overlap(name: &str, options: &SnailOptions, cs: &[Circle]) {
    for i in 0..cs.len() {
        for j in 0..i {
            assert!(
                cs[i].distance_to(&cs[j]) >= cs[i].r + cs[j].r - TOLERANCE,
                "{name} {options:?}: circles {j} and {i} overlap"
            );
        }
    }
}

fn pack(values: &[f64], options: &SnailOptions) -> Layout<f64> {
    layout(values.iter().copied(), options, &|v: &f64| Some(*v)).expect("layout")
}

fn every_setting() -> impl Iterator<Item = SnailOptions> {
    STARTS.into_iter().flat_map(|start| {
        [true, false].into_iter().map(move |clockwise| {
            SnailOptions::default()
                .with_start_position(start)
                .with_clockwise(clockwise)
        })
    })
}

fn circles(layout: &Layout<f64>) -> Vec<Circle> {
    layout.circles().copied().collect()
}

#[test]
fn circles_never_overlap() {
    for (name, values) in datasets() {
        for options in every_setting() {
            assert_no_overlap(name, &options, &circles(&pack(&values, &options)));
        }
    }
}

#[test]
fn unordered_inputs_pack_cleanly_or_fail_outright() {
    for (name, values) in unordered_datasets() {
        for options in every_setting() {
            match layout(values.iter().copied(), &options, &|v: &f64| Some(*v)) {
                Ok(out) => assert_no_overlap(&name, &options, &circles(&out)),
                Err(Error::GeometryContract { .. }) => {}
                Err(err) => panic!("{name} {options:?}: unexpected error {err}"),
            }
        }
    }
}

#[test]
fn ascending_values_fail_instead_of_overlapping() {
    for options in every_setting() {
        let err = layout((1..=10).map(f64::from), &options, &|v: &f64| Some(*v)).unwrap_err();
        assert!(
            matches!(
                err,
                Error::GeometryContract {
                    index: 6,
                    reason: GeometryFailure::NoCandidate
                }
            ),
            "{options:?}: {err}"
        );
    }
    assert!(matches!(
        pack_err(&[4.0, 2.0, 1.0, 0.0, 1.0, 1.0]),
        Error::GeometryContract {
            index: 4,
            reason: GeometryFailure::NoCandidate
        }
    ));
}

#[test]
fn tiny_values_still_pack() {
    for options in every_setting() {
        let out = pack(&[1e-12; 12], &options);
        assert_eq!(out.data_to_plot.len(), 12);
    }
}

#[test]
fn every_later_circle_touches_an_earlier_one() {
    for (name, values) in datasets() {
        for options in every_setting() {
            let cs = circles(&pack(&values, &options));
            for i in 2..cs.len() {
                assert!(
                    cs[..i].iter().any(|c| c.is_tangent_to(&cs[i])),
                    "{name} {options:?}: circle {i} touches nothing"
                );
            }
        }
    }
}

#[test]
fn circle_area_equals_value() {
    let (_, values) = &datasets()[2];
    let out = pack(values, &SnailOptions::default());
    for node in &out.data_to_plot {
        let expected = (node.data / std::f64::consts::PI).sqrt();
        assert!((node.r() - expected).abs() < 1e-12);
    }
}

#[test]
fn output_preserves_input_order() {
    let items: Vec<Value> = (0..25)
        .map(|i| json!({"id": format!("n{i}"), "value": 25 - i}))
        .collect();
    let out = generate(&InputData::Items(items.clone()), &SnailOptions::default()).expect("layout");
    assert_eq!(out.data_to_plot.len(), items.len());
    for (node, item) in out.data_to_plot.iter().zip(&items) {
        assert_eq!(&node.data, item);
    }
}

#[test]
fn bounding_box_is_tight() {
    for options in every_setting() {
        let out = pack(&[9.0, 4.0, 4.0, 3.0, 2.0, 1.0, 1.0], &options);
        let cs = circles(&out);
        let max_x = cs.iter().map(|c| c.x + c.r).fold(0.0, f64::max);
        let min_x = cs.iter().map(|c| c.x - c.r).fold(0.0, f64::min);
        let max_y = cs.iter().map(|c| c.y + c.r).fold(0.0, f64::max);
        let min_y = cs.iter().map(|c| c.y - c.r).fold(0.0, f64::min);
        assert_eq!(
            out.dimensions,
            Dimensions {
                min_x,
                max_x,
                min_y,
                max_y
            }
        );
    }
}

#[test]
fn empty_input_yields_zero_box() {
    let out = pack(&[], &SnailOptions::default());
    assert!(out.data_to_plot.is_empty());
    assert_eq!(out.dimensions, Dimensions::default());
}

#[test]
fn normalizing_twice_changes_nothing() {
    let opts = SnailOptions::default()
        .with_start_position(StartPosition::Left)
        .with_positive_coordinates(true);
    let out = pack(&[5.0, 3.0, 3.0, 2.0, 1.0], &opts);
    let once = circles(&out);
    let mut twice = once.clone();
    snail::normalize::move_to_positive_coordinates(twice.iter_mut());
    assert_eq!(once, twice);
}

#[test]
fn scenario_single_item() {
    let out = generate(
        &InputData::Items(vec![json!({"value": 1})]),
        &SnailOptions::default(),
    )
    .expect("layout");
    assert_eq!(out.data_to_plot.len(), 1);
    let node = &out.data_to_plot[0];
    assert_eq!((node.x(), node.y()), (0.0, 0.0));
    assert!((node.r() - 0.5642).abs() < 1e-4);
}

#[test]
fn scenario_two_items_start_right() {
    let out = pack(&[1.0, 1.0], &SnailOptions::default());
    let second = &out.data_to_plot[1];
    assert!((second.x() - 1.1284).abs() < 1e-4);
    assert_eq!(second.y(), 0.0);
}

#[test]
fn scenario_three_items_clockwise_from_right() {
    let out = pack(&[1.0, 1.0, 1.0], &SnailOptions::default().with_clockwise(true));
    let cs = circles(&out);
    assert!(cs[2].is_tangent_to(&cs[0]));
    assert!(cs[2].is_tangent_to(&cs[1]));
    assert!(cs[2].y < 0.0);
    assert!(cs[2].x < cs[1].x);
}

#[test]
fn scenario_positive_coordinates_shift() {
    let base = SnailOptions::default().with_start_position(StartPosition::Left);
    let raw = circles(&pack(&[4.0, 1.0, 1.0], &base));
    let shifted = circles(&pack(&[4.0, 1.0, 1.0], &base.clone().with_positive_coordinates(true)));

    let raw_min_x = raw.iter().map(|c| c.x - c.r).fold(f64::INFINITY, f64::min);
    assert!(raw_min_x < 0.0);

    let dx = shifted[0].x - raw[0].x;
    let dy = shifted[0].y - raw[0].y;
    for (s, r) in shifted.iter().zip(&raw) {
        assert!((s.x - r.x - dx).abs() < 1e-12);
        assert!((s.y - r.y - dy).abs() < 1e-12);
        assert_eq!(s.r, r.r);
    }
    let min_x = shifted.iter().map(|c| c.x - c.r).fold(f64::INFINITY, f64::min);
    let min_y = shifted.iter().map(|c| c.y - c.r).fold(f64::INFINITY, f64::min);
    assert!(min_x.abs() < 1e-12);
    assert!(min_y.abs() < 1e-12);
}

#[test]
fn json_text_input_is_unwrapped() {
    let text = r#"{"series": [{"value": 4, "label": "a"}, {"value": 1, "label": "b"}]}"#;
    let out = generate(&InputData::Json(text.to_string()), &SnailOptions::default()).expect("layout");
    assert_eq!(out.data_to_plot.len(), 2);
    assert_eq!(out.data_to_plot[1].data["label"], "b");
}

#[test]
fn custom_value_field() {
    let items = vec![json!({"size": 4}), json!({"size": 1})];
    let opts = SnailOptions::default().with_value_field("size");
    let out = generate(&InputData::Items(items), &opts).expect("layout");
    assert!((out.data_to_plot[0].r() - (4.0 / std::f64::consts::PI).sqrt()).abs() < 1e-12);
}

#[test]
fn malformed_text_is_an_input_error() {
    let err = generate(&InputData::Json("{not json".into()), &SnailOptions::default()).unwrap_err();
    assert!(matches!(err, Error::InputFormat { .. }));
}

#[test]
fn bad_values_report_their_index() {
    let items = vec![json!({"value": 3}), json!({"value": -1})];
    let err = generate(&InputData::Items(items), &SnailOptions::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidValue { index: 1, .. }));
    assert_eq!(err.index(), Some(1));

    let items = vec![json!({"value": 3}), json!({"label": "x"})];
    let err = generate(&InputData::Items(items), &SnailOptions::default()).unwrap_err();
    assert!(matches!(err, Error::MissingValue { index: 1, .. }));
}

#[test]
fn degenerate_geometry_fails_the_whole_call() {
    let err = pack_err(&[0.0, 1.0, 1.0]);
    assert!(matches!(
        err,
        Error::GeometryContract {
            index: 2,
            reason: GeometryFailure::NoCandidate
        }
    ));
    assert!(err.to_string().contains("item 2"));
}

fn pack_err(values: &[f64]) -> Error {
    layout(values.iter().copied(), &SnailOptions::default(), &|v: &f64| Some(*v)).unwrap_err()
}

#[test]
fn result_serializes_like_the_chart_input_format() {
    let out = generate(
        &InputData::Items(vec![json!({"value": 1, "label": "only"})]),
        &SnailOptions::default(),
    )
    .expect("layout");
    let v = serde_json::to_value(&out).expect("serialize");
    assert_eq!(v["dataToPlot"][0]["data"]["label"], "only");
    assert_eq!(v["dataToPlot"][0]["x"], 0.0);
    assert!(v["dataToPlot"][0]["r"].as_f64().is_some());
    assert!(v["dimensions"]["maxX"].as_f64().is_some());
}

#[test]
fn version_matches_cargo_pkg_version() {
    assert_eq!(snail::VERSION, env!("CARGO_PKG_VERSION"));
}
