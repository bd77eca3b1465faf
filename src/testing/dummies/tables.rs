use crate::core::attributes::{Attribute, NominalAttribute, NumericAttribute, StringAttribute};
use crate::core::dataset::Dataset;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{DenseInstance, Value};
use std::sync::Arc;

fn header(name: &str, attributes: Vec<Attribute>) -> Arc<InstanceHeader> {
    Arc::new(InstanceHeader::new(name.into(), attributes))
}

fn class_attribute(labels: &[&str]) -> Attribute {
    NominalAttribute::from_labels("class", labels.iter().copied()).into()
}

fn x() -> Attribute {
    NumericAttribute::new("x".into()).into()
}

fn table(header: Arc<InstanceHeader>, rows: Vec<Vec<Value>>) -> Dataset {
    Dataset::with_instances(header, rows.into_iter().map(DenseInstance::new))
        .expect("dummy rows match their header")
}

fn numeric_rows(rows: &[(Option<f64>, Option<usize>)]) -> Vec<Vec<Value>> {
    rows.iter()
        .map(|&(x, y)| vec![Value::from(x), Value::from(y)])
        .collect()
}

/// Single nominal attribute `class` in {A, B}.
pub fn labels_only_table(labels: &[Option<usize>]) -> Dataset {
    table(
        header("labels", vec![class_attribute(&["A", "B"])]),
        labels.iter().map(|&y| vec![Value::from(y)]).collect(),
    )
}

/// `x` numeric, `class` in {A, B}: A = [1, 3], B = [5, 7].
pub fn numeric_scenario_table() -> Dataset {
    table(
        header("gaussian", vec![x(), class_attribute(&["A", "B"])]),
        numeric_rows(&[
            (Some(1.0), Some(0)),
            (Some(3.0), Some(0)),
            (Some(5.0), Some(1)),
            (Some(7.0), Some(1)),
        ]),
    )
}

/// As [`numeric_scenario_table`] plus an unlabeled row and a B row missing `x`.
pub fn missing_values_table() -> Dataset {
    table(
        header("missing", vec![x(), class_attribute(&["A", "B"])]),
        numeric_rows(&[
            (Some(1.0), Some(0)),
            (Some(3.0), Some(0)),
            (Some(5.0), Some(1)),
            (Some(7.0), Some(1)),
            (Some(100.0), None),
            (None, Some(1)),
        ]),
    )
}

/// Class C in {A, B, C} has no rows.
pub fn empty_class_table() -> Dataset {
    table(
        header("empty-class", vec![x(), class_attribute(&["A", "B", "C"])]),
        numeric_rows(&[
            (Some(1.0), Some(0)),
            (Some(3.0), Some(0)),
            (Some(5.0), Some(1)),
            (Some(7.0), Some(1)),
        ]),
    )
}

/// Class B has a row, but its `x` is missing.
pub fn unobserved_attribute_table() -> Dataset {
    table(
        header("unobserved", vec![x(), class_attribute(&["A", "B"])]),
        numeric_rows(&[(Some(1.0), Some(0)), (Some(3.0), Some(0)), (None, Some(1))]),
    )
}

/// `x` numeric, `color` in {r, g, b}, `class` in {A, B}.
///
/// Color counts: A = [3, 0, 1], B = [2, 3, 5]. A's `x` sits near 1, B's near 10.
pub fn mixed_table() -> Dataset {
    let color: Attribute = NominalAttribute::from_labels("color", ["r", "g", "b"]).into();
    let rows: &[(f64, usize, usize)] = &[
        (1.0, 0, 0),
        (2.0, 0, 0),
        (1.5, 0, 0),
        (0.5, 2, 0),
        (8.0, 0, 1),
        (9.0, 0, 1),
        (10.0, 1, 1),
        (11.0, 1, 1),
        (12.0, 1, 1),
        (9.5, 2, 1),
        (10.5, 2, 1),
        (8.5, 2, 1),
        (11.5, 2, 1),
        (10.0, 2, 1),
    ];
    table(
        header("mixed", vec![x(), color, class_attribute(&["A", "B"])]),
        rows.iter()
            .map(|&(x, c, y)| vec![Value::Numeric(x), Value::Nominal(c), Value::Nominal(y)])
            .collect(),
    )
}

/// Free-text `note` followed by `class` in {A, B}.
pub fn with_string_attribute() -> Dataset {
    table(
        header(
            "notes",
            vec![
                StringAttribute::new("note".into()).into(),
                class_attribute(&["A", "B"]),
            ],
        ),
        vec![
            vec![Value::Text("hello".into()), Value::Nominal(0)],
            vec![Value::Text("world".into()), Value::Nominal(1)],
        ],
    )
}
