#![allow(dead_code)]

use genbi_charts::core::{DataShape, DataShapeOutcome, Record, Scalar, inspect};

pub fn pair_records<L, V>(category: &str, value: &str, rows: Vec<(L, V)>) -> Vec<Record>
where
    L: Into<Scalar>,
    V: Into<Scalar>,
{
    rows.into_iter()
        .map(|(label, amount)| Record::new().with(category, label).with(value, amount))
        .collect()
}

pub fn numbered_records(category: &str, value: &str, count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            Record::new()
                .with(category, format!("Item {i}"))
                .with(value, (i as f64 + 1.0) * 10.0)
        })
        .collect()
}

pub fn shape_of(records: &[Record]) -> DataShape {
    match inspect(records) {
        DataShapeOutcome::Shape(shape) => shape,
        DataShapeOutcome::NoData => panic!("expected a chartable shape"),
    }
}
