use parquet::{
    file::{reader::FileReader, serialized_reader::SerializedFileReader},
    record::{Field, Row},
    schema::types::SchemaDescriptor,
};
use std::path::Path;

use crate::error::{Error, Result};

/// True and predicted labels read from a dataset, in row order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelColumns {
    pub y_true: Vec<usize>,
    pub y_pred: Vec<usize>,
}

/// Reads two label columns from a parquet file.
///
/// Columns may hold booleans or integers of any width. Whether the values are
/// actually binary is checked later, when the confusion matrix is computed.
pub fn load_labels(
    path: impl AsRef<Path>,
    true_column: &str,
    pred_column: &str,
) -> Result<LabelColumns> {
    let path = path.as_ref();
    let dataset_file = std::fs::File::open(path)?;
    let dataset = SerializedFileReader::new(dataset_file)?;

    let schema = dataset.metadata().file_metadata().schema_descr();
    let true_idx = column_index(schema, true_column)?;
    let pred_idx = column_index(schema, pred_column)?;

    let mut labels = LabelColumns::default();
    for (row_idx, row) in dataset.get_row_iter(None)?.enumerate() {
        let row = row?;
        labels.y_true.push(label_at(&row, true_idx, true_column, row_idx)?);
        labels.y_pred.push(label_at(&row, pred_idx, pred_column, row_idx)?);
    }

    log::debug!(
        "loaded {} label rows from {} ({true_column}, {pred_column})",
        labels.y_true.len(),
        path.display()
    );

    Ok(labels)
}

fn column_index(schema: &SchemaDescriptor, name: &str) -> Result<usize> {
    schema
        .root_schema()
        .get_fields()
        .iter()
        .position(|field| field.name() == name)
        .ok_or_else(|| Error::MissingColumn(name.to_string()))
}

fn label_at(row: &Row, idx: usize, column: &str, row_idx: usize) -> Result<usize> {
    let field = row
        .get_column_iter()
        .nth(idx)
        .map(|(_, field)| field)
        .ok_or_else(|| Error::MissingColumn(column.to_string()))?;

    field_label(field).ok_or_else(|| {
        Error::InvalidInput(format!(
            "column {column} row {row_idx}: expected a non-negative integer label, got {field}"
        ))
    })
}

fn field_label(field: &Field) -> Option<usize> {
    match *field {
        Field::Bool(v) => Some(usize::from(v)),
        Field::Byte(v) => usize::try_from(v).ok(),
        Field::Short(v) => usize::try_from(v).ok(),
        Field::Int(v) => usize::try_from(v).ok(),
        Field::Long(v) => usize::try_from(v).ok(),
        Field::UByte(v) => Some(usize::from(v)),
        Field::UShort(v) => Some(usize::from(v)),
        Field::UInt(v) => usize::try_from(v).ok(),
        Field::ULong(v) => usize::try_from(v).ok(),
        _ => None,
    }
}
