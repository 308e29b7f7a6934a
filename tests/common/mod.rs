#![allow(dead_code)]

use parquet::{
    data_type::{BoolType, Int64Type},
    file::{properties::WriterProperties, writer::SerializedFileWriter},
    schema::parser::parse_message_type,
};
use std::{path::Path, sync::Arc};

pub enum Column {
    Long(Vec<i64>),
    /// Values for the non-null slots plus one definition level per row (0 = null).
    NullableLong(Vec<i64>, Vec<i16>),
    Bool(Vec<bool>),
}

/// Writes a single row group with the given columns, in schema order.
pub fn write_parquet(path: &Path, message_type: &str, columns: Vec<Column>) {
    let schema = Arc::new(parse_message_type(message_type).expect("invalid schema"));
    let props = Arc::new(WriterProperties::builder().build());
    let file = std::fs::File::create(path).expect("create parquet file");
    let mut writer = SerializedFileWriter::new(file, schema, props).expect("parquet writer");

    let mut row_group = writer.next_row_group().expect("row group");
    let mut columns = columns.into_iter();
    while let Some(mut col) = row_group.next_column().expect("next column") {
        match columns.next().expect("fewer columns than the schema declares") {
            Column::Long(values) => {
                col.typed::<Int64Type>()
                    .write_batch(&values, None, None)
                    .expect("write int64");
            }
            Column::NullableLong(values, def_levels) => {
                col.typed::<Int64Type>()
                    .write_batch(&values, Some(&def_levels), None)
                    .expect("write nullable int64");
            }
            Column::Bool(values) => {
                col.typed::<BoolType>()
                    .write_batch(&values, None, None)
                    .expect("write bool");
            }
        }
        col.close().expect("close column");
    }
    row_group.close().expect("close row group");
    writer.close().expect("close writer");
}

/// A file with an `id` column followed by `y_true` and `y_pred`, all INT64.
pub fn write_labels(path: &Path, y_true: Vec<i64>, y_pred: Vec<i64>) {
    let ids = (0..y_true.len() as i64).collect();
    write_parquet(
        path,
        "message labels { REQUIRED INT64 id; REQUIRED INT64 y_true; REQUIRED INT64 y_pred; }",
        vec![Column::Long(ids), Column::Long(y_true), Column::Long(y_pred)],
    );
}
