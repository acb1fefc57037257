use snowcap_core::{
    err,
    stmt::{Expr, SelectedField, Value, ValueRecord},
    Result,
};

use indexmap::IndexMap;

/// Whether an object built from a single joined table holds only nulls.
enum ObjectState<'a> {
    AllNull(&'a str),
    NotNull,
}

/// Builds one result record from a returned row.
///
/// Values are decoded through each field's decoder and placed at the field's
/// path. An object whose columns all come from one table and are all null is
/// replaced by null when that table is not guaranteed by the joins.
pub(crate) fn map_result_row(
    fields: &[SelectedField],
    row: Vec<Value>,
    joins_not_nullable: Option<&IndexMap<String, bool>>,
) -> Result<Value> {
    if row.len() < fields.len() {
        return Err(err!(
            "row has {} values but the query selects {} fields",
            row.len(),
            fields.len()
        ));
    }

    let mut record = ValueRecord::new();
    let mut objects: IndexMap<&str, ObjectState<'_>> = IndexMap::new();

    for (field, raw) in fields.iter().zip(row) {
        let value = match field.expr.decoder() {
            Some(decoder) if !matches!(raw, Value::Null) => decoder.decode(raw)?,
            _ => raw,
        };

        if let ([object, _], Expr::Column(column)) = (&field.path[..], &field.expr) {
            let table = column.table_name();
            let state = objects
                .entry(object.as_str())
                .or_insert(ObjectState::AllNull(table));

            let still_null = matches!(state, ObjectState::AllNull(name) if *name == table)
                && matches!(value, Value::Null);
            if !still_null {
                *state = ObjectState::NotNull;
            }
        }

        insert_at(&mut record, &field.path, value)?;
    }

    if let Some(joins_not_nullable) = joins_not_nullable {
        for (object, state) in objects {
            let ObjectState::AllNull(table) = state else {
                continue;
            };

            if joins_not_nullable.get(table) != Some(&true) {
                record.insert(object, Value::Null);
            }
        }
    }

    Ok(Value::Record(record))
}

fn insert_at(record: &mut ValueRecord, path: &[String], value: Value) -> Result<()> {
    let Some((last, parents)) = path.split_last() else {
        return Err(err!("selected field has an empty path"));
    };

    let mut node = record;
    for segment in parents {
        let entry = node
            .fields
            .entry(segment.clone())
            .or_insert_with(|| Value::Record(ValueRecord::new()));

        node = match entry {
            Value::Record(nested) => nested,
            _ => return Err(err!("field `{segment}` is both a value and an object")),
        };
    }

    node.insert(last.clone(), value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use snowcap_core::{
        schema::{Column, Table},
        stmt::{Expr, Fragment, Select, Selection},
    };

    use std::sync::Arc;

    fn users() -> Arc<Table> {
        Table::builder("users")
            .column(Column::integer("id"))
            .column(Column::boolean("active"))
            .build()
            .unwrap()
    }

    fn pets() -> Arc<Table> {
        Table::builder("pets")
            .column(Column::integer("id"))
            .column(Column::varchar("name"))
            .build()
            .unwrap()
    }

    #[test]
    fn decodes_and_nests() {
        let users = users();
        let pets = pets();
        let select =
            Select::new(&users).left_join(&pets, Expr::eq(pets.col("id"), users.col("id")));

        let row = vec![
            Value::String("1".into()),
            Value::I64(1),
            Value::I64(9),
            Value::from("rex"),
        ];
        let value = map_result_row(
            &select.selected_fields(),
            row,
            Some(&select.joins_not_nullable()),
        )
        .unwrap();

        let record = value.expect_record();
        let user = record["users"].expect_record();
        assert_eq!(user["id"], Value::I64(1));
        assert_eq!(user["active"], Value::Bool(true));
        assert_eq!(record["pets"].expect_record()["name"], Value::from("rex"));
    }

    #[test]
    fn nullifies_unmatched_left_join() {
        let users = users();
        let pets = pets();
        let select =
            Select::new(&users).left_join(&pets, Expr::eq(pets.col("id"), users.col("id")));

        let row = vec![Value::I64(1), Value::Null, Value::Null, Value::Null];
        let value = map_result_row(
            &select.selected_fields(),
            row,
            Some(&select.joins_not_nullable()),
        )
        .unwrap();

        let record = value.expect_record();
        assert_eq!(record["pets"], Value::Null);
        assert_eq!(record["users"].expect_record()["active"], Value::Null);
    }

    #[test]
    fn inner_join_keeps_null_objects() {
        let users = users();
        let pets = pets();
        let select = Select::new(&users).inner_join(&pets, true);

        let row = vec![Value::I64(1), Value::Bool(false), Value::Null, Value::Null];
        let value = map_result_row(
            &select.selected_fields(),
            row,
            Some(&select.joins_not_nullable()),
        )
        .unwrap();

        let pets = value.expect_record()["pets"].expect_record();
        assert_eq!(pets["id"], Value::Null);
    }

    #[test]
    fn custom_decoders_and_short_rows() {
        let users = users();
        let fields = Selection::new()
            .field(
                "twice",
                Fragment::raw("id * 2")
                    .map_with(|v| Ok(Value::I64(v.as_i64().unwrap_or_default() * 2)))
                    .alias("twice"),
            )
            .field("id", users.col("id"))
            .flatten();

        let value = map_result_row(&fields, vec![Value::I64(4), Value::I64(4)], None).unwrap();
        assert_eq!(value.expect_record()["twice"], Value::I64(8));

        let err = map_result_row(&fields, vec![Value::I64(4)], None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "row has 1 values but the query selects 2 fields"
        );
    }
}
