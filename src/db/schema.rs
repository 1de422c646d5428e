//! Column model and SQL statement generator.
//!
//! Each table's schema is an ordered list of (name, storage type) pairs, and
//! every generated statement derives from that list. The ordering is the one
//! contract shared by CREATE TABLE, INSERT, and attribute extraction; nothing
//! else in the crate hand-writes a column list.

use crate::db::models::SqlValue;
use crate::error::BuzzError;
use serde::Serialize;

/// Logical tables in the `buzz_buzz` database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Profiles,
    Surveys,
}

/// A single column declaration. Position within the table's column slice is
/// part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub storage_type: &'static str,
}

const fn col(name: &'static str, storage_type: &'static str) -> Column {
    Column { name, storage_type }
}

// Note the specific ordering, it is load-bearing for the generated queries.
const PROFILE_COLUMNS: &[Column] = &[
    col("email", "VARCHAR(100)"),
    col("full_name", "VARCHAR(100)"),
    col("zip_code", "VARCHAR(20)"),
    col("number_of_colonies", "INTEGER"),
    col("race_of_bees", "TEXT"),
    col("monitor_varroa_mites", "VARCHAR(1)"),
    col("monitor_varroa_mites_count", "INTEGER"),
    col("monitor_methods", "VARCHAR(255)"),
    col("treatment_methods", "VARCHAR(255)"),
    col("last_treatment_date", "TEXT"),
    col("lost_colonies_over_winter", "VARCHAR(1)"),
];

const SURVEY_COLUMNS: &[Column] = &[
    col("queen_right", "VARCHAR(1)"),
    col("queen_drone_laying", "VARCHAR(1)"),
    col("diseases", "TEXT"),
    col("honey_supers_on", "VARCHAR(1)"),
    col("honey_supers_removed", "VARCHAR(1)"),
    col("feeding_supplementary_sugar", "VARCHAR(1)"),
    col("honey_from_sealed_cells", "VARCHAR(1)"),
    col("honey_from_brood", "VARCHAR(1)"),
    col("split_or_combine", "VARCHAR(1)"),
    col("sample_tube_code", "INTEGER"),
];

impl Table {
    pub fn name(self) -> &'static str {
        match self {
            Table::Profiles => "profiles",
            Table::Surveys => "surveys",
        }
    }

    /// The ordered column model; the only place a column is ever added.
    pub fn columns(self) -> &'static [Column] {
        match self {
            Table::Profiles => PROFILE_COLUMNS,
            Table::Surveys => SURVEY_COLUMNS,
        }
    }
}

/// Comma-joined column names in schema order, for an INSERT target list.
pub fn column_names(table: Table) -> String {
    table
        .columns()
        .iter()
        .map(|c| c.name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Comma-joined `name TYPE` pairs in schema order, for CREATE TABLE.
pub fn insert_clause(table: Table) -> String {
    table
        .columns()
        .iter()
        .map(|c| format!("{} {}", c.name, c.storage_type))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One positional placeholder per declared column, comma-joined.
pub fn placeholders(table: Table) -> String {
    vec!["?"; table.columns().len()].join(", ")
}

/// Derive the record key for a column: `full_name` -> `fullName`.
pub fn camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper_next = false;
    for ch in snake.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Ordered bind values for `table` pulled out of `record`.
///
/// The record serializes to a JSON object keyed by camelCase field names;
/// each column's camel-cased name is looked up there. An absent or null entry
/// binds as SQL NULL rather than failing.
pub fn extract_values<R: Serialize>(table: Table, record: &R) -> Result<Vec<SqlValue>, BuzzError> {
    let value = serde_json::to_value(record)?;
    let serde_json::Value::Object(map) = value else {
        return Err(BuzzError::InvalidRecord { table: table.name() });
    };
    Ok(table
        .columns()
        .iter()
        .map(|c| match map.get(&camel_case(c.name)) {
            Some(v) => SqlValue::from(v),
            None => SqlValue::Null,
        })
        .collect())
}

/// Collapse every whitespace run to a single space.
fn collapse_whitespace(statement: &str) -> String {
    statement.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Idempotent DDL for `table`; safe to run on every startup and never alters
/// an existing table's shape.
pub fn create_table_sql(table: Table) -> String {
    collapse_whitespace(&format!(
        "CREATE TABLE IF NOT EXISTS {} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            {}
        );",
        table.name(),
        insert_clause(table)
    ))
}

/// Parameterized INSERT covering every declared column.
pub fn insert_sql(table: Table) -> String {
    collapse_whitespace(&format!(
        "INSERT INTO {} ( {} )
        VALUES ({});",
        table.name(),
        column_names(table),
        placeholders(table)
    ))
}

pub fn select_all_sql(table: Table) -> String {
    format!("SELECT * FROM {};", table.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{ProfileAttributes, SurveyAttributes};

    const ALL_TABLES: [Table; 2] = [Table::Profiles, Table::Surveys];

    #[test]
    fn insert_columns_and_placeholders_agree_in_count() {
        for table in ALL_TABLES {
            let names = column_names(table);
            let slots = placeholders(table);
            assert_eq!(
                names.split(", ").count(),
                slots.split(", ").count(),
                "count mismatch for {}",
                table.name()
            );
        }
    }

    #[test]
    fn extracted_values_cover_every_column() {
        let values = extract_values(Table::Profiles, &ProfileAttributes::default())
            .expect("extraction failed");
        assert_eq!(values.len(), Table::Profiles.columns().len());
        assert!(values.iter().all(|v| *v == SqlValue::Null));
    }

    #[test]
    fn extracted_values_follow_column_order() {
        let record = SurveyAttributes {
            queen_right: Some("Y".to_string()),
            diseases: Some("chalkbrood".to_string()),
            sample_tube_code: Some(12),
            ..SurveyAttributes::default()
        };
        let values = extract_values(Table::Surveys, &record).expect("extraction failed");
        assert_eq!(values[0], SqlValue::Text("Y".to_string()));
        assert_eq!(values[1], SqlValue::Null);
        assert_eq!(values[2], SqlValue::Text("chalkbrood".to_string()));
        assert_eq!(values[9], SqlValue::Integer(12));
    }

    #[test]
    fn camel_case_derivation() {
        assert_eq!(camel_case("email"), "email");
        assert_eq!(camel_case("full_name"), "fullName");
        assert_eq!(
            camel_case("monitor_varroa_mites_count"),
            "monitorVarroaMitesCount"
        );
    }

    // Guards the latent drift between column names and record keys: every
    // column's camel-cased name must exist as a key on the attributes struct,
    // or inserts would silently write NULL for that column.
    #[test]
    fn every_column_maps_onto_an_attributes_field() {
        let profile = serde_json::to_value(ProfileAttributes::default()).expect("serialize");
        let survey = serde_json::to_value(SurveyAttributes::default()).expect("serialize");
        for (table, record) in [(Table::Profiles, &profile), (Table::Surveys, &survey)] {
            let map = record.as_object().expect("not an object");
            for column in table.columns() {
                let key = camel_case(column.name);
                assert!(
                    map.contains_key(&key),
                    "{} has no field for column {}",
                    table.name(),
                    column.name
                );
            }
        }
    }

    #[test]
    fn generated_statements_contain_no_doubled_whitespace() {
        for table in ALL_TABLES {
            for statement in [create_table_sql(table), insert_sql(table), select_all_sql(table)] {
                assert!(!statement.contains("  "), "doubled space in {statement:?}");
                assert!(!statement.contains('\n'), "newline in {statement:?}");
                assert!(!statement.contains('\t'), "tab in {statement:?}");
            }
        }
    }

    #[test]
    fn profile_ddl_text_is_stable() {
        assert_eq!(
            create_table_sql(Table::Profiles),
            "CREATE TABLE IF NOT EXISTS profiles ( id INTEGER PRIMARY KEY AUTOINCREMENT, \
             email VARCHAR(100), full_name VARCHAR(100), zip_code VARCHAR(20), \
             number_of_colonies INTEGER, race_of_bees TEXT, monitor_varroa_mites VARCHAR(1), \
             monitor_varroa_mites_count INTEGER, monitor_methods VARCHAR(255), \
             treatment_methods VARCHAR(255), last_treatment_date TEXT, \
             lost_colonies_over_winter VARCHAR(1) );"
        );
    }

    #[test]
    fn survey_insert_text_is_stable() {
        assert_eq!(
            insert_sql(Table::Surveys),
            "INSERT INTO surveys ( queen_right, queen_drone_laying, diseases, honey_supers_on, \
             honey_supers_removed, feeding_supplementary_sugar, honey_from_sealed_cells, \
             honey_from_brood, split_or_combine, sample_tube_code ) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?);"
        );
    }

    #[test]
    fn non_object_record_is_rejected() {
        let err = extract_values(Table::Profiles, &"not a record").unwrap_err();
        assert!(matches!(
            err,
            BuzzError::InvalidRecord { table: "profiles" }
        ));
    }
}
