use crate::transform::error::TransformError;
use crate::transform::{Record, SheetRecords};
use ordermap::OrderMap;
use serde::{Deserialize, Serialize};

/// Data type and derived flag of a single DARS field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub data_type: String,
    /// `"True"` or `"False"`, kept as text for the DAE params notebook.
    pub derived: String,
}

impl FieldSpec {
    pub fn new(data_type: impl Into<String>, derived: impl Into<String>) -> Self {
        Self {
            data_type: data_type.into(),
            derived: derived.into(),
        }
    }
}

/// Field name to field spec, in worksheet order.
pub type FieldSpecs = OrderMap<String, FieldSpec>;

fn insert_unique<V>(
    map: &mut OrderMap<String, V>,
    key: &str,
    value: V,
    collection: &'static str,
) -> Result<(), TransformError> {
    if map.contains_key(key) {
        return Err(TransformError::DuplicateKey {
            key: key.to_string(),
            collection,
        });
    }
    map.insert(key.to_string(), value);
    Ok(())
}

/// `{dae_table_name: {field_name: {data_type, derived}}}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldSpecDocument(OrderMap<String, FieldSpecs>);

impl FieldSpecDocument {
    pub fn insert_table(
        &mut self,
        dae_table_name: &str,
        fields: FieldSpecs,
    ) -> Result<(), TransformError> {
        insert_unique(&mut self.0, dae_table_name, fields, "DAE table")
    }

    pub fn table(&self, dae_table_name: &str) -> Option<&FieldSpecs> {
        self.0.get(dae_table_name)
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// `{sheet_name: {row_index: {column: value}}}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SheetDocument(OrderMap<String, SheetRecords>);

impl SheetDocument {
    pub fn insert_sheet(
        &mut self,
        sheet_name: &str,
        records: SheetRecords,
    ) -> Result<(), TransformError> {
        insert_unique(&mut self.0, sheet_name, records, "Sheet")
    }

    pub fn sheet(&self, sheet_name: &str) -> Option<&SheetRecords> {
        self.0.get(sheet_name)
    }

    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// `[{column: value}, ...]` in worksheet row order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TableMappingDocument(Vec<Record>);

impl TableMappingDocument {
    pub fn records(&self) -> &[Record] {
        &self.0
    }
}

impl From<Vec<Record>> for TableMappingDocument {
    fn from(records: Vec<Record>) -> Self {
        TableMappingDocument(records)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Document {
    FieldSpecs(FieldSpecDocument),
    Sheets(SheetDocument),
    TableMapping(TableMappingDocument),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn test_insert_table_rejects_duplicates() {
        let mut document = FieldSpecDocument::default();
        document
            .insert_table("pci_enhanced", FieldSpecs::new())
            .unwrap();
        let err = document
            .insert_table("pci_enhanced", FieldSpecs::new())
            .unwrap_err();
        assert!(matches!(
            err,
            TransformError::DuplicateKey { key, collection: "DAE table" } if key == "pci_enhanced"
        ));
        assert_eq!(document.len(), 1);
    }

    #[rstest]
    fn test_insert_sheet_rejects_duplicates() {
        let mut document = SheetDocument::default();
        document.insert_sheet("deaths", SheetRecords::default()).unwrap();
        assert!(
            document
                .insert_sheet("deaths", SheetRecords::default())
                .is_err()
        );
    }

    #[rstest]
    fn test_field_spec_document_serialises_nested() {
        let mut fields = FieldSpecs::new();
        fields.insert("AGE".to_string(), FieldSpec::new("integer", "False"));
        fields.insert("BMI".to_string(), FieldSpec::new("float", "True"));
        let mut document = FieldSpecDocument::default();
        document.insert_table("minap_enhanced", fields).unwrap();

        assert_eq!(
            serde_json::to_value(Document::FieldSpecs(document)).unwrap(),
            json!({
                "minap_enhanced": {
                    "AGE": {"data_type": "integer", "derived": "False"},
                    "BMI": {"data_type": "float", "derived": "True"}
                }
            })
        );
    }
}
