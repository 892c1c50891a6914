use crate::config::{SpecSource, SpecUnpackerConfig};
use crate::constants::{
    DATA_TYPE, FIELD_GROUP, FIELD_GROUP_COLUMN, FIELD_NAME, FIELD_NAME_COLUMN, FIELD_TYPE_COLUMN,
    FIELDS_HEADER_ROW, FIELDS_SHEET, INCLUDED_COLUMN, INCLUDED_VALUE,
};
use crate::error::PipelineError;
use crate::extract::ExcelWorkbook;
use crate::extract::error::ExtractionError;
use crate::extract::utils::ensure_columns;
use crate::transform::error::TransformError;
use crate::transform::{TypeSubstitutions, derived_flag};
use crate::unpack::{Document, FieldSpec, FieldSpecDocument, FieldSpecs, Unpacker, UnpackerKind};
use log::{debug, info, warn};
use polars::frame::DataFrame;
use polars::prelude::{DataType, IntoLazy, col, lit};
use std::path::PathBuf;

/// Unpacks the "Fields" sheet of DARS product specifications into
/// `{dae_table_name: {field_name: {data_type, derived}}}`.
///
/// Only fields that are included in the current DARS product are kept.
#[derive(Debug)]
pub struct SpecUnpacker {
    input_dir: PathBuf,
    specs: Vec<SpecSource>,
    sheet_name: String,
    header_row: usize,
    type_substitutions: TypeSubstitutions,
}

impl SpecUnpacker {
    pub fn new(
        input_dir: impl Into<PathBuf>,
        specs: Vec<SpecSource>,
        type_substitutions: TypeSubstitutions,
    ) -> Self {
        SpecUnpacker {
            input_dir: input_dir.into(),
            specs,
            sheet_name: FIELDS_SHEET.to_string(),
            header_row: FIELDS_HEADER_ROW,
            type_substitutions,
        }
    }

    /// Reads the fields sheet and keeps the included rows that have a name, type and group.
    ///
    /// The returned frame has the columns `field_name`, `data_type` and `field_group`.
    fn extract_fields(&self, spec: &SpecSource) -> Result<DataFrame, ExtractionError> {
        let mut workbook = ExcelWorkbook::open(&self.input_dir.join(&spec.file_name))?;
        let df = workbook.read_sheet(&self.sheet_name, self.header_row)?;
        ensure_columns(
            &df,
            &self.sheet_name,
            &[
                FIELD_NAME_COLUMN,
                FIELD_TYPE_COLUMN,
                FIELD_GROUP_COLUMN,
                INCLUDED_COLUMN,
            ],
        )?;

        let fields = df
            .lazy()
            .select([
                col(FIELD_NAME_COLUMN)
                    .cast(DataType::String)
                    .alias(FIELD_NAME),
                col(FIELD_TYPE_COLUMN)
                    .cast(DataType::String)
                    .alias(DATA_TYPE),
                col(FIELD_GROUP_COLUMN)
                    .cast(DataType::String)
                    .alias(FIELD_GROUP),
                col(INCLUDED_COLUMN).cast(DataType::String),
            ])
            .filter(
                col(FIELD_NAME)
                    .is_not_null()
                    .and(col(DATA_TYPE).is_not_null())
                    .and(col(FIELD_GROUP).is_not_null())
                    .and(col(INCLUDED_COLUMN).eq(lit(INCLUDED_VALUE))),
            )
            .select([col(FIELD_NAME), col(DATA_TYPE), col(FIELD_GROUP)])
            .collect()?;

        debug!(
            "{} of the fields in {} are included in the current DARS product",
            fields.height(),
            spec.file_name.display()
        );
        Ok(fields)
    }

    pub(crate) fn build_field_specs(
        &self,
        fields: &DataFrame,
        dae_table_name: &str,
    ) -> Result<FieldSpecs, TransformError> {
        let names = fields.column(FIELD_NAME)?.str()?;
        let data_types = fields.column(DATA_TYPE)?.str()?;
        let field_groups = fields.column(FIELD_GROUP)?.str()?;

        let mut field_specs = FieldSpecs::new();
        for ((name, data_type), field_group) in names.into_iter().zip(data_types).zip(field_groups)
        {
            let (Some(name), Some(data_type), Some(field_group)) = (name, data_type, field_group)
            else {
                continue;
            };

            let field_spec = FieldSpec::new(
                self.type_substitutions.normalise(data_type),
                derived_flag(field_group),
            );
            if field_specs.insert(name.to_string(), field_spec).is_some() {
                warn!(
                    "Field {name} is listed more than once for {dae_table_name}. The last entry is used."
                );
            }
        }

        Ok(field_specs)
    }
}

impl From<SpecUnpackerConfig> for SpecUnpacker {
    fn from(config: SpecUnpackerConfig) -> Self {
        SpecUnpacker {
            input_dir: config.input_dir,
            specs: config.specs,
            sheet_name: config.sheet_name,
            header_row: config.header_row,
            type_substitutions: TypeSubstitutions::new(&config.type_substitutions),
        }
    }
}

impl Unpacker for SpecUnpacker {
    fn kind(&self) -> UnpackerKind {
        UnpackerKind::Spec
    }

    fn unpack(&self) -> Result<Document, PipelineError> {
        let mut document = FieldSpecDocument::default();

        for spec in &self.specs {
            let fields = self.extract_fields(spec)?;
            let field_specs = self.build_field_specs(&fields, &spec.dae_table_name)?;
            info!(
                "{} ({} fields)",
                spec.dae_table_name,
                field_specs.len()
            );
            document.insert_table(&spec.dae_table_name, field_specs)?;
        }

        Ok(Document::FieldSpecs(document))
    }
}
