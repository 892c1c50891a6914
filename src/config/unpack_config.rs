use crate::config::{SheetUnpackerConfig, SpecUnpackerConfig, TableMappingConfig};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Top level configuration file. Every section is optional; a section that is
/// absent simply can't be run.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Validate)]
#[serde(deny_unknown_fields)]
pub struct UnpackConfig {
    #[serde(default)]
    #[validate(nested)]
    pub spec_unpacker: Option<SpecUnpackerConfig>,
    #[serde(default)]
    #[validate(nested)]
    pub sheet_unpacker: Option<SheetUnpackerConfig>,
    #[serde(default)]
    #[validate(nested)]
    pub table_mapping_unpacker: Option<TableMappingConfig>,
}
