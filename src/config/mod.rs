mod config_loader;
pub use self::config_loader::ConfigLoader;
pub mod missing_value;
pub use self::missing_value::MissingValue;
pub mod sheet_unpacker_config;
pub use self::sheet_unpacker_config::{MissingSheetPolicy, SheetSource, SheetUnpackerConfig};
pub mod spec_unpacker_config;
pub use self::spec_unpacker_config::{SpecSource, SpecUnpackerConfig};
pub mod table_mapping_config;
pub use self::table_mapping_config::TableMappingConfig;
pub mod unpack_config;
pub use self::unpack_config::UnpackConfig;
