pub(crate) mod cell_value;
pub mod error;
pub mod field_group;
pub mod records;
pub mod table_identifier;
pub mod type_substitutions;

pub use self::field_group::derived_flag;
pub use self::records::{IndexedRecord, Record, SheetRecords};
pub use self::table_identifier::TableIdentifierNormaliser;
pub use self::type_substitutions::TypeSubstitutions;
