pub mod document;
pub mod sheet_unpacker;
pub mod spec_unpacker;
pub mod table_mapping_unpacker;
pub mod traits;

pub use self::document::{
    Document, FieldSpec, FieldSpecDocument, FieldSpecs, SheetDocument, TableMappingDocument,
};
pub use self::sheet_unpacker::SheetUnpacker;
pub use self::spec_unpacker::SpecUnpacker;
pub use self::table_mapping_unpacker::TableMappingUnpacker;
pub use self::traits::{Unpacker, UnpackerKind};
