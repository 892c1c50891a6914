pub mod error;
pub mod excel_range_reader;
pub mod sheet_rows;
pub(crate) mod utils;
pub mod workbook;

pub use self::excel_range_reader::ExcelRangeReader;
pub use self::sheet_rows::SheetRows;
pub use self::workbook::ExcelWorkbook;
