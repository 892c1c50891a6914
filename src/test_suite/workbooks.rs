use crate::constants::{
    FIELD_GROUP_COLUMN, FIELD_NAME_COLUMN, FIELD_TYPE_COLUMN, FIELDS_SHEET, INCLUDED_COLUMN,
};
use rust_xlsxwriter::{Workbook, Worksheet};
use std::path::Path;

/// One row of a DARS "Fields" sheet. Empty strings are left as empty cells.
pub(crate) struct FieldRow {
    name: &'static str,
    data_type: &'static str,
    field_group: &'static str,
    included: &'static str,
}

impl FieldRow {
    pub(crate) fn new(
        name: &'static str,
        data_type: &'static str,
        field_group: &'static str,
        included: &'static str,
    ) -> Self {
        FieldRow {
            name,
            data_type,
            field_group,
            included,
        }
    }

    fn cells(&self) -> [&'static str; 5] {
        [
            self.name,
            self.data_type,
            self.field_group,
            "",
            self.included,
        ]
    }
}

fn write_row(worksheet: &mut Worksheet, row: u32, cells: &[&str]) {
    for (col, cell) in cells.iter().enumerate() {
        if !cell.is_empty() {
            worksheet.write(row, col as u16, *cell).unwrap();
        }
    }
}

/// A DARS spec workbook: a "Home" sheet and a "Fields" sheet with a title row above the header.
pub(crate) fn write_fields_workbook(path: &Path, rows: &[FieldRow]) {
    let mut workbook = Workbook::new();
    let home = workbook.add_worksheet().set_name("Home").unwrap();
    home.write(0, 0, "NICOR DARS product specification").unwrap();

    let fields = workbook.add_worksheet().set_name(FIELDS_SHEET).unwrap();
    fields.write(0, 0, "Fields").unwrap();
    write_row(
        fields,
        1,
        &[
            FIELD_NAME_COLUMN,
            FIELD_TYPE_COLUMN,
            FIELD_GROUP_COLUMN,
            "Field Description",
            INCLUDED_COLUMN,
        ],
    );
    for (i, field_row) in rows.iter().enumerate() {
        write_row(fields, 2 + i as u32, &field_row.cells());
    }

    workbook.save(path).unwrap();
}

/// A data dictionary with a contents sheet and two table sheets.
pub(crate) fn write_dictionary_workbook(path: &Path) {
    let mut workbook = Workbook::new();
    let home = workbook.add_worksheet().set_name("Home").unwrap();
    home.write(0, 0, "Contents").unwrap();

    let deaths = workbook.add_worksheet().set_name("deaths").unwrap();
    write_row(
        deaths,
        0,
        &["table", "display_name", "display_name_label", "units"],
    );
    write_row(deaths, 1, &["deaths", "DEATH_DATE", "Date of death", ""]);
    write_row(
        deaths,
        2,
        &["deaths", "AGE_AT_DEATH", "Age at death", "years"],
    );

    let births = workbook.add_worksheet().set_name("births").unwrap();
    write_row(births, 0, &["table", "display_name", "display_name_label"]);
    write_row(births, 1, &["births", "BIRTH_WEIGHT", "Birth weight"]);

    workbook.save(path).unwrap();
}

/// A table mapping workbook whose "Mapping" sheet has its header on the third row.
pub(crate) fn write_table_mapping_workbook(path: &Path) {
    let mut workbook = Workbook::new();
    let mapping = workbook.add_worksheet().set_name("Mapping").unwrap();
    mapping.write(0, 0, "DARS table mapping").unwrap();
    write_row(
        mapping,
        2,
        &["table", "source_table", "display_name_label"],
    );
    write_row(
        mapping,
        3,
        &[
            "cds_v6_0_1_dars_nic_391419_j3w9t_demographics",
            "cds_v6_0_1_dars_nic_391419_j3w9t_demographics",
            "Demographics",
        ],
    );
    write_row(
        mapping,
        4,
        &[
            "nicor_minap_dars_nic_391419_j3w9t",
            "nicor_minap_dars_nic_391419_j3w9t",
            "MINAP",
        ],
    );
    write_row(
        mapping,
        5,
        &["hes_apc_all_years", "hes_apc_all_years", ""],
    );

    workbook.save(path).unwrap();
}
