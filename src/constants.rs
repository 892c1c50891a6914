pub const FIELDS_SHEET: &str = "Fields";
pub const FIELDS_HEADER_ROW: usize = 1;

pub const FIELD_NAME_COLUMN: &str = "Database Field Name";
pub const FIELD_TYPE_COLUMN: &str = "Field Type";
pub const FIELD_GROUP_COLUMN: &str = "Field Group";
pub const INCLUDED_COLUMN: &str = "Included in the current DARS product?";

pub const FIELD_NAME: &str = "field_name";
pub const DATA_TYPE: &str = "data_type";
pub const FIELD_GROUP: &str = "field_group";

pub const INCLUDED_VALUE: &str = "Yes";
pub const DERIVED_GROUP: &str = "Derived";

pub const DEFAULT_TYPE_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("int", "integer"),
    ("numeric", "float"),
    ("numeric (int)", "integer"),
    ("numeric (decimal)", "integer"),
    ("datetime", "timestamp"),
];

pub const TABLE_MAPPING_HEADER_ROW: usize = 2;
pub const TABLE_COLUMN: &str = "table";
pub const DISPLAY_NAME_LABEL_COLUMN: &str = "display_name_label";

pub const DARS_NIC_PATTERN: &str = r"_dars_nic_\d{6}_\w{5}";
pub const DARS_NIC_PLACEHOLDER: &str = "_{dars_nic}";

pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub const JSON_INDENT: &[u8] = b"    ";
