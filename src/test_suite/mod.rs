pub(crate) mod workbooks;
