use crate::error::PipelineError;
use crate::unpack::Document;
use std::fmt::Debug;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum UnpackerKind {
    Spec,
    Sheet,
    TableMapping,
}

/// Reads its configured workbooks and reshapes them into a `Document`.
pub trait Unpacker: Debug {
    fn kind(&self) -> UnpackerKind;

    fn unpack(&self) -> Result<Document, PipelineError>;
}
