use crate::load::error::LoadError;
use crate::unpack::Document;
use std::fmt::Debug;

pub trait Loadable: Debug {
    /// Persists an unpacked document.
    fn load(&self, document: &Document) -> Result<(), LoadError>;
}
