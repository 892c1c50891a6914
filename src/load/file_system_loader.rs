use crate::constants::JSON_INDENT;
use crate::load::error::LoadError;
use crate::load::traits::Loadable;
use crate::unpack::Document;
use log::{debug, info};
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// A loader that writes a document as a single pretty-printed JSON file.
#[derive(Debug)]
pub struct FileSystemLoader {
    /// The file the document is written to. An existing file is overwritten.
    out_path: PathBuf,
    /// If true will create the missing parent directories of `out_path`
    create_dir: bool,
}

impl FileSystemLoader {
    pub fn new(out_path: impl Into<PathBuf>, create_dir: bool) -> Self {
        Self {
            out_path: out_path.into(),
            create_dir,
        }
    }

    pub fn out_path(&self) -> &Path {
        &self.out_path
    }

    fn to_pretty_json(&self, document: &Document) -> Result<Vec<u8>, LoadError> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(JSON_INDENT);
        let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
        document
            .serialize(&mut serializer)
            .map_err(|err| LoadError::ConversionError {
                path: self.out_path.clone(),
                format: "json".to_string(),
                reason: err.to_string(),
            })?;
        Ok(buffer)
    }
}

impl Loadable for FileSystemLoader {
    /// Serialises the document with four space indentation and writes it to `out_path`.
    ///
    /// The document is rendered completely before the file is touched, so a document
    /// that can't be serialised never leaves a truncated file behind.
    fn load(&self, document: &Document) -> Result<(), LoadError> {
        let json = self.to_pretty_json(document)?;

        if self.create_dir
            && let Some(parent) = self.out_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|err| LoadError::NoStorage {
                reason: err.to_string(),
            })?;
        }

        let cant_store = |err: std::io::Error| LoadError::CantStore {
            path: self.out_path.clone(),
            reason: err.to_string(),
        };

        let file = File::create(&self.out_path).map_err(cant_store)?;
        debug!("Storing file to: {:?}", file);
        let mut writer = BufWriter::new(file);
        writer.write_all(&json).map_err(cant_store)?;
        writer.flush().map_err(cant_store)?;

        info!("Wrote {}", self.out_path.display());
        Ok(())
    }
}
