use crate::config::{SheetUnpackerConfig, SpecUnpackerConfig, TableMappingConfig};
use crate::error::{ConstructionError, PipelineError};
use crate::load::{FileSystemLoader, Loadable};
use crate::unpack::{
    Document, SheetUnpacker, SpecUnpacker, TableMappingUnpacker, Unpacker, UnpackerKind,
};
use log::info;
use validator::Validate;

/// Runs one unpacker and hands its document to a loader.
#[derive(Debug)]
pub struct Pipeline {
    unpacker: Box<dyn Unpacker>,
    loader: Box<dyn Loadable>,
}

impl Pipeline {
    pub fn new(unpacker: Box<dyn Unpacker>, loader: Box<dyn Loadable>) -> Pipeline {
        Pipeline { unpacker, loader }
    }

    pub fn kind(&self) -> UnpackerKind {
        self.unpacker.kind()
    }

    pub fn run(&self) -> Result<Document, PipelineError> {
        let document = self.unpack()?;
        self.load(&document)?;
        Ok(document)
    }

    pub fn unpack(&self) -> Result<Document, PipelineError> {
        info!("Starting {} unpacking", self.kind());
        let document = self.unpacker.unpack()?;
        info!("Concluded {} unpacking", self.kind());
        Ok(document)
    }

    pub fn load(&self, document: &Document) -> Result<(), PipelineError> {
        self.loader.load(document)?;

        info!("Concluded Loading");
        Ok(())
    }
}

impl TryFrom<SpecUnpackerConfig> for Pipeline {
    type Error = ConstructionError;

    fn try_from(config: SpecUnpackerConfig) -> Result<Self, Self::Error> {
        config.validate()?;
        let loader = FileSystemLoader::new(config.output_path.clone(), config.create_dir);
        Ok(Pipeline::new(
            Box::new(SpecUnpacker::from(config)),
            Box::new(loader),
        ))
    }
}

impl TryFrom<SheetUnpackerConfig> for Pipeline {
    type Error = ConstructionError;

    fn try_from(config: SheetUnpackerConfig) -> Result<Self, Self::Error> {
        config.validate()?;
        let loader = FileSystemLoader::new(config.output_path.clone(), config.create_dir);
        Ok(Pipeline::new(
            Box::new(SheetUnpacker::from(config)),
            Box::new(loader),
        ))
    }
}

impl TryFrom<TableMappingConfig> for Pipeline {
    type Error = ConstructionError;

    fn try_from(config: TableMappingConfig) -> Result<Self, Self::Error> {
        config.validate()?;
        let loader = FileSystemLoader::new(config.output_path(), config.create_dir);
        Ok(Pipeline::new(
            Box::new(TableMappingUnpacker::try_from(config)?),
            Box::new(loader),
        ))
    }
}
