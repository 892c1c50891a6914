use crate::Pipeline;
use crate::config::{ConfigLoader, UnpackConfig};
use crate::error::{ConstructionError, PipelineError};
use crate::unpack::UnpackerKind;
use log::info;
use ordermap::OrderMap;
use std::path::PathBuf;
use strum::IntoEnumIterator;
use validator::Validate;

/// The pipelines of one config file, in the order spec, sheets, table mapping.
#[derive(Debug)]
pub struct DarsUnpack {
    pipelines: OrderMap<UnpackerKind, Pipeline>,
}

impl DarsUnpack {
    pub fn configured(&self) -> impl Iterator<Item = UnpackerKind> + '_ {
        UnpackerKind::iter().filter(|kind| self.pipelines.contains_key(kind))
    }

    /// Runs a single unpacker, or every configured one when `kind` is `None`.
    ///
    /// The first failing pipeline stops the run. Documents written by earlier
    /// pipelines stay on disk.
    pub fn run(&self, kind: Option<UnpackerKind>) -> Result<(), PipelineError> {
        match kind {
            Some(kind) => self
                .pipelines
                .get(&kind)
                .ok_or(PipelineError::NotConfigured(kind))?
                .run()
                .map(|_| ()),
            None => {
                for kind in self.configured() {
                    if let Some(pipeline) = self.pipelines.get(&kind) {
                        pipeline.run()?;
                    }
                }
                info!("Ran {} unpackers", self.pipelines.len());
                Ok(())
            }
        }
    }
}

impl TryFrom<UnpackConfig> for DarsUnpack {
    type Error = ConstructionError;

    fn try_from(config: UnpackConfig) -> Result<Self, Self::Error> {
        config.validate()?;

        let mut pipelines = OrderMap::new();
        if let Some(spec_config) = config.spec_unpacker {
            pipelines.insert(UnpackerKind::Spec, Pipeline::try_from(spec_config)?);
        }
        if let Some(sheet_config) = config.sheet_unpacker {
            pipelines.insert(UnpackerKind::Sheet, Pipeline::try_from(sheet_config)?);
        }
        if let Some(mapping_config) = config.table_mapping_unpacker {
            pipelines.insert(
                UnpackerKind::TableMapping,
                Pipeline::try_from(mapping_config)?,
            );
        }

        Ok(DarsUnpack { pipelines })
    }
}

impl TryFrom<PathBuf> for DarsUnpack {
    type Error = ConstructionError;

    fn try_from(path: PathBuf) -> Result<Self, Self::Error> {
        if !path.exists() {
            return Err(ConstructionError::NoConfigFileFound(path));
        }
        let config: UnpackConfig = ConfigLoader::load(&path)?;

        DarsUnpack::try_from(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SheetSource, SheetUnpackerConfig, SpecSource, SpecUnpackerConfig};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_configured_in_fixed_order() {
        let config = UnpackConfig {
            spec_unpacker: Some(SpecUnpackerConfig::new(
                "dars_spec_excels",
                vec![SpecSource::new("pci.xlsx", "pci_enhanced")],
            )),
            sheet_unpacker: Some(SheetUnpackerConfig::new(
                "excels_to_unpack",
                vec![SheetSource::new("dictionary.xlsx")],
            )),
            table_mapping_unpacker: None,
        };

        let unpack = DarsUnpack::try_from(config).unwrap();
        let kinds: Vec<UnpackerKind> = unpack.configured().collect();
        assert_eq!(kinds, [UnpackerKind::Spec, UnpackerKind::Sheet]);
    }

    #[rstest]
    fn test_run_unconfigured_unpacker() {
        let unpack = DarsUnpack::try_from(UnpackConfig::default()).unwrap();
        for kind in UnpackerKind::iter() {
            let err = unpack.run(Some(kind)).unwrap_err();
            assert!(matches!(err, PipelineError::NotConfigured(k) if k == kind));
        }
        assert!(unpack.run(None).is_ok());
    }

    #[rstest]
    fn test_try_from_missing_path() {
        let result = DarsUnpack::try_from(PathBuf::from("does/not/exist.yaml"));
        assert!(matches!(
            result,
            Err(ConstructionError::NoConfigFileFound(_))
        ));
    }
}
