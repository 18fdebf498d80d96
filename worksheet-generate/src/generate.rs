use ::std::io::Write;
use serde::Serialize;
use rmp_serde::Serializer;
use flate2::{Compression, write::GzEncoder};
use rand::RngCore;
use thiserror::Error;
use common_types::Generate::GenerateRequest;

pub mod checker;
pub mod engine;
pub mod equation;
pub mod formatter;
mod helper;
pub mod settings;
pub mod sheet;

use settings::Settings;
use sheet::Sheet;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("no equations could be generated for this configuration")]
    BatchEmpty,
    #[error("failed to serialize sheet: {0}")]
    SerializeError(#[from] rmp_serde::encode::Error),
    #[error("failed to compress sheet: {0}")]
    CompressionError(#[from] ::std::io::Error),
}

/// Validates `request` and assembles one sheet. Nothing is kept between calls.
pub fn generate(request: &GenerateRequest, rng: &mut dyn RngCore) -> Result<Sheet, GenerationError> {
    let settings = Settings::validate(request)?;
    tracing::info!(
        "Generating {} exercises within {} from {:?}",
        settings.exercise_count,
        settings.numeric_range,
        settings.categories
    );

    let mut sheet = Sheet::new(settings);
    sheet.populate(rng)?;

    tracing::info!("Sheet {} generated with {} exercises", sheet.id(), sheet.len());
    Ok(sheet)
}

/// MessagePack, gzip'd.
pub fn write_archive<W: Write>(sheet: &Sheet, writer: W) -> Result<(), GenerationError> {
    let mut serialize_buf = Vec::new();
    sheet.serialize(&mut Serializer::new(&mut serialize_buf))?;

    let mut encoder = GzEncoder::new(writer, Compression::default());
    if let Err(err) = encoder.write_all(&serialize_buf) {
        tracing::error!("Failed to write to compression buffer due to: {err}");
        return Err(GenerationError::CompressionError(err));
    }
    encoder.finish()?;
    Ok(())
}
