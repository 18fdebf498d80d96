use ::std::{fmt, fs, io, io::Write, path::Path, str};
use thiserror::Error;

use crate::generate::{self, sheet::Sheet, GenerationError};

pub mod grid;
pub mod pdf;
pub mod text;

pub const DEFAULT_COLUMNS: usize = 4;
pub const HEADER_CELLS: [&'static str; 4] = ["Name:", "Date:", "Score:", "Rating:"];

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
    #[error("pdf error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("failed to write document: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode json: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Archive(#[from] GenerationError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pdf,
    Text,
    Json,
    Archive,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Archive => "msgpack.gz",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Archive => "archive",
        };
        write!(f, "{name}")
    }
}

impl str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pdf" => Ok(OutputFormat::Pdf),
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "archive" | "msgpack" => Ok(OutputFormat::Archive),
            _ => Err(format!("'{}' is not a valid OutputFormat", s)),
        }
    }
}

/// Parses a grid column count, rejecting zero.
pub fn parse_columns(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(0) => Err("a grid needs at least one column".to_string()),
        Ok(columns) => Ok(columns),
        Err(err) => Err(format!("'{value}' is not a valid column count: {err}")),
    }
}

pub fn render_sheet<W: Write>(sheet: &Sheet, format: OutputFormat, columns: usize, writer: &mut W) -> Result<(), RenderError> {
    match format {
        OutputFormat::Pdf => {
            let pages = pdf::write_pdf(sheet, columns, writer)?;
            tracing::debug!("Rendered sheet {} onto {pages} page(s)", sheet.id());
        },
        OutputFormat::Text => text::write_text(sheet, columns, writer)?,
        OutputFormat::Json => serde_json::to_writer_pretty(&mut *writer, sheet)?,
        OutputFormat::Archive => generate::write_archive(sheet, &mut *writer)?,
    }
    Ok(())
}

/// Renders in memory and only touches `path` once the whole document is ready.
pub fn save_sheet(sheet: &Sheet, format: OutputFormat, columns: usize, path: &Path) -> Result<(), RenderError> {
    let mut buf = Vec::new();
    render_sheet(sheet, format, columns, &mut buf)?;
    fs::write(path, &buf)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};
    use common_types::Generate::{Category, GenerateRequestBuilder};
    use super::*;

    #[test]
    fn formats_parse_and_display() {
        for format in [OutputFormat::Pdf, OutputFormat::Text, OutputFormat::Json, OutputFormat::Archive] {
            assert_eq!(format.to_string().parse::<OutputFormat>(), Ok(format));
        }
        assert_eq!("TXT".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("docx".parse::<OutputFormat>().is_err());
    }

    fn small_sheet(seed: u64) -> Sheet {
        let mut rng = StdRng::seed_from_u64(seed);
        let request = GenerateRequestBuilder::default()
            .exercise_count(6)
            .categories(vec![Category::SubNoBorrow])
            .build()
            .unwrap();
        generate::generate(&request, &mut rng).unwrap()
    }

    #[test]
    fn column_counts_parse() {
        assert_eq!(parse_columns("3"), Ok(3));
        assert_eq!(parse_columns(" 5 "), Ok(5));
        assert!(parse_columns("0").is_err());
        assert!(parse_columns("-1").is_err());
        assert!(parse_columns("four").is_err());
    }

    #[test]
    fn failed_render_leaves_existing_file_untouched() {
        let sheet = small_sheet(3);
        let path = ::std::env::temp_dir().join(format!("worksheet-{}.txt", sheet.id()));
        fs::write(&path, "previous sheet").unwrap();

        let result = save_sheet(&sheet, OutputFormat::Text, 0, &path);
        assert!(matches!(result, Err(RenderError::InvalidLayout(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), "previous sheet");

        save_sheet(&sheet, OutputFormat::Text, DEFAULT_COLUMNS, &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        for equation in sheet.equations() {
            assert!(text.contains(&equation.rendered));
        }
    }

    #[test]
    fn failed_render_creates_no_file() {
        let sheet = small_sheet(4);
        let path = ::std::env::temp_dir().join(format!("worksheet-{}.pdf", sheet.id()));
        assert!(save_sheet(&sheet, OutputFormat::Pdf, 0, &path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn json_output_carries_every_rendered_equation() {
        let sheet = small_sheet(21);

        let mut buf = Vec::new();
        render_sheet(&sheet, OutputFormat::Json, DEFAULT_COLUMNS, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let equations = value["equations"].as_array().unwrap();
        assert_eq!(equations.len(), 6);
        for (json, equation) in equations.iter().zip(sheet.equations()) {
            assert_eq!(json["rendered"], equation.rendered.as_str());
        }
    }
}
