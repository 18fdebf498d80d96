use ::std::path::PathBuf;
use lazy_static::lazy_static;
use worksheet_generate::render::{parse_columns, OutputFormat, DEFAULT_COLUMNS};

lazy_static!{
    pub static ref OUTPUT_DIR: PathBuf = {
        dotenvy::var("WORKSHEET_OUTPUT_DIR").map(PathBuf::from).unwrap_or_else(|_| PathBuf::from("."))
    };
    pub static ref COLUMNS: usize = {
        match dotenvy::var("WORKSHEET_COLUMNS") {
            Ok(columns) => parse_columns(&columns).unwrap_or_else(|err| {
                tracing::warn!("Ignoring WORKSHEET_COLUMNS, {err}, falling back to {DEFAULT_COLUMNS}");
                DEFAULT_COLUMNS
            }),
            Err(_) => DEFAULT_COLUMNS,
        }
    };
    pub static ref FORMAT: OutputFormat = {
        match dotenvy::var("WORKSHEET_FORMAT") {
            Ok(format) => format.parse().unwrap_or_else(|err| {
                tracing::warn!("{err}, falling back to pdf");
                OutputFormat::Pdf
            }),
            Err(_) => OutputFormat::Pdf,
        }
    };
}

pub fn default_file_name(max_number: i64, count: i64, format: OutputFormat) -> String {
    format!("within-{max_number}-add-sub-{count}.{}", format.extension())
}
