use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{Reader, ReaderBuilder, StringRecord};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing column: {0}")]
    MissingColumn(String),
    #[error("invalid number in column {column} at line {row}: {value:?}")]
    InvalidNumber {
        row: u64,
        column: String,
        value: String,
    },
    #[error("invalid date at line {row}: {value:?}")]
    InvalidDate { row: u64, value: String },
}

pub fn open_file(path: &Path) -> Result<File, DatasetError> {
    File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn csv_reader<R: Read>(input: R) -> Reader<R> {
    ReaderBuilder::new().has_headers(true).from_reader(input)
}

/// 表头，去掉 Excel 导出时可能残留的 BOM
pub fn headers<R: Read>(reader: &mut Reader<R>) -> Result<Vec<String>, DatasetError> {
    let headers = reader.headers()?;
    Ok(headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == 0 {
                h.trim_start_matches('\u{feff}').to_string()
            } else {
                h.to_string()
            }
        })
        .collect())
}

/// 文件中的行号（表头为第 1 行）
pub fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}
