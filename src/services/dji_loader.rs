use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;

use crate::api_models::dji::{
    DjiRow, COL_CHANGE_PCT, COL_CLOSE, COL_DATE, COL_HIGH, COL_LOW, COL_OPEN, COL_VOLUME,
};
use crate::services::dataset::{self, DatasetError};
use crate::utils::number_parser::{parse_grouped, parse_volume};
use crate::utils::percent::parse_percent;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// 各列在表头中的位置
struct ColumnIndex {
    date: usize,
    close: usize,
    open: usize,
    high: usize,
    low: usize,
    volume: usize,
    change_pct: usize,
}

impl ColumnIndex {
    fn resolve(headers: &[String]) -> Result<Self, DatasetError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))
        };
        Ok(Self {
            date: find(COL_DATE)?,
            close: find(COL_CLOSE)?,
            open: find(COL_OPEN)?,
            high: find(COL_HIGH)?,
            low: find(COL_LOW)?,
            volume: find(COL_VOLUME)?,
            change_pct: find(COL_CHANGE_PCT)?,
        })
    }
}

/// 读取指数日线 CSV，转换为数值/日期并按日期升序返回
pub fn load_dji(path: &Path) -> Result<Vec<DjiRow>, DatasetError> {
    let file = dataset::open_file(path)?;
    let rows = parse_dji(file)?;
    tracing::debug!("loaded {} DJI rows from {}", rows.len(), path.display());
    Ok(rows)
}

pub fn parse_dji<R: Read>(input: R) -> Result<Vec<DjiRow>, DatasetError> {
    let mut reader = dataset::csv_reader(input);
    let headers = dataset::headers(&mut reader)?;
    let idx = ColumnIndex::resolve(&headers)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(normalize_record(&record, &idx)?);
    }

    // 稳定排序，同一天的记录保持文件中的先后
    rows.sort_by_key(|r| r.date);
    Ok(rows)
}

fn normalize_record(record: &StringRecord, idx: &ColumnIndex) -> Result<DjiRow, DatasetError> {
    let row = dataset::line_of(record);
    let raw_date = record.get(idx.date).unwrap_or("");

    Ok(DjiRow {
        date: parse_date(raw_date).ok_or_else(|| DatasetError::InvalidDate {
            row,
            value: raw_date.to_string(),
        })?,
        close: number_cell(record, idx.close, COL_CLOSE, parse_grouped)?,
        open: number_cell(record, idx.open, COL_OPEN, parse_grouped)?,
        high: number_cell(record, idx.high, COL_HIGH, parse_grouped)?,
        low: number_cell(record, idx.low, COL_LOW, parse_grouped)?,
        volume: number_cell(record, idx.volume, COL_VOLUME, parse_volume)?,
        change_pct: number_cell(record, idx.change_pct, COL_CHANGE_PCT, parse_percent)?,
    })
}

fn number_cell(
    record: &StringRecord,
    index: usize,
    column: &str,
    parse: fn(&str) -> Option<f64>,
) -> Result<f64, DatasetError> {
    let raw = record.get(index).unwrap_or("");
    parse(raw).ok_or_else(|| DatasetError::InvalidNumber {
        row: dataset::line_of(record),
        column: column.to_string(),
        value: raw.to_string(),
    })
}

/// "2024- 01-02 " -> 2024-01-02，所有空格都会被移除
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let cleaned: String = raw.chars().filter(|c| *c != ' ').collect();
    NaiveDate::parse_from_str(&cleaned, DATE_FORMAT).ok()
}
