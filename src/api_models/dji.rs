use chrono::NaiveDate;
use serde::Serialize;

/// 指数日线，序列化时沿用原始 CSV 的韩文列名作为 JSON key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DjiRow {
    #[serde(rename = "날짜")]
    pub date: NaiveDate,
    #[serde(rename = "종가")]
    pub close: f64,
    #[serde(rename = "시가")]
    pub open: f64,
    #[serde(rename = "고가")]
    pub high: f64,
    #[serde(rename = "저가")]
    pub low: f64,
    #[serde(rename = "거래량")]
    pub volume: f64,
    #[serde(rename = "변동 %")]
    pub change_pct: f64,
}

pub const COL_DATE: &str = "날짜";
pub const COL_CLOSE: &str = "종가";
pub const COL_OPEN: &str = "시가";
pub const COL_HIGH: &str = "고가";
pub const COL_LOW: &str = "저가";
pub const COL_VOLUME: &str = "거래량";
pub const COL_CHANGE_PCT: &str = "변동 %";
