use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use serde_json::{Number, Value};

use crate::api_models::edge::EdgeRow;
use crate::services::dataset::{self, DatasetError};

/// 视为缺失值的单元格字面量，与常见 dataframe 读取器的默认集合一致
const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// 整列统一的类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    /// 整列都是缺失值
    Empty,
    Int,
    Float,
    Bool,
    Text,
}

impl ColumnKind {
    /// 按列推断：全部为整数 -> Int（有缺失时退为 Float），其次 Float、Bool，否则整列保留字符串
    fn infer<'a>(cells: impl Iterator<Item = &'a str>) -> Self {
        let mut seen = false;
        let mut has_missing = false;
        let (mut all_int, mut all_float, mut all_bool) = (true, true, true);

        for cell in cells {
            if is_missing(cell) {
                has_missing = true;
                continue;
            }
            seen = true;
            let v = cell.trim();
            all_int &= v.parse::<i64>().is_ok();
            all_float &= parse_finite(v).is_some();
            all_bool &= parse_bool(v).is_some();
        }

        match (seen, all_int, all_float, all_bool) {
            (false, ..) => ColumnKind::Empty,
            (true, true, _, _) if has_missing => ColumnKind::Float,
            (true, true, _, _) => ColumnKind::Int,
            (true, false, true, _) => ColumnKind::Float,
            (true, false, false, true) => ColumnKind::Bool,
            _ => ColumnKind::Text,
        }
    }

    fn convert(self, cell: &str) -> Value {
        if is_missing(cell) {
            return Value::Null;
        }
        let v = cell.trim();
        match self {
            ColumnKind::Empty => Value::Null,
            ColumnKind::Int => v.parse::<i64>().map(Value::from).unwrap_or(Value::Null),
            ColumnKind::Float => parse_finite(v)
                .and_then(Number::from_f64)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            ColumnKind::Bool => parse_bool(v).map(Value::Bool).unwrap_or(Value::Null),
            ColumnKind::Text => Value::String(cell.to_string()),
        }
    }
}

/// 按文件顺序原样读取，不做列名映射，只按列做基础类型推断
pub fn load_edges(path: &Path) -> Result<Vec<EdgeRow>, DatasetError> {
    let file = dataset::open_file(path)?;
    let rows = parse_edges(file)?;
    tracing::debug!("loaded {} edge rows from {}", rows.len(), path.display());
    Ok(rows)
}

pub fn parse_edges<R: Read>(input: R) -> Result<Vec<EdgeRow>, DatasetError> {
    let mut reader = dataset::csv_reader(input);
    let headers = dedupe_headers(dataset::headers(&mut reader)?);
    let records = reader
        .records()
        .collect::<Result<Vec<StringRecord>, _>>()?;

    let kinds: Vec<ColumnKind> = (0..headers.len())
        .map(|i| ColumnKind::infer(records.iter().map(|r| r.get(i).unwrap_or(""))))
        .collect();

    Ok(records
        .iter()
        .map(|record| {
            headers
                .iter()
                .zip(&kinds)
                .zip(record.iter())
                .map(|((key, kind), cell)| (key.clone(), kind.convert(cell)))
                .collect()
        })
        .collect())
}

/// 重复列名依次改为 name.1、name.2，改名后仍冲突则继续追加
fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    headers
        .into_iter()
        .map(|name| {
            let mut col = name;
            let mut cur = counts.get(&col).copied().unwrap_or(0);
            while cur > 0 {
                counts.insert(col.clone(), cur + 1);
                col = format!("{}.{}", col, cur);
                cur = counts.get(&col).copied().unwrap_or(0);
            }
            counts.insert(col.clone(), cur + 1);
            col
        })
        .collect()
}

fn is_missing(cell: &str) -> bool {
    NA_VALUES.contains(&cell.trim())
}

fn parse_finite(v: &str) -> Option<f64> {
    v.parse::<f64>().ok().filter(|f| f.is_finite())
}

fn parse_bool(v: &str) -> Option<bool> {
    match v {
        "True" | "true" | "TRUE" => Some(true),
        "False" | "false" | "FALSE" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SANKEY: &str = "source,target,value\n\
        Revenue Product,Gross profit,120\n\
        Revenue Service,Gross profit,45.5\n\
        Gross profit,Operating profit,90\n";

    #[test]
    fn keeps_file_order_and_row_count() {
        let rows = parse_edges(SANKEY.as_bytes()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["source"], json!("Revenue Product"));
        assert_eq!(rows[1]["source"], json!("Revenue Service"));
        assert_eq!(rows[2]["target"], json!("Operating profit"));
    }

    #[test]
    fn key_set_matches_header() {
        let rows = parse_edges(SANKEY.as_bytes()).unwrap();
        for row in &rows {
            let keys: Vec<&str> = row.keys().map(String::as_str).collect();
            assert_eq!(keys, vec!["source", "target", "value"]);
        }
    }

    #[test]
    fn float_column_types_every_cell_as_float() {
        let rows = parse_edges(SANKEY.as_bytes()).unwrap();
        assert_eq!(rows[0]["value"], json!(120.0));
        assert_eq!(rows[1]["value"], json!(45.5));
        assert_eq!(rows[2]["value"], json!(90.0));
    }

    #[test]
    fn integer_column_stays_integer() {
        let rows = parse_edges("source,value\na,10\nb,-3\n".as_bytes()).unwrap();
        assert_eq!(rows[0]["value"], json!(10));
        assert_eq!(rows[1]["value"], json!(-3));
    }

    #[test]
    fn mixed_column_is_kept_as_text() {
        let rows = parse_edges("id,value\n1,10\nabc,2.5\n".as_bytes()).unwrap();
        assert_eq!(
            serde_json::to_value(&rows).unwrap(),
            json!([
                {"id": "1", "value": 10.0},
                {"id": "abc", "value": 2.5}
            ])
        );
    }

    #[test]
    fn missing_cell_turns_integer_column_into_floats() {
        let rows = parse_edges("source,value\na,10\nb,\nc,N/A\nd,7\n".as_bytes()).unwrap();
        let values: Vec<Value> = rows.iter().map(|r| r["value"].clone()).collect();
        assert_eq!(values, vec![json!(10.0), Value::Null, Value::Null, json!(7.0)]);
    }

    #[test]
    fn missing_cell_in_text_column_is_null() {
        let rows = parse_edges("source,target\na,\nb,c\n".as_bytes()).unwrap();
        assert_eq!(rows[0]["target"], Value::Null);
        assert_eq!(rows[1]["target"], json!("c"));
    }

    #[test]
    fn bool_and_empty_columns() {
        let rows = parse_edges("flag,note\nTrue,\nfalse,\n".as_bytes()).unwrap();
        assert_eq!(rows[0]["flag"], json!(true));
        assert_eq!(rows[1]["flag"], json!(false));
        assert_eq!(rows[0]["note"], Value::Null);
    }

    #[test]
    fn non_finite_literal_makes_column_text() {
        let rows = parse_edges("value\n1.5\ninf\n".as_bytes()).unwrap();
        assert_eq!(rows[0]["value"], json!("1.5"));
        assert_eq!(rows[1]["value"], json!("inf"));
    }

    #[test]
    fn duplicate_headers_are_renamed() {
        let rows = parse_edges("a,a,a,b\n1,2,3,x\n".as_bytes()).unwrap();
        let keys: Vec<&str> = rows[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "a.1", "a.2", "b"]);
        assert_eq!(rows[0]["a.2"], json!(3));
    }

    #[test]
    fn renamed_header_avoids_existing_name() {
        let names = dedupe_headers(vec!["a".into(), "a".into(), "a.1".into()]);
        assert_eq!(names, vec!["a", "a.1", "a.1.1"]);
    }

    #[test]
    fn ragged_row_fails() {
        let err = parse_edges("a,b\n1,2\n3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::Csv(_)));
    }

    #[test]
    fn header_only_file_is_empty() {
        let rows = parse_edges("source,target,value\n".as_bytes()).unwrap();
        assert!(rows.is_empty());
    }
}
