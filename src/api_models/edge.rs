use serde_json::{Map, Value};

/// 不做 schema 约束的一行数据，key 保持表头顺序
pub type EdgeRow = Map<String, Value>;
