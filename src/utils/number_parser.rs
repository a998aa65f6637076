//! 行情网站导出的展示格式数字（千分位、量级后缀）解析

const VOLUME_UNIT: f64 = 1_000_000.0;

/// 去掉千分位逗号后解析，"1,234.50" -> 1234.5
pub fn parse_grouped(s: &str) -> Option<f64> {
    parse_stripped(s, ',')
}

/// 成交量以百万为单位，"1.50M" -> 1_500_000.0
pub fn parse_volume(s: &str) -> Option<f64> {
    parse_stripped(s, 'M').map(|v| v * VOLUME_UNIT)
}

fn parse_stripped(raw: &str, strip: char) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != strip).collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    // nan / inf 序列化后会变成 null，按非法数字处理
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
