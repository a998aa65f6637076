/// "0.50%" -> 0.5，保留百分数本身的数值，不换算成小数
pub fn parse_percent(s: &str) -> Option<f64> {
    let cleaned = s.replace('%', "");
    let raw = cleaned.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}
