//! 受信パラメータの緩い型解釈
//!
//! 呼び出し元は型の緩い値を送ってくる。IDは数値か数値文字列で届き、
//! フラグは`0`/`"0"`で届くことがある。ここのヘルパーは空判定・整数化・
//! 文字列化について一貫した解釈を提供する。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 受信リクエストのパラメータ
///
/// 操作はリクエストの暗黙の状態を読まない。
/// トランスポート層がこの値を構築し、明示的に渡す。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestParams(Map<String, Value>);

impl RequestParams {
    pub fn new(params: Map<String, Value>) -> Self {
        Self(params)
    }

    /// `data`ペイロードだけを持つパラメータを作る
    pub fn with_data(data: Value) -> Self {
        let mut params = Map::new();
        params.insert("data".to_string(), data);
        Self(params)
    }

    /// 名前でパラメータを取得する（明示的な`null`は未指定扱い）
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name).filter(|value| !value.is_null())
    }

    /// `data`に載った通知ペイロード
    pub fn data(&self) -> Option<&Value> {
        self.get("data")
    }
}

impl From<Map<String, Value>> for RequestParams {
    fn from(params: Map<String, Value>) -> Self {
        Self::new(params)
    }
}

/// ペイロードのフィールド参照。`null`やオブジェクト以外は`None`
pub fn field<'a>(payload: &'a Value, name: &str) -> Option<&'a Value> {
    payload.get(name).filter(|value| !value.is_null())
}

/// 緩い空判定：null、false、ゼロ、`""`、`"0"`、空のコレクション
pub fn is_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64().is_none_or(|f| f == 0.0),
        Some(Value::String(s)) => s.is_empty() || s == "0",
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(map)) => map.is_empty(),
    }
}

/// 整数への変換
///
/// 文字列は先頭の数値部分から読む（`"12abc"`は12、`"1e3"`は1000）。
/// 読めないものは0。
pub fn to_int(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Bool(b)) => i64::from(*b),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => parse_leading_int(s),
        _ => 0,
    }
}

/// 文字列への変換。コレクションとnullは`""`
pub fn to_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(true)) => "1".to_string(),
        _ => String::new(),
    }
}

fn digits_end(bytes: &[u8], start: usize) -> usize {
    let digits = bytes[start..].iter().take_while(|b| b.is_ascii_digit());
    start + digits.count()
}

/// 先頭の数値部分（符号、整数部、小数部、指数部）を読んで整数に丸める
fn parse_leading_int(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let bytes = trimmed.as_bytes();

    let sign_len = usize::from(matches!(bytes.first(), Some(b'-' | b'+')));
    let int_end = digits_end(bytes, sign_len);
    let mut end = int_end;
    let mut has_digits = int_end > sign_len;

    // 小数点は1つだけ
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_end(bytes, end + 1);
        if has_digits || frac_end > end + 1 {
            end = frac_end;
            has_digits = true;
        }
    }
    if !has_digits {
        return 0;
    }

    // 指数部は数字が続く場合のみ
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exp_sign = usize::from(matches!(bytes.get(end + 1), Some(b'-' | b'+')));
        let exp_start = end + 1 + exp_sign;
        let exp_end = digits_end(bytes, exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    let prefix = &trimmed[..end];
    prefix
        .parse::<i64>()
        .ok()
        .or_else(|| prefix.parse::<f64>().ok().map(|f| f.trunc() as i64))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_empty_follows_loose_semantics() {
        assert!(is_empty(None));
        assert!(is_empty(Some(&json!(null))));
        assert!(is_empty(Some(&json!(0))));
        assert!(is_empty(Some(&json!(0.0))));
        assert!(is_empty(Some(&json!(""))));
        assert!(is_empty(Some(&json!("0"))));
        assert!(is_empty(Some(&json!(false))));
        assert!(is_empty(Some(&json!([]))));
        assert!(is_empty(Some(&json!({}))));

        assert!(!is_empty(Some(&json!(1))));
        assert!(!is_empty(Some(&json!("00"))));
        assert!(!is_empty(Some(&json!({"to": 0}))));
    }

    #[test]
    fn test_to_int_coercion() {
        assert_eq!(to_int(Some(&json!(17))), 17);
        assert_eq!(to_int(Some(&json!("17"))), 17);
        assert_eq!(to_int(Some(&json!(" 12abc"))), 12);
        assert_eq!(to_int(Some(&json!("4.9"))), 4);
        assert_eq!(to_int(Some(&json!(3.7))), 3);
        assert_eq!(to_int(Some(&json!(true))), 1);
        assert_eq!(to_int(Some(&json!("abc"))), 0);
        assert_eq!(to_int(Some(&json!([1]))), 0);
        assert_eq!(to_int(None), 0);
    }

    #[test]
    fn test_to_int_reads_only_the_numeric_prefix() {
        assert_eq!(parse_leading_int("1.2.3"), 1);
        assert_eq!(parse_leading_int("-7.5kg"), -7);
        assert_eq!(parse_leading_int(".5"), 0);
        assert_eq!(parse_leading_int("+3"), 3);
        assert_eq!(parse_leading_int("-"), 0);
        assert_eq!(parse_leading_int("."), 0);
    }

    #[test]
    fn test_to_int_applies_exponent() {
        assert_eq!(parse_leading_int("1e3"), 1000);
        assert_eq!(parse_leading_int("2.5E2"), 250);
        assert_eq!(parse_leading_int("15e-1"), 1);
        assert_eq!(parse_leading_int("4e"), 4);
        assert_eq!(parse_leading_int("4e+x"), 4);
    }

    #[test]
    fn test_to_text_coercion() {
        assert_eq!(to_text(Some(&json!("A-1"))), "A-1");
        assert_eq!(to_text(Some(&json!(2024))), "2024");
        assert_eq!(to_text(Some(&json!(true))), "1");
        assert_eq!(to_text(Some(&json!(false))), "");
        assert_eq!(to_text(Some(&json!({"a": 1}))), "");
        assert_eq!(to_text(None), "");
    }

    #[test]
    fn test_request_params_treats_null_data_as_absent() {
        let params = RequestParams::with_data(json!(null));
        assert!(params.data().is_none());

        let params = RequestParams::with_data(json!({"resellerId": 1}));
        assert_eq!(params.data(), Some(&json!({"resellerId": 1})));
    }
}
