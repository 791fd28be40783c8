//! [`Source`] implementation over a merged figment.

use figment::Figment;
use figment::value::Value;
use linkcfg_core::Source;

/// Typed, lenient lookups over a [`Figment`].
///
/// Values are coerced the way loosely typed config files expect:
///
/// - strings read numbers and booleans in their text form;
/// - integers parse numeric strings, read `true` as `1` and truncate
///   finite floats toward zero;
/// - booleans parse `1/t/true` and `0/f/false` (any case) and read
///   non-zero numbers as `true`.
///
/// Anything unset or unconvertible reads as the kind's zero value.
#[derive(Debug, Clone)]
pub struct FigmentSource {
    figment: Figment,
}

impl FigmentSource {
    pub fn new(figment: Figment) -> Self {
        Self { figment }
    }

    fn find(&self, name: &str) -> Option<Value> {
        self.figment.find_value(name).ok()
    }
}

impl Source for FigmentSource {
    fn get_string(&self, name: &str) -> String {
        match self.find(name) {
            Some(Value::String(_, s)) => s,
            Some(Value::Char(_, c)) => c.to_string(),
            Some(Value::Bool(_, b)) => b.to_string(),
            Some(value) => value
                .deserialize::<i64>()
                .map(|n| n.to_string())
                .or_else(|_| value.deserialize::<f64>().map(|f| f.to_string()))
                .unwrap_or_default(),
            None => String::new(),
        }
    }

    fn get_int(&self, name: &str) -> i64 {
        match self.find(name) {
            Some(Value::String(_, s)) => s.trim().parse().unwrap_or_default(),
            Some(Value::Bool(_, b)) => i64::from(b),
            Some(value) => value
                .deserialize::<i64>()
                .or_else(|_| value.deserialize::<f64>().map(truncate))
                .unwrap_or_default(),
            None => 0,
        }
    }

    fn get_bool(&self, name: &str) -> bool {
        match self.find(name) {
            Some(Value::Bool(_, b)) => b,
            Some(Value::String(_, s)) => parse_bool(&s).unwrap_or_default(),
            Some(value) => value.deserialize::<i64>().is_ok_and(|n| n != 0),
            None => false,
        }
    }
}

/// Drops the fraction of a finite float; NaN and infinities read as zero.
fn truncate(f: f64) -> i64 {
    if f.is_finite() { f.trunc() as i64 } else { 0 }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Some(true),
        "0" | "f" | "false" => Some(false),
        _ => None,
    }
}
