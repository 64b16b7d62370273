//! Field coercion over loosely-typed producer JSON.
//!
//! Every accessor returns a concrete value. When the input is absent, of the wrong type,
//! or outside the allowed set, the accessor records the field path in the report and hands
//! back the default instead.

use serde::Serialize;
use serde_json::Value;

static NULL: Value = Value::Null;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultReason {
    Missing,
    WrongType,
    OutOfRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefaultedField {
    pub path: String,
    pub reason: DefaultReason,
}

/// Which fields fell back to defaults during one normalization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoercionReport {
    pub defaulted: Vec<DefaultedField>,
}

impl CoercionReport {
    pub fn is_clean(&self) -> bool {
        self.defaulted.is_empty()
    }

    pub fn reason_for(&self, path: &str) -> Option<DefaultReason> {
        self.defaulted
            .iter()
            .find(|d| d.path == path)
            .map(|d| d.reason)
    }
}

#[derive(Debug, Default)]
pub(crate) struct Coercer {
    path: Vec<String>,
    report: CoercionReport,
}

impl Coercer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn finish(self) -> CoercionReport {
        self.report
    }

    pub(crate) fn note(&mut self, key: &str, reason: DefaultReason) {
        let path = if self.path.is_empty() {
            key.to_string()
        } else if key.is_empty() {
            self.path.join(".")
        } else {
            format!("{}.{key}", self.path.join("."))
        };
        self.report.defaulted.push(DefaultedField { path, reason });
    }

    /// Looks up the first present key. A missing key is only recorded when `obj` is an
    /// object; lookups under an already-defaulted parent stay quiet.
    pub(crate) fn field<'v>(&mut self, obj: &'v Value, keys: &[&str]) -> Option<&'v Value> {
        self.keyed(obj, keys).map(|(_, v)| v)
    }

    /// `field`, plus the key that actually held the value, so later notes name it.
    fn keyed<'v, 'k>(&mut self, obj: &'v Value, keys: &[&'k str]) -> Option<(&'k str, &'v Value)> {
        let map = obj.as_object()?;
        let found = keys
            .iter()
            .find_map(|k| map.get(*k).filter(|v| !v.is_null()).map(|v| (*k, v)));
        if found.is_none() {
            if let Some(first) = keys.first() {
                self.note(first, DefaultReason::Missing);
            }
        }
        found
    }

    pub(crate) fn string(&mut self, obj: &Value, keys: &[&str]) -> String {
        match self.keyed(obj, keys) {
            Some((_, Value::String(s))) => s.trim().to_string(),
            Some((key, _)) => {
                self.note(key, DefaultReason::WrongType);
                String::new()
            }
            None => String::new(),
        }
    }

    pub(crate) fn u32(&mut self, obj: &Value, keys: &[&str]) -> u32 {
        let Some((key, v)) = self.keyed(obj, keys) else {
            return 0;
        };
        match as_u32(v) {
            Ok(n) => n,
            Err(reason) => {
                self.note(key, reason);
                0
            }
        }
    }

    pub(crate) fn f64(&mut self, obj: &Value, keys: &[&str]) -> f64 {
        let Some((key, v)) = self.keyed(obj, keys) else {
            return 0.0;
        };
        match v.as_f64() {
            Some(n) if n.is_finite() => n,
            _ => {
                self.note(key, DefaultReason::WrongType);
                0.0
            }
        }
    }

    /// String enum field. `None` when absent, non-string, or not a recognized value; the
    /// caller picks the default.
    pub(crate) fn enumeration<T>(
        &mut self,
        obj: &Value,
        keys: &[&str],
        parse: fn(&str) -> Option<T>,
    ) -> Option<T> {
        match self.keyed(obj, keys)? {
            (key, Value::String(s)) => {
                let parsed = parse(s);
                if parsed.is_none() {
                    self.note(key, DefaultReason::OutOfRange);
                }
                parsed
            }
            (key, _) => {
                self.note(key, DefaultReason::WrongType);
                None
            }
        }
    }

    /// Runs `f` on the nested object at `key`, or on `null` (so every inner field defaults)
    /// when the value is absent or not an object.
    pub(crate) fn nested<T>(
        &mut self,
        obj: &Value,
        key: &str,
        f: impl FnOnce(&mut Self, &Value) -> T,
    ) -> T {
        let inner = match self.field(obj, &[key]) {
            Some(v @ Value::Object(_)) => v,
            Some(_) => {
                self.note(key, DefaultReason::WrongType);
                &NULL
            }
            None => &NULL,
        };
        self.scoped(key, |c| f(c, inner))
    }

    /// Like `nested`, but an absent value yields `None` without being recorded.
    pub(crate) fn optional_nested<T>(
        &mut self,
        obj: &Value,
        key: &str,
        f: impl FnOnce(&mut Self, &Value) -> T,
    ) -> Option<T> {
        match obj.as_object()?.get(key) {
            None | Some(Value::Null) => None,
            Some(v @ Value::Object(_)) => Some(self.scoped(key, |c| f(c, v))),
            Some(_) => {
                self.note(key, DefaultReason::WrongType);
                None
            }
        }
    }

    /// Array of objects. Entries that are not objects are skipped.
    pub(crate) fn objects<T>(
        &mut self,
        obj: &Value,
        key: &str,
        mut f: impl FnMut(&mut Self, usize, &Value) -> T,
    ) -> Vec<T> {
        let Some(items) = self.array(obj, key) else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            let segment = format!("{key}[{idx}]");
            if item.is_object() {
                out.push(self.scoped(&segment, |c| f(c, idx, item)));
            } else {
                self.note(&segment, DefaultReason::WrongType);
            }
        }
        out
    }

    /// Array of strings. Non-string and blank entries are skipped.
    pub(crate) fn strings(&mut self, obj: &Value, key: &str) -> Vec<String> {
        let Some(items) = self.array(obj, key) else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            match item.as_str().map(str::trim) {
                Some(s) if !s.is_empty() => out.push(s.to_string()),
                _ => self.note(&format!("{key}[{idx}]"), DefaultReason::WrongType),
            }
        }
        out
    }

    fn array<'v>(&mut self, obj: &'v Value, key: &str) -> Option<&'v Vec<Value>> {
        match self.field(obj, &[key])? {
            Value::Array(items) => Some(items),
            _ => {
                self.note(key, DefaultReason::WrongType);
                None
            }
        }
    }

    pub(crate) fn scoped<T>(&mut self, segment: &str, f: impl FnOnce(&mut Self) -> T) -> T {
        self.path.push(segment.to_string());
        let out = f(self);
        self.path.pop();
        out
    }
}

/// Non-negative integer; floats are rounded.
pub(crate) fn as_u64(v: &Value) -> Result<u64, DefaultReason> {
    if let Some(n) = v.as_u64() {
        return Ok(n);
    }
    match v.as_f64() {
        Some(n) if n.is_finite() && n >= 0.0 && n <= u64::MAX as f64 => Ok(n.round() as u64),
        Some(_) => Err(DefaultReason::OutOfRange),
        None => Err(DefaultReason::WrongType),
    }
}

pub(crate) fn as_u32(v: &Value) -> Result<u32, DefaultReason> {
    as_u64(v).and_then(|n| u32::try_from(n).map_err(|_| DefaultReason::OutOfRange))
}
