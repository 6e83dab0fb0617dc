//! Lenient number deserializers and bounded strings for request payloads.
//!
//! Clients (spreadsheet exports, HTML forms) often send numbers as strings.
//! These accept a JSON number or a string holding one, and still reject
//! `null`, booleans, and anything that does not fit the column type.
//! String columns are checked against their `VARCHAR(n)` length here,
//! since SQLite stores longer values without complaint.

use std::fmt;

use serde::de::{self, Deserializer, Unexpected, Visitor};

struct IntVisitor;

impl<'de> Visitor<'de> for IntVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a 64-bit integer or a string holding one")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
        i64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
        // truncates toward zero: `10.5` -> 10; `i64::MAX as f64` is 2^63, already out of range
        if v.is_finite() && v >= i64::MIN as f64 && v < i64::MAX as f64 {
            Ok(v.trunc() as i64)
        } else {
            Err(E::invalid_value(Unexpected::Float(v), &self))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
        // strings must hold an integer; "10.5" is rejected
        v.trim()
            .parse::<i64>()
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}

struct FloatVisitor;

impl<'de> Visitor<'de> for FloatVisitor {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a finite number or a string holding one")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
        Ok(v)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
        match v.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(n),
            _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
        }
    }
}

struct BoundedStrVisitor {
    max_chars: usize,
}

impl<'de> Visitor<'de> for BoundedStrVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a string of at most {} characters", self.max_chars)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        let len = v.chars().count();
        if len > self.max_chars {
            return Err(E::invalid_length(len, &self));
        }
        Ok(v.to_owned())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        let len = v.chars().count();
        if len > self.max_chars {
            return Err(E::invalid_length(len, &self));
        }
        Ok(v)
    }
}

fn bounded_str<'de, D: Deserializer<'de>>(d: D, max_chars: usize) -> Result<String, D::Error> {
    d.deserialize_string(BoundedStrVisitor { max_chars })
}

/// `deserialize_with` target for `VARCHAR(50)` columns.
pub fn str_max_50<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    bounded_str(d, 50)
}

/// `deserialize_with` target for `VARCHAR(20)` columns.
pub fn str_max_20<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    bounded_str(d, 20)
}

/// `deserialize_with` target for integer columns.
pub fn int<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    d.deserialize_any(IntVisitor)
}

/// `deserialize_with` target for floating-point columns.
pub fn float<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    d.deserialize_any(FloatVisitor)
}
