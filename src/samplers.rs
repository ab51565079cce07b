//! Built-in type samplers.

use serde_json::{Map, Number, Value};

use crate::error::SampleError;
use crate::merge::{Additional, Items, Schema};
use crate::registry::TypeSampler;
use crate::traverse::Traversal;

/// Number of entries sampled from an `additionalProperties` schema.
const ADDITIONAL_PROPERTY_COUNT: usize = 2;

/// Samples for well-known string formats.
const FORMAT_SAMPLES: &[(&str, &str)] = &[
    ("email", "user@example.com"),
    ("idn-email", "user@example.com"),
    ("password", "pa$$word"),
    ("date-time", "2019-08-24T14:15:22Z"),
    ("date", "2019-08-24"),
    ("time", "14:15:22Z"),
    ("duration", "P3D"),
    ("ipv4", "192.168.0.1"),
    ("ipv6", "2001:0db8:85a3:0000:0000:8a2e:0370:7334"),
    ("hostname", "example.com"),
    ("idn-hostname", "example.com"),
    ("uri", "http://example.com"),
    ("iri", "http://example.com"),
    ("uri-reference", "../dictionary"),
    ("iri-reference", "../dictionary"),
    ("uri-template", "http://example.com/{endpoint}"),
    ("uuid", "3fa85f64-5717-4562-b3fc-2c963f66afa6"),
    ("byte", "ZXhhbXBsZQ=="),
    ("binary", "<binary>"),
    ("json-pointer", "/json/pointer"),
    ("relative-json-pointer", "1/relative/json/pointer"),
    ("regex", "/regex/"),
];

const DEFAULT_STRING: &str = "string";

/// Longest string produced by padding to `minLength`.
const MAX_PADDED_LENGTH: usize = 64 * 1024;

/// `{}` with declared properties in order, then sampled additional ones.
pub struct ObjectSampler;

impl TypeSampler for ObjectSampler {
    fn sample<'g>(
        &self,
        schema: &Schema<'g>,
        traversal: &mut Traversal<'_, 'g>,
    ) -> Result<Value, SampleError> {
        let options = traversal.options().clone();
        let mut object = Map::new();

        for (name, property) in &schema.properties {
            if options.skip_non_required && !schema.is_required(name) {
                continue;
            }
            let sampled = traversal.visit_child(property.clone())?;
            if (options.skip_read_only && sampled.read_only)
                || (options.skip_write_only && sampled.write_only)
            {
                continue;
            }
            object.insert((*name).to_string(), sampled.value);
        }

        if let Some(Additional::Schema(additional)) = &schema.additional_properties {
            let prefix = schema
                .string("x-additionalPropertiesName")
                .unwrap_or("property");
            for n in 1..=ADDITIONAL_PROPERTY_COUNT {
                let key = format!("{prefix}{n}");
                if object.contains_key(&key) {
                    continue;
                }
                let sampled = traversal.visit_child(additional.clone())?;
                if (options.skip_read_only && sampled.read_only)
                    || (options.skip_write_only && sampled.write_only)
                {
                    continue;
                }
                object.insert(key, sampled.value);
            }
        }

        Ok(Value::Object(object))
    }
}

/// One sample per tuple entry, or `max(minItems, 1)` samples of `items`.
pub struct ArraySampler;

impl TypeSampler for ArraySampler {
    fn sample<'g>(
        &self,
        schema: &Schema<'g>,
        traversal: &mut Traversal<'_, 'g>,
    ) -> Result<Value, SampleError> {
        let mut array = Vec::new();
        match &schema.items {
            None => {}
            Some(Items::Tuple(entries)) => {
                for entry in entries {
                    array.push(traversal.visit_child(entry.clone())?.value);
                }
            }
            Some(Items::Single(item)) => {
                let min = schema.unsigned("minItems").unwrap_or(0).max(1);
                let count = schema.unsigned("maxItems").map_or(min, |max| min.min(max));
                for _ in 0..count {
                    array.push(traversal.visit_child(item.clone())?.value);
                }
            }
        }
        Ok(Value::Array(array))
    }
}

/// A format sample or `"string"`, stretched or cut to the length bounds.
pub struct StringSampler;

impl TypeSampler for StringSampler {
    fn sample<'g>(
        &self,
        schema: &Schema<'g>,
        _traversal: &mut Traversal<'_, 'g>,
    ) -> Result<Value, SampleError> {
        let base = schema
            .string("format")
            .and_then(format_sample)
            .unwrap_or(DEFAULT_STRING);
        let min = schema.unsigned("minLength").map(saturating_usize);
        let max = schema.unsigned("maxLength").map(saturating_usize);
        Ok(Value::String(fit_length(base, min, max)))
    }
}

fn format_sample(format: &str) -> Option<&'static str> {
    FORMAT_SAMPLES
        .iter()
        .find(|(name, _)| *name == format)
        .map(|(_, sample)| *sample)
}

fn saturating_usize(n: u64) -> usize {
    usize::try_from(n).unwrap_or(usize::MAX)
}

/// Repeat `base` up to `min` characters, then cut to `max`.
///
/// Padding never goes past `max` or [`MAX_PADDED_LENGTH`].
fn fit_length(base: &str, min: Option<usize>, max: Option<usize>) -> String {
    let len = base.chars().count();
    let target = min
        .unwrap_or(0)
        .min(max.unwrap_or(usize::MAX))
        .min(MAX_PADDED_LENGTH);

    let mut result = if len > 0 && len < target {
        let copies = target / len + usize::from(target % len != 0);
        base.repeat(copies)
    } else {
        base.to_string()
    };
    if let Some(max) = max {
        if result.chars().count() > max {
            result = result.chars().take(max).collect();
        }
    }
    result
}

/// Zero, moved into the `minimum`/`maximum` range when needed.
///
/// Serves both `number` and `integer`; whole results are emitted as integers.
pub struct NumberSampler;

impl TypeSampler for NumberSampler {
    fn sample<'g>(
        &self,
        schema: &Schema<'g>,
        _traversal: &mut Traversal<'_, 'g>,
    ) -> Result<Value, SampleError> {
        let integer = schema.effective_type() == Some("integer");
        Ok(number_value(pick_number(schema, integer), integer))
    }
}

/// A bound and whether it is exclusive.
type Bound = (f64, bool);

fn lower_bound(schema: &Schema<'_>) -> Option<Bound> {
    // Draft 4 spells exclusivity as a boolean next to `minimum`
    match (schema.number("minimum"), schema.number("exclusiveMinimum")) {
        (_, Some(exclusive)) => Some((exclusive, true)),
        (Some(min), None) => Some((min, schema.boolean("exclusiveMinimum") == Some(true))),
        (None, None) => None,
    }
}

fn upper_bound(schema: &Schema<'_>) -> Option<Bound> {
    match (schema.number("maximum"), schema.number("exclusiveMaximum")) {
        (_, Some(exclusive)) => Some((exclusive, true)),
        (Some(max), None) => Some((max, schema.boolean("exclusiveMaximum") == Some(true))),
        (None, None) => None,
    }
}

fn pick_number(schema: &Schema<'_>, integer: bool) -> f64 {
    let lower = lower_bound(schema);
    let upper = upper_bound(schema);
    let mut value = 0.0_f64;

    if let Some((min, exclusive)) = lower {
        if value < min || (exclusive && value <= min) {
            value = match (exclusive, integer) {
                (true, true) => min.floor() + 1.0,
                (true, false) => min + 1.0,
                (false, true) => min.ceil(),
                (false, false) => min,
            };
        }
    }

    if let Some(step) = schema.number("multipleOf").filter(|m| *m > 0.0) {
        value = (value / step).ceil() * step;
    }

    if let Some((max, exclusive)) = upper {
        if value > max || (exclusive && value >= max) {
            value = match (exclusive, integer) {
                (true, true) => max.ceil() - 1.0,
                (true, false) => match lower {
                    Some((min, _)) => (min + max) / 2.0,
                    None => max - 1.0,
                },
                (false, true) => max.floor(),
                (false, false) => max,
            };
        }
    }

    value
}

fn number_value(value: f64, integer: bool) -> Value {
    if (integer || value.fract() == 0.0) && value.abs() < i64::MAX as f64 {
        return Value::from(value as i64);
    }
    Number::from_f64(value).map_or(Value::Null, Value::Number)
}

/// Always `true`.
pub struct BooleanSampler;

impl TypeSampler for BooleanSampler {
    fn sample<'g>(
        &self,
        _schema: &Schema<'g>,
        _traversal: &mut Traversal<'_, 'g>,
    ) -> Result<Value, SampleError> {
        Ok(Value::Bool(true))
    }
}
