//! # Blueprint YAML Loader
//!
//! Home Assistant blueprints reference their own inputs with the `!input`
//! tag (`entity_id: !input issue_sensor`). Those references are resolved by
//! Home Assistant at load time; the validator only needs the document to
//! parse.
//!
//! The loader is the safe YAML loader extended with exactly one tag
//! constructor:
//!
//! - `!input <key>` on a scalar becomes the plain string `"!input <key>"`,
//!   an opaque placeholder that is never resolved.
//! - `!input` on a sequence or mapping is rejected.
//! - Any other local tag has no constructor and is rejected.
//!
//! Merge keys (`<<`) are applied after tag construction. A key repeated
//! within one mapping keeps its last value, as the safe loader does.

use std::fmt;
use std::path::Path;

use serde::de::{
    self, Deserialize, Deserializer, EnumAccess, MapAccess, SeqAccess, VariantAccess, Visitor,
};
use serde_yaml::value::{Tag, TaggedValue};
use serde_yaml::{Mapping, Value};

use crate::document::{read_source, yaml_kind};
use crate::error::{DocumentError, TagError};

/// The blueprint input indirection tag.
pub const INPUT_TAG: &str = "!input";

/// Read and parse a blueprint YAML file.
pub fn load(path: &Path) -> Result<Value, DocumentError> {
    let content = read_source(path)?;
    from_str(&content)
}

/// Parse blueprint YAML source.
///
/// An empty document parses to [`Value::Null`].
pub fn from_str(source: &str) -> Result<Value, DocumentError> {
    let LastWins(raw) = serde_yaml::from_str(source)?;
    let mut value = construct(raw)?;
    value.apply_merge()?;
    Ok(value)
}

/// A [`Value`] whose mappings let a repeated key overwrite the earlier
/// entry. `serde_yaml`'s own `Value` rejects duplicates.
struct LastWins(Value);

impl<'de> Deserialize<'de> for LastWins {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(LastWinsVisitor).map(LastWins)
    }
}

struct LastWinsVisitor;

impl<'de> Visitor<'de> for LastWinsVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any YAML value")
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> Result<Value, E> {
        Ok(Value::Bool(b))
    }

    fn visit_i64<E: de::Error>(self, i: i64) -> Result<Value, E> {
        Ok(Value::Number(i.into()))
    }

    fn visit_u64<E: de::Error>(self, u: u64) -> Result<Value, E> {
        Ok(Value::Number(u.into()))
    }

    fn visit_f64<E: de::Error>(self, f: f64) -> Result<Value, E> {
        Ok(Value::Number(f.into()))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Value, E> {
        Ok(Value::String(s.to_owned()))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<Value, E> {
        Ok(Value::String(s))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        LastWins::deserialize(deserializer).map(|LastWins(value)| value)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(LastWins(item)) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Sequence(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Mapping::new();
        while let Some((LastWins(key), LastWins(value))) = map.next_entry()? {
            entries.insert(key, value);
        }
        Ok(Value::Mapping(entries))
    }

    fn visit_enum<A>(self, data: A) -> Result<Value, A::Error>
    where
        A: EnumAccess<'de>,
    {
        let (tag, contents): (String, _) = data.variant()?;
        if tag.is_empty() {
            return Err(de::Error::custom("empty YAML tag is not allowed"));
        }
        let LastWins(value) = contents.newtype_variant()?;
        Ok(Value::Tagged(Box::new(TaggedValue {
            tag: Tag::new(tag),
            value,
        })))
    }
}

/// Replace every tagged node with its constructed value.
fn construct(value: Value) -> Result<Value, TagError> {
    match value {
        Value::Tagged(tagged) => construct_tagged(*tagged),
        Value::Sequence(items) => items
            .into_iter()
            .map(construct)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Sequence),
        Value::Mapping(entries) => {
            let mut out = Mapping::with_capacity(entries.len());
            for (key, value) in entries {
                out.insert(construct(key)?, construct(value)?);
            }
            Ok(Value::Mapping(out))
        }
        scalar => Ok(scalar),
    }
}

fn construct_tagged(tagged: TaggedValue) -> Result<Value, TagError> {
    let TaggedValue { tag, value } = tagged;
    if tag != INPUT_TAG {
        return Err(TagError::Unsupported(tag.to_string()));
    }
    let key = match &value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => {
            return Err(TagError::NonScalar {
                tag: tag.to_string(),
                found: yaml_kind(other),
            })
        }
    };
    Ok(Value::String(input_placeholder(&key)))
}

/// The placeholder an `!input` reference to `key` is loaded as.
pub fn input_placeholder(key: &str) -> String {
    format!("{INPUT_TAG} {key}")
}
