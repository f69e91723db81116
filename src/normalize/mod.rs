//! Backend record normalization.
//!
//! Raw CMS records arrive with inconsistent key casing, optional
//! connection wrappers (`{ nodes }`, `{ edges: [{ node }] }`) and nullable
//! substructures. Each view model declares one field table ([`Field`]) and
//! [`normalize_record`] reshapes a raw record into a map holding exactly
//! the declared keys. Nothing in here returns an error: unexpected shapes
//! are coerced to `null` or an empty list.

pub mod schema;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::models::MediaReference;

/// How a declared field is read from the raw record.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Scalar display text.
    Text,
    /// A single media item, possibly wrapped in an edge or connection.
    Media,
    /// An ordered media collection; entries without a URL are dropped.
    Gallery,
    /// A list of strings; object items are read through the given keys.
    TextList(&'static [&'static str]),
    /// A repeater whose rows follow their own field table.
    Rows(&'static [Field]),
    /// A list of post summaries, flattening `{ post: { nodes } }` rows.
    Posts,
}

/// One entry of a view model's field table.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    /// Canonical output key.
    pub name: &'static str,
    /// Additional source keys or dotted paths, tried after `name`.
    pub aliases: &'static [&'static str],
    pub kind: FieldKind,
}

impl Field {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            aliases: &[],
            kind,
        }
    }

    pub const fn text(name: &'static str) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub const fn aliased(name: &'static str, aliases: &'static [&'static str], kind: FieldKind) -> Self {
        Self {
            name,
            aliases,
            kind,
        }
    }

    fn candidates(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.name).chain(self.aliases.iter().copied())
    }
}

/// A strongly-shaped record built from one field table.
pub trait ViewModel: Sized + DeserializeOwned {
    /// Name used in diagnostics.
    const NAME: &'static str;

    /// The declarative field table.
    const FIELDS: &'static [Field];

    /// Keys that must be non-null for a record to count as present.
    const REQUIRED: &'static [&'static str] = &[];

    /// Reshape a raw record into its canonical map.
    ///
    /// Returns `None` when the record itself is absent, null or not an
    /// object, or when a required key is missing.
    fn normalize(raw: &Value) -> Option<Map<String, Value>> {
        if !raw.is_object() {
            return None;
        }
        let map = normalize_record(raw, Self::FIELDS);
        let missing = Self::REQUIRED
            .iter()
            .find(|key| map.get(**key).is_none_or(Value::is_null));
        if let Some(key) = missing {
            log::debug!("Dropping {} record without {}", Self::NAME, key);
            return None;
        }
        Some(map)
    }

    /// Normalize a raw record into the typed view model.
    fn from_raw(raw: &Value) -> Option<Self> {
        let map = Self::normalize(raw)?;
        match serde_json::from_value(Value::Object(map)) {
            Ok(model) => Some(model),
            Err(e) => {
                log::warn!("{} does not match its field table: {}", Self::NAME, e);
                None
            }
        }
    }
}

/// Build the canonical map for `raw` according to `fields`.
///
/// Every declared key is present in the output; nothing else is.
pub fn normalize_record(raw: &Value, fields: &[Field]) -> Map<String, Value> {
    fields
        .iter()
        .map(|field| {
            let source = field.candidates().find_map(|path| lookup(raw, path));
            (field.name.to_string(), normalize_field(source, field.kind))
        })
        .collect()
}

fn normalize_field(source: Option<&Value>, kind: FieldKind) -> Value {
    match kind {
        FieldKind::Text => source.map_or(Value::Null, text),
        FieldKind::Media => source
            .and_then(media)
            .map_or(Value::Null, |m| m.to_value()),
        FieldKind::Gallery => Value::Array(
            source
                .map(gallery)
                .unwrap_or_default()
                .iter()
                .map(MediaReference::to_value)
                .collect(),
        ),
        FieldKind::TextList(keys) => Value::Array(
            source
                .map(|v| text_list(v, keys))
                .unwrap_or_default()
                .into_iter()
                .map(Value::String)
                .collect(),
        ),
        FieldKind::Rows(fields) => Value::Array(
            source
                .map(list_items)
                .unwrap_or_default()
                .into_iter()
                .filter(|row| row.is_object())
                .map(|row| Value::Object(normalize_record(row, fields)))
                .collect(),
        ),
        FieldKind::Posts => Value::Array(
            source
                .map(schema::post_rows)
                .unwrap_or_default()
                .into_iter()
                .map(Value::Object)
                .collect(),
        ),
    }
}

/// Case-insensitive key lookup on an object.
///
/// An exact match wins over a case-folded one.
pub fn get_ci<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    let object = value.as_object()?;
    object.get(key).or_else(|| {
        object
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    })
}

/// Resolve a dotted path; null values count as missing.
pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(value, |current, segment| get_ci(current, segment))
        .filter(|v| !v.is_null())
}

/// Coerce a scalar to display text.
fn text(value: &Value) -> Value {
    match value {
        Value::String(_) => value.clone(),
        Value::Number(n) => Value::String(n.to_string()),
        Value::Bool(b) => Value::String(b.to_string()),
        _ => Value::Null,
    }
}

/// Items of a list-like value.
///
/// Accepts a bare array, a `{ nodes }` connection or an `{ edges }`
/// connection; edges (objects with a `node`) inside arrays are unwrapped. Null
/// entries are skipped and any other shape yields no items.
pub fn list_items(value: &Value) -> Vec<&Value> {
    let items: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        Value::Object(_) => {
            if let Some(Value::Array(edges)) = get_ci(value, "edges") {
                edges.iter().collect()
            } else if let Some(Value::Array(nodes)) = get_ci(value, "nodes") {
                nodes.iter().collect()
            } else {
                Vec::new()
            }
        }
        _ => Vec::new(),
    };

    items
        .into_iter()
        .map(unwrap_edge)
        .filter(|item| !item.is_null())
        .collect()
}

/// `{ node, cursor, .. }` edges yield their node, which may be null.
fn unwrap_edge(value: &Value) -> &Value {
    get_ci(value, "node").unwrap_or(value)
}

/// Normalize a single media reference.
///
/// Accepts a direct media object, an edge or a collection of edges; the
/// first entry with a non-empty URL wins.
pub fn media(value: &Value) -> Option<MediaReference> {
    match value {
        Value::Array(_) => gallery(value).into_iter().next(),
        Value::Object(_) => {
            if let Some(node) = get_ci(value, "node") {
                return media(node);
            }
            if get_ci(value, "edges").is_some() || get_ci(value, "nodes").is_some() {
                return gallery(value).into_iter().next();
            }
            media_object(value)
        }
        _ => None,
    }
}

/// Normalize a media collection, preserving order of valid entries.
pub fn gallery(value: &Value) -> Vec<MediaReference> {
    match value {
        Value::Object(_) if get_ci(value, "edges").is_none() && get_ci(value, "nodes").is_none() => {
            media(value).into_iter().collect()
        }
        _ => list_items(value).into_iter().filter_map(media).collect(),
    }
}

fn media_object(value: &Value) -> Option<MediaReference> {
    let url = ["sourceUrl", "url"]
        .iter()
        .find_map(|key| get_ci(value, key).and_then(Value::as_str))
        .map(str::trim)
        .filter(|url| !url.is_empty())?;
    let alt_text = get_ci(value, "altText")
        .and_then(Value::as_str)
        .map(str::to_string);

    Some(MediaReference {
        url: url.to_string(),
        alt_text,
    })
}

fn text_list(value: &Value, keys: &[&str]) -> Vec<String> {
    list_items(value)
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s.clone()),
            Value::Object(_) => keys
                .iter()
                .find_map(|key| get_ci(item, key))
                .and_then(|v| text(v).as_str().map(str::to_string)),
            other => text(other).as_str().map(str::to_string),
        })
        .filter(|s| !s.is_empty())
        .collect()
}
