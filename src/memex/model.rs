use crate::config::FrontMatterDefaults;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;

/// Recognized front-matter keys.
///
/// Declaration order is the serialization order: `FrontMatter` keeps its
/// fields in a `BTreeMap<Field, _>`, so iterating it always yields the
/// canonical layout no matter how the values were inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Layout,
    Title,
    Description,
    Date,
    LastUpdate,
    Categories,
    Tags,
    ImgPath,
    Math,
    Toc,
    Comments,
    Image,
}

/// How a field is laid out by the serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStyle {
    /// `key: value` inside the block mapping.
    BlockScalar,
    /// `key: [a, b, c]`, even though the surrounding mapping is block style.
    InlineList,
}

impl Field {
    pub const ALL: [Field; 12] = [
        Field::Layout,
        Field::Title,
        Field::Description,
        Field::Date,
        Field::LastUpdate,
        Field::Categories,
        Field::Tags,
        Field::ImgPath,
        Field::Math,
        Field::Toc,
        Field::Comments,
        Field::Image,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Field::Layout => "layout",
            Field::Title => "title",
            Field::Description => "description",
            Field::Date => "date",
            Field::LastUpdate => "last_update",
            Field::Categories => "categories",
            Field::Tags => "tags",
            Field::ImgPath => "img_path",
            Field::Math => "math",
            Field::Toc => "toc",
            Field::Comments => "comments",
            Field::Image => "image",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.key() == key)
    }

    pub fn style(self) -> FieldStyle {
        match self {
            Field::Categories | Field::Tags => FieldStyle::InlineList,
            _ => FieldStyle::BlockScalar,
        }
    }
}

/// Value held by a recognized field.
///
/// `Raw` keeps whatever an on-disk document stored under a recognized key when it
/// does not fit the other variants (numbers, nulls, nested maps, mixed lists).
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    List(Vec<String>),
    Raw(Value),
}

impl FieldValue {
    pub fn from_yaml(value: Value) -> Self {
        match value {
            Value::String(s) => FieldValue::Text(s),
            Value::Bool(b) => FieldValue::Flag(b),
            Value::Sequence(items) if items.iter().all(Value::is_string) => FieldValue::List(
                items
                    .into_iter()
                    .filter_map(|v| match v {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            ),
            other => FieldValue::Raw(other),
        }
    }

    pub fn to_yaml(&self) -> Value {
        match self {
            FieldValue::Text(s) => Value::String(s.clone()),
            FieldValue::Flag(b) => Value::Bool(*b),
            FieldValue::List(items) => {
                Value::Sequence(items.iter().cloned().map(Value::String).collect())
            }
            FieldValue::Raw(v) => v.clone(),
        }
    }
}

/// A document's front matter: typed recognized fields plus the keys we don't know.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    fields: BTreeMap<Field, FieldValue>,
    /// Unrecognized keys, in the order the parser returned them.
    pub extra: Mapping,
}

impl FrontMatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full field set for a freshly scaffolded document.
    pub fn for_new_document(
        defaults: &FrontMatterDefaults,
        title: String,
        timestamp: &str,
        categories: Vec<String>,
        tags: Vec<String>,
    ) -> Self {
        let mut fm = Self::new();
        fm.set(Field::Layout, FieldValue::Text(defaults.layout().to_string()));
        fm.set(Field::Title, FieldValue::Text(title));
        fm.set(Field::Description, FieldValue::Text(String::new()));
        fm.set(Field::Date, FieldValue::Text(timestamp.to_string()));
        fm.set(Field::LastUpdate, FieldValue::Text(timestamp.to_string()));
        fm.set(Field::Categories, FieldValue::List(categories));
        fm.set(Field::Tags, FieldValue::List(tags));
        fm.set(
            Field::ImgPath,
            FieldValue::Text(defaults.img_path().to_string()),
        );
        fm.set(Field::Math, FieldValue::Flag(defaults.math()));
        fm.set(Field::Toc, FieldValue::Flag(defaults.toc()));
        fm.set(Field::Comments, FieldValue::Flag(defaults.comments()));
        fm.set(Field::Image, FieldValue::Text(defaults.image().to_string()));
        fm
    }

    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.fields.get(&field)
    }

    pub fn set(&mut self, field: Field, value: FieldValue) {
        self.fields.insert(field, value);
    }

    pub fn remove(&mut self, field: Field) -> Option<FieldValue> {
        self.fields.remove(&field)
    }

    /// Recognized fields in canonical order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &FieldValue)> {
        self.fields.iter().map(|(f, v)| (*f, v))
    }

    pub fn text(&self, field: Field) -> Option<&str> {
        match self.fields.get(&field) {
            Some(FieldValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn list(&self, field: Field) -> Option<&[String]> {
        match self.fields.get(&field) {
            Some(FieldValue::List(items)) => Some(items),
            _ => None,
        }
    }

    pub fn flag(&self, field: Field) -> Option<bool> {
        match self.fields.get(&field) {
            Some(FieldValue::Flag(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.extra.is_empty()
    }
}

/// The two taxonomy sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Categories,
    Tags,
}

impl Section {
    /// Top-level key in the taxonomy file.
    pub fn key(self) -> &'static str {
        match self {
            Section::Categories => "categories",
            Section::Tags => "tags",
        }
    }

    /// Short name used on the command line and in messages.
    pub fn short_name(self) -> &'static str {
        match self {
            Section::Categories => "cats",
            Section::Tags => "tags",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxaAction {
    Add,
    Remove,
}
