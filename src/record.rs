//! Structural records: the targets that types are composed onto.
//!
//! A [`Record`] is a shallow bag of named fields. A field holds either plain
//! JSON data or a [`Capability`]. The nominal type tag lives in its own slot
//! rather than in the field map, so a data field that happens to be called
//! `typeIdentity` is just data.

use std::collections::{BTreeSet, HashMap};

use serde_json::{Map, Value};

use crate::capabilities::Capability;
use crate::error::{Result, TypeError};
use crate::identity::TypeIdentity;

// ---------------------------------------------------------------------------
// Field
// ---------------------------------------------------------------------------

/// A single named member of a record.
#[derive(Debug, Clone)]
pub enum Field {
    /// Caller-managed data.
    Data(Value),
    /// A callable member attached by extension or by hand.
    Capability(Capability),
}

impl Field {
    /// Whether this field can be invoked.
    pub fn is_callable(&self) -> bool {
        matches!(self, Field::Capability(_))
    }

    /// The data value, if this is a data field.
    pub fn as_data(&self) -> Option<&Value> {
        match self {
            Field::Data(value) => Some(value),
            Field::Capability(_) => None,
        }
    }

    /// The capability, if this is a callable field.
    pub fn as_capability(&self) -> Option<&Capability> {
        match self {
            Field::Capability(cap) => Some(cap),
            Field::Data(_) => None,
        }
    }
}

impl From<Value> for Field {
    fn from(value: Value) -> Self {
        Field::Data(value)
    }
}

impl From<Capability> for Field {
    fn from(cap: Capability) -> Self {
        Field::Capability(cap)
    }
}

// ---------------------------------------------------------------------------
// RecordKind
// ---------------------------------------------------------------------------

/// Structural category of a record, used to pick a baseline identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// A keyed record with no positional items.
    Plain,
    /// A sequence-like record: ordered items plus optional named fields.
    Sequence,
}

impl RecordKind {
    /// The well-known baseline identity for this kind.
    pub fn default_baseline(self) -> TypeIdentity {
        match self {
            RecordKind::Plain => TypeIdentity::plain_record(),
            RecordKind::Sequence => TypeIdentity::sequence(),
        }
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// A mutable structural record.
#[derive(Debug, Clone)]
pub struct Record {
    kind: RecordKind,
    fields: HashMap<String, Field>,
    items: Vec<Value>,
    type_identity: TypeIdentity,
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}

impl Record {
    /// Create an empty plain record tagged with the plain-record baseline.
    pub fn new() -> Self {
        Self {
            kind: RecordKind::Plain,
            fields: HashMap::new(),
            items: Vec::new(),
            type_identity: RecordKind::Plain.default_baseline(),
        }
    }

    /// Create a sequence record holding `items`.
    pub fn sequence(items: Vec<Value>) -> Self {
        Self {
            kind: RecordKind::Sequence,
            fields: HashMap::new(),
            items,
            type_identity: RecordKind::Sequence.default_baseline(),
        }
    }

    /// Build a record from JSON.
    ///
    /// Objects become plain records, arrays become sequence records. Any
    /// other value is rejected with [`TypeError::NotARecord`].
    pub fn from_json(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => {
                let mut record = Self::new();
                for (name, value) in map {
                    record.fields.insert(name, Field::Data(value));
                }
                Ok(record)
            }
            Value::Array(items) => Ok(Self::sequence(items)),
            other => Err(TypeError::NotARecord(format!(
                "expected an object or array, got {}",
                other
            ))),
        }
    }

    /// Serialize the record's data.
    ///
    /// Plain records render their data fields as an object; sequence records
    /// render their items as an array. Callable fields are never rendered.
    pub fn to_json(&self) -> Value {
        match self.kind {
            RecordKind::Plain => {
                let map: Map<String, Value> = self
                    .fields
                    .iter()
                    .filter_map(|(name, field)| {
                        field.as_data().map(|value| (name.clone(), value.clone()))
                    })
                    .collect();
                Value::Object(map)
            }
            RecordKind::Sequence => Value::Array(self.items.clone()),
        }
    }

    /// Builder-style data field setter.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_data(name, value);
        self
    }

    /// Structural category.
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Positional items (empty for plain records).
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Mutable positional items.
    pub fn items_mut(&mut self) -> &mut Vec<Value> {
        &mut self.items
    }

    /// The nominal type tag currently carried by the record.
    pub fn type_identity(&self) -> &TypeIdentity {
        &self.type_identity
    }

    /// Overwrite the nominal type tag.
    pub fn set_type_identity(&mut self, identity: TypeIdentity) {
        self.type_identity = identity;
    }

    /// Look up a field.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Look up a data field's value.
    pub fn get_data(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).and_then(Field::as_data)
    }

    /// Look up a callable field.
    pub fn get_capability(&self, name: &str) -> Option<&Capability> {
        self.fields.get(name).and_then(Field::as_capability)
    }

    /// Insert a field, returning the previous occupant.
    pub fn insert(&mut self, name: impl Into<String>, field: impl Into<Field>) -> Option<Field> {
        self.fields.insert(name.into(), field.into())
    }

    /// Set a data field.
    pub fn set_data(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Field> {
        self.insert(name, Field::Data(value.into()))
    }

    /// Set a callable field.
    pub fn set_capability(&mut self, name: impl Into<String>, cap: Capability) -> Option<Field> {
        self.insert(name, Field::Capability(cap))
    }

    /// Remove a field.
    pub fn remove(&mut self, name: &str) -> Option<Field> {
        self.fields.remove(name)
    }

    /// Whether a field with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Whether a callable field with this name exists.
    pub fn has_capability(&self, name: &str) -> bool {
        self.fields.get(name).is_some_and(Field::is_callable)
    }

    /// All field names, sorted.
    pub fn field_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.fields.keys().cloned().collect();
        names.sort();
        names
    }

    /// Names of the callable fields.
    pub fn capability_names(&self) -> BTreeSet<String> {
        self.fields
            .iter()
            .filter(|(_, field)| field.is_callable())
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Iterate over all fields.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Field)> {
        self.fields.iter()
    }

    /// Number of named fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no named fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Invoke a callable field with this record as receiver.
    ///
    /// # Errors
    ///
    /// [`TypeError::MissingCapability`] when no field has this name,
    /// [`TypeError::NotCallable`] when the field holds data, or whatever the
    /// capability body returns.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        match self.fields.get(name) {
            Some(Field::Capability(cap)) => cap.invoke(self, args),
            Some(Field::Data(_)) => Err(TypeError::NotCallable(name.to_string())),
            None => Err(TypeError::MissingCapability(name.to_string())),
        }
    }
}
