//! Operation descriptors and the name → handler lookup table.
//!
//! An [`OperationDescriptor`] declares a tool's name, description and input
//! fields. The [`Catalogue`] pairs each descriptor with a [`Handler`] and
//! keeps registration order for listing.

use std::collections::HashMap;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use rmcp::model::{JsonObject, Tool};
use serde_json::{Value, json};

use crate::clickup::ClickUpClient;

use super::arguments::Arguments;
use super::error::ToolResult;

/// Executes one operation against the client and renders the result.
pub type Handler = for<'a> fn(&'a ClickUpClient, Arguments) -> BoxFuture<'a, ToolResult<String>>;

/// Declared JSON type of an input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
    Number,
    Boolean,
    Object,
    Array(Box<FieldType>),
    /// Any JSON value (custom field values).
    Any,
}

impl FieldType {
    pub fn array_of(item: FieldType) -> Self {
        FieldType::Array(Box::new(item))
    }

    /// Whether `value` conforms to this type.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string() || value.is_number(),
            FieldType::Integer => value.is_i64() || value.is_u64(),
            FieldType::Number => value.is_number(),
            FieldType::Boolean => value.is_boolean(),
            FieldType::Object => value.is_object(),
            FieldType::Array(item) => value
                .as_array()
                .is_some_and(|items| items.iter().all(|v| item.accepts(v))),
            FieldType::Any => true,
        }
    }

    /// Human readable name, used in error messages.
    pub fn describe(&self) -> String {
        match self {
            FieldType::String => "string".to_string(),
            FieldType::Integer => "integer".to_string(),
            FieldType::Number => "number".to_string(),
            FieldType::Boolean => "boolean".to_string(),
            FieldType::Object => "object".to_string(),
            FieldType::Array(item) => format!("array of {}", item.describe()),
            FieldType::Any => "any value".to_string(),
        }
    }

    fn json_schema(&self) -> Value {
        match self {
            FieldType::String => json!({"type": "string"}),
            FieldType::Integer => json!({"type": "integer"}),
            FieldType::Number => json!({"type": "number"}),
            FieldType::Boolean => json!({"type": "boolean"}),
            FieldType::Object => json!({"type": "object"}),
            FieldType::Array(item) => json!({"type": "array", "items": item.json_schema()}),
            FieldType::Any => json!({}),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    pub name: &'static str,
    pub field_type: FieldType,
    pub required: bool,
    pub description: &'static str,
    pub allowed: Vec<&'static str>,
}

/// Immutable description of one tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub fields: Vec<FieldSchema>,
}

impl OperationDescriptor {
    pub fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            fields: Vec::new(),
        }
    }

    pub fn required(self, name: &'static str, field_type: FieldType, description: &'static str) -> Self {
        self.field(name, field_type, true, description)
    }

    pub fn optional(self, name: &'static str, field_type: FieldType, description: &'static str) -> Self {
        self.field(name, field_type, false, description)
    }

    /// Optional string restricted to `allowed`. The list is advertised in the
    /// schema only; the remote service does the enforcing.
    pub fn optional_enum(
        mut self,
        name: &'static str,
        allowed: &[&'static str],
        description: &'static str,
    ) -> Self {
        self.fields.push(FieldSchema {
            name,
            field_type: FieldType::String,
            required: false,
            description,
            allowed: allowed.to_vec(),
        });
        self
    }

    fn field(
        mut self,
        name: &'static str,
        field_type: FieldType,
        required: bool,
        description: &'static str,
    ) -> Self {
        self.fields.push(FieldSchema {
            name,
            field_type,
            required,
            description,
            allowed: Vec::new(),
        });
        self
    }

    pub fn field_schema(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSchema> {
        self.fields.iter().filter(|f| f.required)
    }

    /// JSON Schema object advertised as the tool's `inputSchema`.
    pub fn input_schema(&self) -> JsonObject {
        let mut properties = serde_json::Map::new();
        for field in &self.fields {
            let mut schema = field.field_type.json_schema();
            if let Value::Object(ref mut map) = schema {
                if !field.description.is_empty() {
                    map.insert("description".to_string(), json!(field.description));
                }
                if !field.allowed.is_empty() {
                    map.insert("enum".to_string(), json!(field.allowed));
                }
            }
            properties.insert(field.name.to_string(), schema);
        }

        let required: Vec<&str> = self.required_fields().map(|f| f.name).collect();

        let mut schema = JsonObject::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".to_string(), json!(required));
        }
        schema
    }

    pub fn to_tool(&self) -> Tool {
        Tool::new(self.name, self.description, Arc::new(self.input_schema()))
    }
}

struct Entry {
    descriptor: OperationDescriptor,
    handler: Handler,
}

/// Lookup table from operation name to descriptor and handler.
#[derive(Default)]
pub struct Catalogue {
    entries: Vec<Entry>,
    index: HashMap<&'static str, usize>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an operation. A second registration under the same name
    /// replaces the first in place.
    pub fn register(&mut self, descriptor: OperationDescriptor, handler: Handler) -> &mut Self {
        let entry = Entry {
            descriptor,
            handler,
        };
        match self.index.get(entry.descriptor.name) {
            Some(&position) => self.entries[position] = entry,
            None => {
                self.index.insert(entry.descriptor.name, self.entries.len());
                self.entries.push(entry);
            }
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<(&OperationDescriptor, Handler)> {
        self.index.get(name).map(|&position| {
            let entry = &self.entries[position];
            (&entry.descriptor, entry.handler)
        })
    }

    /// Descriptors in registration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &OperationDescriptor> {
        self.entries.iter().map(|e| &e.descriptor)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
