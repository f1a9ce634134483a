//! Validated tool arguments.

use rmcp::model::JsonObject;
use serde_json::Value;
use tracing::debug;

use crate::clickup::Params;

use super::catalogue::{FieldType, OperationDescriptor};
use super::error::{ToolError, ToolResult};

/// Arguments of one invocation, restricted to the operation's declared
/// fields. Absent and `null` fields are not present at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    operation: &'static str,
    values: Params,
}

impl Arguments {
    /// Check `raw` against the descriptor and keep the declared fields.
    ///
    /// Fails with `MissingArguments` when any required field is absent or
    /// `null`, and with `InvalidArgument` when a value has the wrong JSON
    /// type. String fields also accept numbers, converted to their decimal
    /// form, since ClickUp IDs are often passed as numbers.
    pub fn extract(descriptor: &OperationDescriptor, raw: Option<JsonObject>) -> ToolResult<Self> {
        let mut raw = raw.unwrap_or_default();
        raw.retain(|_, v| !v.is_null());

        let missing: Vec<String> = descriptor
            .required_fields()
            .filter(|f| !raw.contains_key(f.name))
            .map(|f| f.name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ToolError::MissingArguments {
                operation: descriptor.name.to_string(),
                fields: missing,
            });
        }

        let mut values = Params::new();
        for (name, value) in raw {
            let Some(field) = descriptor.field_schema(&name) else {
                debug!(tool = descriptor.name, field = %name, "Ignoring undeclared argument");
                continue;
            };
            if !field.field_type.accepts(&value) {
                return Err(ToolError::InvalidArgument {
                    operation: descriptor.name.to_string(),
                    field: name,
                    expected: field.field_type.describe(),
                });
            }
            let value = match (&field.field_type, value) {
                (FieldType::String, Value::Number(n)) => Value::String(n.to_string()),
                (_, value) => value,
            };
            values.insert(name, value);
        }

        Ok(Self {
            operation: descriptor.name,
            values,
        })
    }

    /// Remove a required string field, typically a path parameter.
    ///
    /// Blank values and the dot segments `.` and `..` are rejected, since
    /// they cannot address a single resource.
    pub fn take_id(&mut self, field: &str) -> ToolResult<String> {
        let id = match self.values.remove(field) {
            Some(Value::String(s)) => s,
            Some(Value::Number(n)) => n.to_string(),
            Some(_) => return Err(self.invalid(field, FieldType::String.describe())),
            None => {
                return Err(ToolError::MissingArguments {
                    operation: self.operation.to_string(),
                    fields: vec![field.to_string()],
                });
            }
        };

        if matches!(id.trim(), "" | "." | "..") {
            return Err(self.invalid(field, "a non-empty identifier".to_string()));
        }
        Ok(id)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.values.get(field).and_then(Value::as_str)
    }

    /// The remaining fields, to be sent as body or query.
    pub fn into_params(self) -> Params {
        self.values
    }

    fn invalid(&self, field: &str, expected: String) -> ToolError {
        ToolError::InvalidArgument {
            operation: self.operation.to_string(),
            field: field.to_string(),
            expected,
        }
    }
}
