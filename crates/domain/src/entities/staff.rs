//! Staff entity - A single member of staff held in the registry

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::StaffId;

/// Request payload for creating or replacing a staff record.
///
/// Any JSON object is accepted and echoed back as stored: the usual fields are
/// `name`, `position`, `department`, `email` and `phone`, but values of any JSON
/// type and extra keys are kept. An `id` key is always dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct StaffDraft {
    fields: Map<String, Value>,
}

impl StaffDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`. Setting `id` is a no-op.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key != "id" {
            self.fields.insert(key, value.into());
        }
        self
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        self.with("name", name.into())
    }

    pub fn with_position(self, position: impl Into<String>) -> Self {
        self.with("position", position.into())
    }

    pub fn with_department(self, department: impl Into<String>) -> Self {
        self.with("department", department.into())
    }

    pub fn with_email(self, email: impl Into<String>) -> Self {
        self.with("email", email.into())
    }

    pub fn with_phone(self, phone: impl Into<String>) -> Self {
        self.with("phone", phone.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// String value of `key`, if present and a string.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for StaffDraft {
    fn from(mut fields: Map<String, Value>) -> Self {
        fields.remove("id");
        Self { fields }
    }
}

impl From<StaffDraft> for Map<String, Value> {
    fn from(draft: StaffDraft) -> Self {
        draft.fields
    }
}

/// A stored staff record: a draft bound to its registry id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffRecord {
    pub id: StaffId,
    #[serde(flatten)]
    pub details: StaffDraft,
}

impl StaffRecord {
    /// Bind a draft to an id. Whatever id the client sent never reaches here.
    pub fn from_draft(id: StaffId, details: StaffDraft) -> Self {
        Self { id, details }
    }

    pub fn id(&self) -> &StaffId {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.details.text("name")
    }
}

/// The roster the registry is seeded with at startup.
pub fn example_staff() -> Vec<StaffRecord> {
    [
        (
            "1",
            "John Doe",
            "Sales Associate",
            "Sales",
            "john.doe@bestbuy.com",
            "123-456-7890",
        ),
        (
            "2",
            "Jane Smith",
            "Customer Service Representative",
            "Support",
            "jane.smith@bestbuy.com",
            "987-654-3210",
        ),
        (
            "3",
            "Alice Johnson",
            "Store Manager",
            "Management",
            "alice.johnson@bestbuy.com",
            "555-123-4567",
        ),
    ]
    .into_iter()
    .map(|(id, name, position, department, email, phone)| {
        StaffRecord::from_draft(
            StaffId::from(id),
            StaffDraft::new()
                .with_name(name)
                .with_position(position)
                .with_department(department)
                .with_email(email)
                .with_phone(phone),
        )
    })
    .collect()
}
