//! Service - System Service Inventory

use serde::{Deserialize, Serialize};

use crate::table::{FieldValue, Record};

/// A system service as listed by the backend, identified by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub load: Option<String>,
    /// Activation state (`active`, `inactive`, `failed`, ...)
    #[serde(default)]
    pub active: String,
    /// Sub-state (`running`, `exited`, `dead`, ...)
    pub status: String,
    pub is_running: bool,
}

impl Record for ServiceItem {
    type Key = String;
    const FIELDS: &'static [&'static str] =
        &["name", "description", "load", "active", "status", "is_running"];

    fn key(&self) -> String {
        self.name.clone()
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "name" => self.name.as_str().into(),
            "description" => self.description.as_deref().into(),
            "load" => self.load.as_deref().into(),
            "active" => self.active.as_str().into(),
            "status" => self.status.as_str().into(),
            "is_running" => self.is_running.into(),
            _ => FieldValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_default_to_none() {
        let json = r#"{"name":"sshd.service","status":"running","isRunning":true}"#;
        let service: ServiceItem = serde_json::from_str(json).unwrap();
        assert_eq!(service.description, None);
        assert_eq!(service.active, "");
        assert_eq!(service.field("description"), FieldValue::Null);
        assert_eq!(service.field("is_running"), FieldValue::Bool(true));
        assert_eq!(service.key(), "sshd.service");
    }
}
