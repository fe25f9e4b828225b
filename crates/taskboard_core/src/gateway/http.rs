//! HTTP todo gateway against the dummyjson-style wire protocol.
//!
//! # Responsibility
//! - Map the `TodoGateway` capability onto the upstream REST endpoints.
//! - Keep wire DTOs and status handling out of the rest of the core.
//!
//! # Invariants
//! - Upstream ids are integers on the wire and stringified at this boundary.
//! - Non-success statuses become `GatewayError::Http`, never a panic.

use crate::gateway::{GatewayError, GatewayResult, TodoGateway, TodoItem};
use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};

/// Gateway endpoint configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Upstream base URL, without trailing slash.
    pub base_url: String,
    /// User the upstream attributes created items to.
    pub user_id: u32,
    /// Item cap for the one-shot hydration list.
    pub list_limit: u32,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "https://dummyjson.com".to_string(),
            user_id: 1,
            list_limit: 10,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TodoDto {
    id: serde_json::Value,
    todo: String,
}

impl TodoDto {
    fn usable_id(&self) -> Option<String> {
        match &self.id {
            serde_json::Value::Number(number) => Some(number.to_string()),
            serde_json::Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
            _ => None,
        }
    }

    fn into_item(self) -> GatewayResult<TodoItem> {
        let Some(id) = self.usable_id() else {
            return Err(GatewayError::InvalidResponse(format!(
                "todo id is not usable: {}",
                self.id
            )));
        };
        Ok(TodoItem {
            id,
            title: self.todo,
        })
    }

    /// Like `into_item`, but an unusable id maps to an empty id so the
    /// caller can mint a local one instead of failing the operation.
    fn into_item_lenient(self) -> TodoItem {
        let id = self.usable_id().unwrap_or_default();
        TodoItem {
            id,
            title: self.todo,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TodoListDto {
    todos: Vec<TodoDto>,
}

#[derive(Debug, Serialize)]
struct AddTodoBody<'a> {
    todo: &'a str,
    completed: bool,
    #[serde(rename = "userId")]
    user_id: u32,
}

#[derive(Debug, Serialize)]
struct EditTodoBody<'a> {
    todo: &'a str,
}

/// `reqwest`-backed todo gateway.
pub struct HttpTodoGateway {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl HttpTodoGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn check(response: reqwest::Response) -> GatewayResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(GatewayError::Http {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl TodoGateway for HttpTodoGateway {
    async fn list(&self) -> GatewayResult<Vec<TodoItem>> {
        let url = format!(
            "{}/todos?limit={}",
            self.config.base_url, self.config.list_limit
        );
        let response = Self::check(self.client.get(&url).send().await?).await?;
        let listing: TodoListDto = response.json().await?;
        debug!(
            "event=gateway_list module=gateway status=ok items={}",
            listing.todos.len()
        );
        listing
            .todos
            .into_iter()
            .map(TodoDto::into_item)
            .collect()
    }

    async fn create(&self, title: &str) -> GatewayResult<TodoItem> {
        let url = format!("{}/todos/add", self.config.base_url);
        let body = AddTodoBody {
            todo: title,
            completed: false,
            user_id: self.config.user_id,
        };
        let response = Self::check(self.client.post(&url).json(&body).send().await?).await?;
        let created: TodoDto = response.json().await?;
        debug!("event=gateway_create module=gateway status=ok");
        Ok(created.into_item_lenient())
    }

    async fn rename(&self, id: &str, title: &str) -> GatewayResult<TodoItem> {
        let url = format!("{}/todos/{id}", self.config.base_url);
        let body = EditTodoBody { todo: title };
        let response = Self::check(self.client.put(&url).json(&body).send().await?).await?;
        let renamed: TodoDto = response.json().await?;
        debug!("event=gateway_rename module=gateway status=ok id={id}");
        renamed.into_item()
    }

    async fn delete(&self, id: &str) -> GatewayResult<()> {
        let url = format!("{}/todos/{id}", self.config.base_url);
        Self::check(self.client.delete(&url).send().await?).await?;
        debug!("event=gateway_delete module=gateway status=ok id={id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{GatewayConfig, TodoDto};
    use crate::gateway::GatewayError;

    #[test]
    fn default_config_targets_the_demo_service() {
        let config = GatewayConfig::default();
        assert_eq!(config.base_url, "https://dummyjson.com");
        assert_eq!(config.user_id, 1);
        assert_eq!(config.list_limit, 10);
    }

    #[test]
    fn dto_stringifies_numeric_ids() {
        let dto: TodoDto =
            serde_json::from_value(serde_json::json!({ "id": 42, "todo": "write tests" }))
                .expect("dto should deserialize");
        let item = dto.into_item().expect("numeric id should be usable");
        assert_eq!(item.id, "42");
        assert_eq!(item.title, "write tests");
    }

    #[test]
    fn dto_accepts_string_ids_and_rejects_unusable_ones() {
        let dto: TodoDto =
            serde_json::from_value(serde_json::json!({ "id": "abc", "todo": "keep" }))
                .expect("dto should deserialize");
        assert_eq!(dto.into_item().expect("string id is usable").id, "abc");

        let dto: TodoDto =
            serde_json::from_value(serde_json::json!({ "id": null, "todo": "drop" }))
                .expect("dto should deserialize");
        let err = dto.into_item().expect_err("null id must be rejected");
        assert!(matches!(err, GatewayError::InvalidResponse(_)));
    }

    #[test]
    fn lenient_mapping_leaves_id_empty_for_the_caller_to_mint() {
        let dto: TodoDto =
            serde_json::from_value(serde_json::json!({ "id": null, "todo": "created" }))
                .expect("dto should deserialize");
        let item = dto.into_item_lenient();
        assert!(item.id.is_empty());
        assert_eq!(item.title, "created");
    }
}
