use std::collections::HashMap;
use std::fmt::Debug;

use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_config::timeout::TimeoutConfig;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::types::{
    AttributeDefinition, AttributeValue, BillingMode, KeySchemaElement, KeyType,
    ScalarAttributeType,
};

use crate::config::Config;
use crate::models::Item;
use crate::store::{self, ItemStore, StoreError};

/// DynamoDB-backed item store
///
/// Wraps a single SDK client built at startup; the client is cheap to clone and
/// shares its connection pool across handlers.
#[derive(Clone)]
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
}

impl DynamoDbStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Create a store from configuration
    ///
    /// Region and credentials come from the standard AWS provider chain. Every
    /// operation is bounded by `config.dynamodb_timeout`. When an endpoint
    /// override is configured (DynamoDB Local), the table is created if it does
    /// not exist yet.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let timeouts = TimeoutConfig::builder()
            .operation_timeout(config.dynamodb_timeout)
            .build();

        let mut loader = aws_config::defaults(BehaviorVersion::latest()).timeout_config(timeouts);

        match &config.dynamodb_endpoint {
            Some(endpoint) => {
                tracing::info!("Connecting to DynamoDB at: {}", endpoint);
                loader = loader.endpoint_url(endpoint);
            }
            None => tracing::info!("Connecting to AWS DynamoDB"),
        }

        let sdk_config = loader.load().await;
        let store = Self::new(Client::new(&sdk_config), config.dynamodb_table.clone());

        if config.dynamodb_endpoint.is_some() {
            store.ensure_table_exists().await?;
        }

        Ok(store)
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Create the item table with `id` as its hash key, unless it already exists
    async fn ensure_table_exists(&self) -> Result<()> {
        match self
            .client
            .describe_table()
            .table_name(&self.table_name)
            .send()
            .await
        {
            Ok(_) => {
                tracing::info!("Table already exists: {}", self.table_name);
                return Ok(());
            }
            Err(err)
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_resource_not_found_exception()) =>
            {
                tracing::info!("Table not found, creating: {}", self.table_name);
            }
            Err(err) => {
                return Err(anyhow::anyhow!(
                    "Failed to describe DynamoDB table: {}",
                    DisplayErrorContext(&err)
                ));
            }
        }

        let key_schema = KeySchemaElement::builder()
            .attribute_name("id")
            .key_type(KeyType::Hash)
            .build()
            .context("Failed to build key schema")?;

        let attribute_definition = AttributeDefinition::builder()
            .attribute_name("id")
            .attribute_type(ScalarAttributeType::S)
            .build()
            .context("Failed to build attribute definition")?;

        self.client
            .create_table()
            .table_name(&self.table_name)
            .key_schema(key_schema)
            .attribute_definitions(attribute_definition)
            .billing_mode(BillingMode::PayPerRequest)
            .send()
            .await
            .map_err(|err| {
                anyhow::anyhow!("Failed to create DynamoDB table: {}", DisplayErrorContext(&err))
            })?;

        tracing::info!("Created table: {}", self.table_name);
        Ok(())
    }
}

#[async_trait]
impl ItemStore for DynamoDbStore {
    async fn get(&self, id: &str) -> store::Result<Option<Item>> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|err| map_sdk_error("GetItem", err))?;

        match output.item {
            Some(attributes) => {
                tracing::debug!("Read item with id: {}", id);
                Ok(Some(attributes_to_item(&attributes)?))
            }
            None => {
                tracing::debug!("Item not found with id: {}", id);
                Ok(None)
            }
        }
    }

    async fn put(&self, item: &Item) -> store::Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_to_attributes(item)))
            .send()
            .await
            .map_err(|err| map_sdk_error("PutItem", err))?;

        tracing::debug!("Put item with id: {}", item.id);
        Ok(())
    }

    async fn scan(&self) -> store::Result<Vec<Item>> {
        let output = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|err| map_sdk_error("Scan", err))?;

        if output.last_evaluated_key.is_some() {
            tracing::warn!(
                "Scan of {} returned a partial page; remaining pages are not read",
                self.table_name
            );
        }

        let items = output
            .items
            .unwrap_or_default()
            .iter()
            .map(attributes_to_item)
            .collect::<store::Result<Vec<_>>>()?;

        tracing::debug!("Scanned {} items", items.len());
        Ok(items)
    }

    async fn describe(&self) -> store::Result<()> {
        self.client
            .describe_table()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|err| map_sdk_error("DescribeTable", err))?;
        Ok(())
    }
}

/// Map an SDK error to a `StoreError`, keeping the full error chain as text
///
/// Dispatch failures and timeouts mean the service was never reached; every
/// other variant is reported as a failed operation.
fn map_sdk_error<E, R>(operation: &'static str, err: SdkError<E, R>) -> StoreError
where
    E: std::error::Error + Send + Sync + 'static,
    R: Debug + Send + Sync + 'static,
{
    let message = DisplayErrorContext(&err).to_string();
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
            StoreError::Unavailable { operation, message }
        }
        _ => StoreError::Operation { operation, message },
    }
}

/// Convert an Item to DynamoDB attributes. Absent optional fields are omitted.
pub fn item_to_attributes(item: &Item) -> HashMap<String, AttributeValue> {
    let mut attributes = HashMap::new();
    attributes.insert("id".to_string(), AttributeValue::S(item.id.clone()));
    attributes.insert("name".to_string(), AttributeValue::S(item.name.clone()));
    if let Some(description) = &item.description {
        attributes.insert("description".to_string(), AttributeValue::S(description.clone()));
    }
    if let Some(category) = &item.category {
        attributes.insert("category".to_string(), AttributeValue::S(category.clone()));
    }
    attributes
}

/// Convert DynamoDB attributes to an Item
pub fn attributes_to_item(attributes: &HashMap<String, AttributeValue>) -> store::Result<Item> {
    Ok(Item {
        id: get_string(attributes, "id")?,
        name: get_string(attributes, "name")?,
        description: get_optional_string(attributes, "description")?,
        category: get_optional_string(attributes, "category")?,
    })
}

fn get_string(attributes: &HashMap<String, AttributeValue>, key: &str) -> store::Result<String> {
    attributes
        .get(key)
        .and_then(|value| value.as_s().ok())
        .cloned()
        .ok_or_else(|| StoreError::InvalidRecord(format!("missing or invalid field: {}", key)))
}

/// A missing attribute and an explicit NULL both read as `None`.
fn get_optional_string(
    attributes: &HashMap<String, AttributeValue>,
    key: &str,
) -> store::Result<Option<String>> {
    match attributes.get(key) {
        None | Some(AttributeValue::Null(_)) => Ok(None),
        Some(AttributeValue::S(value)) => Ok(Some(value.clone())),
        Some(_) => Err(StoreError::InvalidRecord(format!(
            "field {} is not a string",
            key
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::operation::get_item::GetItemError;
    use std::time::Duration;

    fn full_item() -> Item {
        Item {
            id: "1".to_string(),
            name: "Test Item".to_string(),
            description: Some("Test Description".to_string()),
            category: Some("test".to_string()),
        }
    }

    #[test]
    fn test_store_is_clonable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<DynamoDbStore>();
    }

    #[test]
    fn test_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DynamoDbStore>();
    }

    #[test]
    fn test_item_to_attributes_full() {
        let attributes = item_to_attributes(&full_item());

        assert_eq!(attributes.len(), 4);
        assert_eq!(attributes["id"], AttributeValue::S("1".to_string()));
        assert_eq!(attributes["name"], AttributeValue::S("Test Item".to_string()));
        assert_eq!(
            attributes["description"],
            AttributeValue::S("Test Description".to_string())
        );
        assert_eq!(attributes["category"], AttributeValue::S("test".to_string()));
    }

    #[test]
    fn test_item_to_attributes_omits_absent_fields() {
        let item = Item {
            description: None,
            category: None,
            ..full_item()
        };
        let attributes = item_to_attributes(&item);

        assert_eq!(attributes.len(), 2);
        assert!(!attributes.contains_key("description"));
        assert!(!attributes.contains_key("category"));
    }

    #[test]
    fn test_attributes_to_item_full() {
        let attributes = item_to_attributes(&full_item());
        assert_eq!(attributes_to_item(&attributes).unwrap(), full_item());
    }

    #[test]
    fn test_attributes_to_item_null_and_missing_optionals() {
        let mut attributes = HashMap::new();
        attributes.insert("id".to_string(), AttributeValue::S("1".to_string()));
        attributes.insert("name".to_string(), AttributeValue::S("Test Item".to_string()));
        attributes.insert("description".to_string(), AttributeValue::Null(true));

        let item = attributes_to_item(&attributes).unwrap();
        assert_eq!(item.description, None);
        assert_eq!(item.category, None);
    }

    #[test]
    fn test_attributes_to_item_missing_name() {
        let mut attributes = HashMap::new();
        attributes.insert("id".to_string(), AttributeValue::S("1".to_string()));

        let error = attributes_to_item(&attributes).unwrap_err();
        assert!(matches!(error, StoreError::InvalidRecord(_)));
        assert!(error.to_string().contains("name"));
    }

    #[test]
    fn test_attributes_to_item_wrong_type() {
        let mut attributes = item_to_attributes(&full_item());
        attributes.insert("category".to_string(), AttributeValue::N("7".to_string()));

        let error = attributes_to_item(&attributes).unwrap_err();
        assert!(error.to_string().contains("category"));
    }

    #[test]
    fn test_timeout_maps_to_unavailable() {
        let err = SdkError::<GetItemError, ()>::timeout_error("operation timed out");
        assert!(matches!(
            map_sdk_error("GetItem", err),
            StoreError::Unavailable { operation: "GetItem", .. }
        ));
    }

    #[test]
    fn test_construction_failure_maps_to_operation() {
        let err = SdkError::<GetItemError, ()>::construction_failure("bad request");
        assert!(matches!(
            map_sdk_error("GetItem", err),
            StoreError::Operation { operation: "GetItem", .. }
        ));
    }

    /// Needs DynamoDB Local, e.g. `docker run -p 8001:8000 amazon/dynamodb-local`
    /// and `DYNAMODB_ENDPOINT=http://localhost:8001`.
    #[tokio::test]
    #[ignore]
    async fn test_round_trip_against_dynamodb_local() {
        let endpoint = std::env::var("DYNAMODB_ENDPOINT")
            .unwrap_or_else(|_| "http://localhost:8001".to_string());
        let config = Config {
            environment: "test".to_string(),
            dynamodb_table: "items-round-trip-test".to_string(),
            dynamodb_endpoint: Some(endpoint),
            dynamodb_timeout: Duration::from_secs(5),
            external_api_key: None,
            service_host: "127.0.0.1".to_string(),
            service_port: 8000,
            request_timeout: Duration::from_secs(10),
        };

        let store = DynamoDbStore::from_config(&config)
            .await
            .expect("Failed to create DynamoDB store");
        store.describe().await.expect("Table should be reachable");

        let item = Item {
            id: uuid::Uuid::new_v4().to_string(),
            ..full_item()
        };
        store.put(&item).await.unwrap();

        assert_eq!(store.get(&item.id).await.unwrap(), Some(item.clone()));
        assert!(store.scan().await.unwrap().contains(&item));
        assert_eq!(store.get("never-created").await.unwrap(), None);
    }
}
