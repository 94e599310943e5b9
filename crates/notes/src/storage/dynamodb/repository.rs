//! DynamoDB repository implementation.
//!
//! Implements the repository traits from `notes_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::operation::query::QueryInput;
use aws_sdk_dynamodb::operation::scan::ScanInput;
use aws_sdk_dynamodb::operation::update_item::UpdateItemInput;
use aws_sdk_dynamodb::types::ReturnValue;
use aws_sdk_dynamodb::Client;
use chrono::Utc;

use notes_core::note::Note;
use notes_core::storage::{
    NoteReader, NoteWriter, Result, ValidationError, QUERY_LIMIT, SCAN_LIMIT,
};

use super::api::{QueryApi, ScanApi, UpdateItemApi};
use super::conversions::items_to_notes;
use super::error::{map_build_error, map_query_error, map_scan_error, map_update_item_error};
use super::expressions::{note_update, owner_key_condition};
use super::keys::note_key;

/// DynamoDB-based repository implementation.
///
/// Generic over the client so that each operation only needs the capability
/// it calls. Defaults to the real SDK client.
pub struct DynamoDbRepository<C = Client> {
    client: C,
    table_name: String,
}

impl<C> DynamoDbRepository<C> {
    /// Creates a new repository with the given DynamoDB client and table name.
    ///
    /// An empty table name is accepted here and rejected by every operation.
    pub fn new(client: C, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Get the underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }

    fn require_table_name(&self) -> Result<&str> {
        if self.table_name.is_empty() {
            return Err(ValidationError::MissingTableName.into());
        }
        Ok(&self.table_name)
    }
}

impl<C: UpdateItemApi> DynamoDbRepository<C> {
    /// Upserts a note, setting its message and the current time.
    ///
    /// `owner` and `title` are not checked; the store rejects empty key
    /// values and that rejection comes back as a store failure.
    pub async fn put(&self, note: &Note) -> Result<String> {
        let table_name = self.require_table_name()?;
        let update = note_update(&note.message, Utc::now().timestamp());

        let input = UpdateItemInput::builder()
            .table_name(table_name)
            .set_key(Some(note_key(&note.owner, &note.title)))
            .update_expression(update.expression)
            .set_expression_attribute_names(Some(update.names))
            .set_expression_attribute_values(Some(update.values))
            .return_values(ReturnValue::UpdatedNew)
            .build()
            .map_err(map_build_error)?;

        self.client
            .send_update_item(input)
            .await
            .map_err(map_update_item_error)
            .inspect_err(|err| {
                tracing::error!(
                    owner = %note.owner,
                    title = %note.title,
                    error = %err,
                    "UpdateItem failed"
                )
            })?;

        tracing::debug!(owner = %note.owner, title = %note.title, "Note written");
        Ok(note.owner.clone())
    }
}

impl<C: ScanApi> DynamoDbRepository<C> {
    /// Reads at most [`SCAN_LIMIT`] notes in store order.
    pub async fn scan(&self) -> Result<Vec<Note>> {
        let table_name = self.require_table_name()?;

        let input = ScanInput::builder()
            .table_name(table_name)
            .limit(SCAN_LIMIT)
            .build()
            .map_err(map_build_error)?;

        let output = self
            .client
            .send_scan(input)
            .await
            .map_err(map_scan_error)
            .inspect_err(|err| tracing::error!(error = %err, "Scan failed"))?;

        let notes = items_to_notes(output.items())?;
        tracing::debug!(count = notes.len(), "Scanned notes");
        Ok(notes)
    }
}

impl<C: QueryApi> DynamoDbRepository<C> {
    /// Reads at most [`QUERY_LIMIT`] notes of one owner, ordered by title.
    pub async fn query_by_owner(&self, owner: &str) -> Result<Vec<Note>> {
        let table_name = self.require_table_name()?;
        if owner.is_empty() {
            return Err(ValidationError::MissingField("owner").into());
        }
        let condition = owner_key_condition(owner);

        let input = QueryInput::builder()
            .table_name(table_name)
            .key_condition_expression(condition.expression)
            .set_expression_attribute_names(Some(condition.names))
            .set_expression_attribute_values(Some(condition.values))
            .limit(QUERY_LIMIT)
            .build()
            .map_err(map_build_error)?;

        let output = self
            .client
            .send_query(input)
            .await
            .map_err(map_query_error)
            .inspect_err(|err| tracing::error!(owner, error = %err, "Query failed"))?;

        let notes = items_to_notes(output.items())?;
        tracing::debug!(owner, count = notes.len(), "Queried notes");
        Ok(notes)
    }
}

// ============================================================================
// Repository trait implementations
// ============================================================================

#[async_trait]
impl<C: UpdateItemApi> NoteWriter for DynamoDbRepository<C> {
    async fn put_note(&self, note: &Note) -> Result<String> {
        self.put(note).await
    }
}

#[async_trait]
impl<C: ScanApi + QueryApi> NoteReader for DynamoDbRepository<C> {
    async fn scan_notes(&self) -> Result<Vec<Note>> {
        self.scan().await
    }

    async fn find_notes_by_owner(&self, owner: &str) -> Result<Vec<Note>> {
        self.query_by_owner(owner).await
    }
}
