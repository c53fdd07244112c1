//! Firestore REST client for the diary and entry collections.

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{Client, Response, StatusCode};
use serde_json::{json, Map, Value};

use crate::error::{Error, Result};
use crate::models::{Diary, DiaryId, Entry, EntryId, NEUTRAL_MOOD};

use super::{DiaryRepository, EntryRepository};

const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com/v1";
const DIARIES_COLLECTION: &str = "diaries";
const ENTRIES_COLLECTION: &str = "entries";

/// REST client over the project's Firestore database.
///
/// Every call authenticates with the caller's identity token; the security
/// rules on the backend scope reads and writes to the signed-in owner.
#[derive(Clone)]
pub struct FirestoreStore {
    base_url: String,
    project_id: String,
    client: Client,
}

impl FirestoreStore {
    pub fn new(project_id: impl Into<String>) -> Result<Self> {
        let project_id = project_id.into().trim().to_string();
        if project_id.is_empty() {
            return Err(Error::InvalidInput(
                "Firestore project id must not be empty".to_string(),
            ));
        }

        Ok(Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            project_id,
            client: Client::builder().build()?,
        })
    }

    /// Point the client at a non-default endpoint (local emulator).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents",
            self.base_url, self.project_id
        )
    }

    async fn run_query(&self, token: &str, query: Value) -> Result<Vec<Value>> {
        let response = self
            .client
            .post(format!("{}:runQuery", self.documents_url()))
            .bearer_auth(token)
            .json(&json!({ "structuredQuery": query }))
            .send()
            .await?;
        let response = ensure_success(response).await?;

        // runQuery returns one row per matched document, plus bare
        // read-time rows for empty result sets.
        let rows = response.json::<Value>().await?;
        let mut documents = Vec::new();
        if let Some(rows) = rows.as_array() {
            for row in rows {
                if let Some(document) = row.get("document") {
                    documents.push(document.clone());
                }
            }
        }
        Ok(documents)
    }

    async fn patch_document(
        &self,
        token: &str,
        collection: &str,
        id: &str,
        fields: Value,
    ) -> Result<()> {
        let response = self
            .client
            .patch(format!("{}/{}/{}", self.documents_url(), collection, id))
            .bearer_auth(token)
            .json(&json!({ "fields": fields }))
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn delete_document(&self, token: &str, collection: &str, id: &str) -> Result<()> {
        let response = self
            .client
            .delete(format!("{}/{}/{}", self.documents_url(), collection, id))
            .bearer_auth(token)
            .send()
            .await?;
        // Deletes are idempotent: a document someone else already removed
        // is not a failure.
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }
        ensure_success(response).await?;
        Ok(())
    }
}

impl DiaryRepository for FirestoreStore {
    async fn list_diaries(&self, token: &str, user_id: &str) -> Result<Vec<Diary>> {
        let documents = self.run_query(token, diaries_query(user_id)).await?;
        Ok(decode_all(&documents, decode_diary))
    }

    async fn list_diaries_in_range(
        &self,
        token: &str,
        user_id: &str,
        start_ms: i64,
        end_ms: i64,
    ) -> Result<Vec<Diary>> {
        let documents = self
            .run_query(token, diaries_in_range_query(user_id, start_ms, end_ms))
            .await?;
        Ok(decode_all(&documents, decode_diary))
    }

    async fn upsert_diary(&self, token: &str, diary: &Diary) -> Result<()> {
        self.patch_document(
            token,
            DIARIES_COLLECTION,
            &diary.id.as_str(),
            encode_diary(diary),
        )
        .await
    }

    async fn delete_diary(&self, token: &str, id: &DiaryId) -> Result<()> {
        self.delete_document(token, DIARIES_COLLECTION, &id.as_str())
            .await
    }
}

impl EntryRepository for FirestoreStore {
    async fn list_entries(&self, token: &str, diary_id: &DiaryId) -> Result<Vec<Entry>> {
        let documents = self.run_query(token, entries_query(diary_id)).await?;
        Ok(decode_all(&documents, decode_entry))
    }

    async fn upsert_entry(&self, token: &str, entry: &Entry) -> Result<()> {
        self.patch_document(
            token,
            ENTRIES_COLLECTION,
            &entry.id.as_str(),
            encode_entry(entry),
        )
        .await
    }

    async fn delete_entry(&self, token: &str, id: &EntryId) -> Result<()> {
        self.delete_document(token, ENTRIES_COLLECTION, &id.as_str())
            .await
    }
}

async fn ensure_success(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(Error::Api(format_store_error(status, &body)))
}

fn format_store_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<Value>(body) {
        if let Some(message) = payload
            .get("error")
            .and_then(|error| error.get("message"))
            .and_then(Value::as_str)
        {
            return format!("{} ({})", message.trim(), status.as_u16());
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("{} ({})", trimmed, status.as_u16())
    }
}

fn diaries_query(user_id: &str) -> Value {
    json!({
        "from": [{ "collectionId": DIARIES_COLLECTION }],
        "where": field_equals("userId", user_id),
        "orderBy": [order_desc("createdAt")],
    })
}

fn diaries_in_range_query(user_id: &str, start_ms: i64, end_ms: i64) -> Value {
    json!({
        "from": [{ "collectionId": DIARIES_COLLECTION }],
        "where": {
            "compositeFilter": {
                "op": "AND",
                "filters": [
                    field_equals("userId", user_id),
                    timestamp_bound("createdAt", "GREATER_THAN_OR_EQUAL", start_ms),
                    timestamp_bound("createdAt", "LESS_THAN_OR_EQUAL", end_ms),
                ],
            }
        },
        "orderBy": [order_desc("createdAt")],
    })
}

fn entries_query(diary_id: &DiaryId) -> Value {
    json!({
        "from": [{ "collectionId": ENTRIES_COLLECTION }],
        "where": field_equals("diaryId", &diary_id.as_str()),
        "orderBy": [order_desc("date")],
    })
}

fn field_equals(field: &str, value: &str) -> Value {
    json!({
        "fieldFilter": {
            "field": { "fieldPath": field },
            "op": "EQUAL",
            "value": { "stringValue": value },
        }
    })
}

fn timestamp_bound(field: &str, op: &str, timestamp_ms: i64) -> Value {
    json!({
        "fieldFilter": {
            "field": { "fieldPath": field },
            "op": op,
            "value": { "timestampValue": rfc3339(timestamp_ms) },
        }
    })
}

fn order_desc(field: &str) -> Value {
    json!({ "field": { "fieldPath": field }, "direction": "DESCENDING" })
}

fn decode_all<T>(documents: &[Value], decode: impl Fn(&Value) -> Result<T>) -> Vec<T> {
    documents
        .iter()
        .filter_map(|document| match decode(document) {
            Ok(item) => Some(item),
            Err(error) => {
                tracing::warn!("Skipping undecodable document: {}", error);
                None
            }
        })
        .collect()
}

fn decode_diary(document: &Value) -> Result<Diary> {
    let fields = document_fields(document);
    Ok(Diary {
        id: parse_document_id(document)?,
        user_id: string_field(fields, "userId").unwrap_or_default(),
        title: string_field(fields, "title").unwrap_or_default(),
        description: string_field(fields, "description").unwrap_or_default(),
        image_url: string_field(fields, "imageUrl"),
        created_at: timestamp_field(fields, "createdAt").unwrap_or_default(),
    })
}

fn decode_entry(document: &Value) -> Result<Entry> {
    let fields = document_fields(document);
    let diary_id = string_field(fields, "diaryId")
        .unwrap_or_default()
        .parse()
        .map_err(|_| Error::Api("Entry document carries an invalid diary id".to_string()))?;
    Ok(Entry {
        id: parse_document_id(document)?,
        diary_id,
        name: string_field(fields, "name").unwrap_or_default(),
        description: string_field(fields, "description").unwrap_or_default(),
        image_url: string_field(fields, "imageUrl"),
        entry_date: timestamp_field(fields, "date").unwrap_or_default(),
        mood: integer_field(fields, "mood")
            .and_then(|value| u8::try_from(value).ok())
            .unwrap_or(NEUTRAL_MOOD),
    })
}

fn encode_diary(diary: &Diary) -> Value {
    let mut fields = Map::new();
    fields.insert("userId".to_string(), string_value(&diary.user_id));
    fields.insert("title".to_string(), string_value(&diary.title));
    fields.insert("description".to_string(), string_value(&diary.description));
    if let Some(image_url) = &diary.image_url {
        fields.insert("imageUrl".to_string(), string_value(image_url));
    }
    fields.insert("createdAt".to_string(), timestamp_value(diary.created_at));
    Value::Object(fields)
}

fn encode_entry(entry: &Entry) -> Value {
    let mut fields = Map::new();
    fields.insert("diaryId".to_string(), string_value(&entry.diary_id.as_str()));
    fields.insert("name".to_string(), string_value(&entry.name));
    fields.insert("description".to_string(), string_value(&entry.description));
    if let Some(image_url) = &entry.image_url {
        fields.insert("imageUrl".to_string(), string_value(image_url));
    }
    fields.insert("date".to_string(), timestamp_value(entry.entry_date));
    fields.insert("mood".to_string(), integer_value(i64::from(entry.mood)));
    Value::Object(fields)
}

fn string_value(value: &str) -> Value {
    json!({ "stringValue": value })
}

fn integer_value(value: i64) -> Value {
    // Firestore wire format carries integers as strings
    json!({ "integerValue": value.to_string() })
}

fn timestamp_value(timestamp_ms: i64) -> Value {
    json!({ "timestampValue": rfc3339(timestamp_ms) })
}

fn rfc3339(timestamp_ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn document_fields(document: &Value) -> &Value {
    document.get("fields").unwrap_or(&Value::Null)
}

fn document_id(document: &Value) -> Option<&str> {
    document.get("name")?.as_str()?.rsplit('/').next()
}

fn parse_document_id<T: std::str::FromStr>(document: &Value) -> Result<T> {
    document_id(document)
        .ok_or_else(|| Error::Api("Document is missing a resource name".to_string()))?
        .parse()
        .map_err(|_| Error::Api("Document name is not a valid id".to_string()))
}

fn string_field(fields: &Value, name: &str) -> Option<String> {
    fields
        .get(name)?
        .get("stringValue")?
        .as_str()
        .map(ToString::to_string)
}

fn integer_field(fields: &Value, name: &str) -> Option<i64> {
    fields.get(name)?.get("integerValue")?.as_str()?.parse().ok()
}

fn timestamp_field(fields: &Value, name: &str) -> Option<i64> {
    let raw = fields.get(name)?.get("timestampValue")?.as_str()?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|parsed| parsed.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::models::MoodBucket;

    use super::*;

    fn diary_document() -> Value {
        json!({
            "name": "projects/demo/databases/(default)/documents/diaries/0191f3a8-6d1f-7cde-9ddc-2f41278cb911",
            "fields": {
                "userId": { "stringValue": "user-1" },
                "title": { "stringValue": "Travel log" },
                "description": { "stringValue": "Summer trips" },
                "imageUrl": { "stringValue": "https://example.com/cover.png" },
                "createdAt": { "timestampValue": "2024-03-15T08:30:00.000Z" },
            }
        })
    }

    #[test]
    fn decodes_diary_document() {
        let diary = decode_diary(&diary_document()).unwrap();
        assert_eq!(diary.id.as_str(), "0191f3a8-6d1f-7cde-9ddc-2f41278cb911");
        assert_eq!(diary.user_id, "user-1");
        assert_eq!(diary.title, "Travel log");
        assert_eq!(
            diary.image_url.as_deref(),
            Some("https://example.com/cover.png")
        );
        assert_eq!(diary.created_at, 1_710_491_400_000);
    }

    #[test]
    fn diary_survives_encode_decode() {
        let mut diary = Diary::new("user-1", "Travel log");
        diary.description = "Summer trips".to_string();
        diary.image_url = Some("https://example.com/cover.png".to_string());

        let document = json!({
            "name": format!("projects/demo/databases/(default)/documents/diaries/{}", diary.id),
            "fields": encode_diary(&diary),
        });
        assert_eq!(decode_diary(&document).unwrap(), diary);
    }

    #[test]
    fn entry_with_missing_mood_buckets_as_ok() {
        let document = json!({
            "name": "projects/demo/databases/(default)/documents/entries/0191f3a8-6d1f-7cde-9ddc-2f41278cb912",
            "fields": {
                "diaryId": { "stringValue": "0191f3a8-6d1f-7cde-9ddc-2f41278cb911" },
                "name": { "stringValue": "First day" },
                "date": { "timestampValue": "2024-03-15T08:30:00Z" },
            }
        });
        let entry = decode_entry(&document).unwrap();
        assert_eq!(entry.mood, NEUTRAL_MOOD);
        assert_eq!(entry.mood_bucket(), MoodBucket::Ok);
    }

    #[test]
    fn entry_mood_travels_as_stringified_integer() {
        let mut entry = Entry::new(
            "0191f3a8-6d1f-7cde-9ddc-2f41278cb911".parse().unwrap(),
            "First day",
        );
        entry.mood = 7;
        let encoded = encode_entry(&entry);
        assert_eq!(
            encoded.get("mood").and_then(|v| v.get("integerValue")),
            Some(&json!("7"))
        );
    }

    #[test]
    fn undecodable_documents_are_skipped() {
        let documents = vec![diary_document(), json!({ "fields": {} })];
        let diaries = decode_all(&documents, decode_diary);
        assert_eq!(diaries.len(), 1);
    }

    #[test]
    fn range_query_bounds_are_inclusive_timestamps() {
        let query = diaries_in_range_query("user-1", 1_710_374_400_000, 1_710_633_599_999);
        let filters = query["where"]["compositeFilter"]["filters"]
            .as_array()
            .unwrap();
        assert_eq!(filters.len(), 3);
        assert_eq!(
            filters[1]["fieldFilter"]["op"],
            json!("GREATER_THAN_OR_EQUAL")
        );
        assert_eq!(
            filters[1]["fieldFilter"]["value"]["timestampValue"],
            json!("2024-03-14T00:00:00.000Z")
        );
        assert_eq!(filters[2]["fieldFilter"]["op"], json!("LESS_THAN_OR_EQUAL"));
        assert_eq!(
            filters[2]["fieldFilter"]["value"]["timestampValue"],
            json!("2024-03-16T23:59:59.999Z")
        );
    }

    #[test]
    fn document_id_comes_from_the_resource_name_tail() {
        assert_eq!(
            document_id(&diary_document()),
            Some("0191f3a8-6d1f-7cde-9ddc-2f41278cb911")
        );
        assert_eq!(document_id(&json!({})), None);
    }
}
