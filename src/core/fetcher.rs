use crate::core::RawRecord;
use crate::utils::error::{ExportError, Result};
use reqwest::Client;

/// Offset/limit position in the search index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub offset: usize,
    pub limit: usize,
}

impl PageCursor {
    pub fn new(limit: usize) -> Self {
        Self { offset: 0, limit }
    }

    pub fn advance(&mut self) {
        self.offset += self.limit;
    }

    /// A page shorter than the limit is the last one. A full page always
    /// asks for another, even if it turns out empty.
    pub fn is_last_page(&self, page_len: usize) -> bool {
        page_len < self.limit
    }

    pub fn query(&self, columns: &[String]) -> Vec<(&'static str, String)> {
        vec![
            ("select", columns.join(",")),
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ]
    }
}

pub struct Fetcher {
    client: Client,
    endpoint: String,
    columns: Vec<String>,
    page_size: usize,
}

impl Fetcher {
    pub fn new(
        client: Client,
        endpoint: impl Into<String>,
        columns: Vec<String>,
        page_size: usize,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            columns,
            page_size,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Starts a fresh walk over the index at offset 0.
    pub fn pages(&self) -> PageStream<'_> {
        PageStream {
            fetcher: self,
            cursor: PageCursor::new(self.page_size),
            finished: false,
        }
    }

    pub async fn fetch_page(&self, cursor: &PageCursor) -> Result<Vec<RawRecord>> {
        tracing::debug!(
            "Requesting {} (offset={}, limit={})",
            self.endpoint,
            cursor.offset,
            cursor.limit
        );

        let response = self
            .client
            .get(&self.endpoint)
            .query(&cursor.query(&self.columns))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(ExportError::HttpStatus {
                status,
                url: response.url().to_string(),
            });
        }

        let body = response.bytes().await?;
        parse_page(&body, cursor.offset)
    }
}

/// Lazy page sequence over one [`Fetcher`].
pub struct PageStream<'a> {
    fetcher: &'a Fetcher,
    cursor: PageCursor,
    finished: bool,
}

impl PageStream<'_> {
    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    /// Returns the next page, or `None` once an underfull page has been seen.
    pub async fn next_page(&mut self) -> Result<Option<Vec<RawRecord>>> {
        if self.finished {
            return Ok(None);
        }

        let page = self.fetcher.fetch_page(&self.cursor).await?;
        tracing::info!(
            "Fetched {} records at offset {}",
            page.len(),
            self.cursor.offset
        );

        if self.cursor.is_last_page(page.len()) {
            self.finished = true;
        } else {
            self.cursor.advance();
        }

        Ok(Some(page))
    }
}

fn parse_page(body: &[u8], offset: usize) -> Result<Vec<RawRecord>> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| ExportError::InvalidResponse {
            offset,
            message: format!("body is not JSON: {}", e),
        })?;

    let serde_json::Value::Array(items) = value else {
        return Err(ExportError::InvalidResponse {
            offset,
            message: "expected a JSON array of records".to_string(),
        });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            serde_json::Value::Object(record) => Ok(record),
            other => Err(ExportError::InvalidResponse {
                offset,
                message: format!("item {} is not an object: {}", index, other),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_advances_by_limit() {
        let mut cursor = PageCursor::new(100);
        assert_eq!(cursor.offset, 0);
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.offset, 200);
        assert_eq!(cursor.limit, 100);
    }

    #[test]
    fn test_full_page_is_not_last() {
        let cursor = PageCursor::new(100);
        assert!(!cursor.is_last_page(100));
        assert!(cursor.is_last_page(99));
        assert!(cursor.is_last_page(0));
    }

    #[test]
    fn test_cursor_query_joins_columns() {
        let mut cursor = PageCursor::new(50);
        cursor.advance();
        let columns = vec!["external_model_id".to_string(), "histology".to_string()];

        let query = cursor.query(&columns);
        assert_eq!(query[0], ("select", "external_model_id,histology".to_string()));
        assert_eq!(query[1], ("limit", "50".to_string()));
        assert_eq!(query[2], ("offset", "50".to_string()));
    }

    #[test]
    fn test_parse_page_rejects_non_array() {
        let err = parse_page(br#"{"message": "oops"}"#, 300).unwrap_err();
        assert!(matches!(err, ExportError::InvalidResponse { offset: 300, .. }));
    }

    #[test]
    fn test_parse_page_rejects_scalar_items() {
        let err = parse_page(br#"[{"a": 1}, 2]"#, 0).unwrap_err();
        assert!(err.to_string().contains("item 1"));
    }

    #[test]
    fn test_parse_page_keeps_values() {
        let page = parse_page(br#"[{"patient_age": 42, "histology": null}]"#, 0).unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0]["patient_age"], serde_json::json!(42));
        assert!(page[0]["histology"].is_null());
    }
}
