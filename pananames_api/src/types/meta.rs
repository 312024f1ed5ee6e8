use serde::{Deserialize, Deserializer, Serialize};

/// Paging position of a list response, as reported by the server.
///
/// `page` is 1-based and `pages` is never recomputed locally.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Pagination {
    #[serde(rename = "total_entries")]
    pub total: i64,
    #[serde(rename = "per_page")]
    pub limit: i64,
    #[serde(rename = "current_page")]
    pub page: i64,
    #[serde(rename = "total_pages")]
    pub pages: i64,
}

impl Pagination {
    /// Advances to the next page and returns it, or `None` on the last page.
    pub fn next_page(&mut self) -> Option<i64> {
        if self.pages - self.page > 0 {
            self.page += 1;
            Some(self.page)
        } else {
            None
        }
    }

    /// Steps back to the previous page and returns it, or `None` on the first page.
    pub fn previous_page(&mut self) -> Option<i64> {
        if self.page > 1 {
            self.page -= 1;
            Some(self.page)
        } else {
            None
        }
    }
}

/// The `meta` object of the response envelope.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Meta {
    #[serde(flatten)]
    pub pagination: Pagination,
    #[serde(deserialize_with = "null_as_default")]
    pub notice: String,
}

/// A decoded response: the typed `data` payload plus the envelope's `meta`.
#[derive(Debug, Clone)]
pub struct Response<T> {
    pub data: T,
    pub meta: Meta,
}

/// The raw `{data, meta}` envelope. `data` stays undecoded until the caller's
/// target type is known; a `null` or missing `data` is treated as absent.
#[derive(Deserialize)]
pub(crate) struct Envelope {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub meta: Meta,
}

/// Decodes an explicit `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paging(page: i64, pages: i64) -> Pagination {
        Pagination {
            total: pages * 10,
            limit: 10,
            page,
            pages,
        }
    }

    #[test]
    fn next_page_advances_until_last() {
        let mut p = paging(1, 3);
        assert_eq!(p.next_page(), Some(2));
        assert_eq!(p.page, 2);
        assert_eq!(p.next_page(), Some(3));
        assert_eq!(p.next_page(), None);
        assert_eq!(p.page, 3);
    }

    #[test]
    fn next_page_on_empty_listing() {
        let mut p = paging(1, 0);
        assert_eq!(p.next_page(), None);
        assert_eq!(p.page, 1);
    }

    #[test]
    fn previous_page_stops_at_first() {
        let mut p = paging(3, 3);
        assert_eq!(p.previous_page(), Some(2));
        assert_eq!(p.previous_page(), Some(1));
        assert_eq!(p.previous_page(), None);
        assert_eq!(p.page, 1);

        let mut p = paging(0, 3);
        assert_eq!(p.previous_page(), None);
    }

    #[test]
    fn meta_decodes_flat_pagination_and_notice() {
        let meta: Meta = serde_json::from_str(
            r#"{"total_entries": 41, "per_page": 20, "current_page": 2, "total_pages": 3, "notice": "confirm by email"}"#,
        )
        .unwrap();
        assert_eq!(meta.pagination, Pagination { total: 41, limit: 20, page: 2, pages: 3 });
        assert_eq!(meta.notice, "confirm by email");
    }

    #[test]
    fn meta_tolerates_missing_and_null_fields() {
        let meta: Meta = serde_json::from_str(r#"{"notice": null}"#).unwrap();
        assert_eq!(meta, Meta::default());
    }

    #[test]
    fn envelope_without_data_is_absent() {
        let env: Envelope = serde_json::from_str(r#"{"meta": {}}"#).unwrap();
        assert!(env.data.is_none());
        let env: Envelope = serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert!(env.data.is_none());
        let env: Envelope = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(env.data.is_some());
    }
}
