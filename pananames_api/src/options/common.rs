//! Shared option infrastructure: [`ListOptions`], the [`ListQuery`] builder
//! trait, and the query-string encoder used for read requests.

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::Error;

/// Paging parameters accepted by every list endpoint. Zero fields are omitted
/// so the server defaults apply.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Results per page.
    #[serde(rename = "per_page", skip_serializing_if = "is_zero")]
    pub limit: i64,
    /// Page number (1-indexed).
    #[serde(rename = "current_page", skip_serializing_if = "is_zero")]
    pub page: i64,
}

/// Implemented by option types of list endpoints. Provides shared builder
/// methods for paging.
pub trait ListQuery {
    /// Returns a mutable reference to the paging fields.
    fn get_list_options(&mut self) -> &mut ListOptions;

    /// Sets the page number (1-indexed).
    fn with_page(mut self, page: i64) -> Self
    where
        Self: Sized,
    {
        self.get_list_options().page = page;
        self
    }

    /// Sets the number of results per page.
    fn with_limit(mut self, limit: i64) -> Self
    where
        Self: Sized,
    {
        self.get_list_options().limit = limit;
        self
    }
}

impl ListQuery for ListOptions {
    fn get_list_options(&mut self) -> &mut ListOptions {
        self
    }
}

pub(crate) fn is_zero(v: &i64) -> bool {
    *v == 0
}

pub(crate) fn is_zero_f64(v: &f64) -> bool {
    *v == 0.0
}

/// Appends `opt` to the URL's query string.
///
/// The options are serialized through serde, so field renames and
/// `skip_serializing_if` attributes decide the parameter names and which
/// empty fields are left out. Sequences become repeated keys, nested objects
/// use `parent[child]` keys, and `null` values are dropped. Keys are sorted;
/// repeated keys keep their order.
pub(crate) fn append_query<O>(url: &mut Url, opt: &O) -> Result<(), Error>
where
    O: Serialize + ?Sized,
{
    let value = serde_json::to_value(opt).map_err(Error::Encode)?;
    let fields = match value {
        Value::Object(fields) => fields,
        Value::Null => return Ok(()),
        other => {
            return Err(Error::InvalidInput(format!(
                "query options must encode to an object, got {}",
                other
            )))
        }
    };

    let mut pairs = Vec::new();
    for (key, value) in fields {
        flatten(key, value, &mut pairs);
    }
    if pairs.is_empty() {
        return Ok(());
    }
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    url.query_pairs_mut().extend_pairs(pairs);
    Ok(())
}

fn flatten(key: String, value: Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => pairs.push((key, b.to_string())),
        Value::Number(n) => pairs.push((key, n.to_string())),
        Value::String(s) => pairs.push((key, s)),
        Value::Array(items) => {
            for item in items {
                flatten(key.clone(), item, pairs);
            }
        }
        Value::Object(fields) => {
            for (child, value) in fields {
                flatten(format!("{}[{}]", key, child), value, pairs);
            }
        }
    }
}
