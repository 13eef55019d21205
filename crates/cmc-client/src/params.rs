//! Query parameter normalization
//!
//! List-valued options (`id`, `symbol`, `convert`) accept a single value, a
//! comma separated string or a sequence. [`ListParam`] captures all three and
//! [`ListParam::join_csv`] reduces them to the single comma joined value the
//! API expects, so `"BTC,ETH"` and `["BTC", "ETH"]` produce the same query.

use std::fmt;
use url::form_urlencoded;

/// A list-valued request option
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListParam {
  /// One value, or several already joined with commas
  Scalar(String),
  /// Several values
  List(Vec<String>),
}

impl ListParam {
  /// The comma joined form sent on the wire
  pub fn join_csv(&self) -> String {
    match self {
      ListParam::Scalar(value) => value.clone(),
      ListParam::List(values) => values.join(","),
    }
  }

  /// An empty string or an empty list carries no value
  pub fn is_empty(&self) -> bool {
    match self {
      ListParam::Scalar(value) => value.is_empty(),
      ListParam::List(values) => values.iter().all(|v| v.is_empty()),
    }
  }
}

impl From<&str> for ListParam {
  fn from(value: &str) -> Self {
    ListParam::Scalar(value.to_string())
  }
}

impl From<String> for ListParam {
  fn from(value: String) -> Self {
    ListParam::Scalar(value)
  }
}

impl From<&String> for ListParam {
  fn from(value: &String) -> Self {
    ListParam::Scalar(value.clone())
  }
}

impl From<Vec<String>> for ListParam {
  fn from(values: Vec<String>) -> Self {
    ListParam::List(values)
  }
}

impl From<Vec<&str>> for ListParam {
  fn from(values: Vec<&str>) -> Self {
    ListParam::List(values.into_iter().map(str::to_string).collect())
  }
}

impl From<&[&str]> for ListParam {
  fn from(values: &[&str]) -> Self {
    ListParam::List(values.iter().map(|v| v.to_string()).collect())
  }
}

impl<const N: usize> From<[&str; N]> for ListParam {
  fn from(values: [&str; N]) -> Self {
    ListParam::List(values.iter().map(|v| v.to_string()).collect())
  }
}

macro_rules! impl_numeric_list_param {
  ($($ty:ty),*) => {
    $(
      impl From<$ty> for ListParam {
        fn from(value: $ty) -> Self {
          ListParam::Scalar(value.to_string())
        }
      }

      impl From<Vec<$ty>> for ListParam {
        fn from(values: Vec<$ty>) -> Self {
          ListParam::List(values.iter().map(|v| v.to_string()).collect())
        }
      }

      impl From<&[$ty]> for ListParam {
        fn from(values: &[$ty]) -> Self {
          ListParam::List(values.iter().map(|v| v.to_string()).collect())
        }
      }

      impl<const N: usize> From<[$ty; N]> for ListParam {
        fn from(values: [$ty; N]) -> Self {
          ListParam::List(values.iter().map(|v| v.to_string()).collect())
        }
      }
    )*
  };
}

impl_numeric_list_param!(u32, u64, i32, i64, usize);

/// Returns the option only when it carries a value
pub(crate) fn present(param: &Option<ListParam>) -> Option<&ListParam> {
  param.as_ref().filter(|p| !p.is_empty())
}

/// Ordered query parameters for one request
///
/// Insertion order is the order parameters appear in the URL, which keeps
/// identical options producing identical requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
  pairs: Vec<(String, String)>,
}

impl Query {
  /// Empty query
  pub fn new() -> Self {
    Self::default()
  }

  /// Append a parameter
  pub fn push(&mut self, key: &str, value: impl ToString) {
    self.pairs.push((key.to_string(), value.to_string()));
  }

  /// Append a parameter when a value is present
  pub fn push_opt<V: ToString>(&mut self, key: &str, value: Option<V>) {
    if let Some(value) = value {
      self.push(key, value);
    }
  }

  /// Value of the first parameter named `key`
  pub fn get(&self, key: &str) -> Option<&str> {
    self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
  }

  /// True when `key` has been pushed
  pub fn contains_key(&self, key: &str) -> bool {
    self.get(key).is_some()
  }

  /// Parameter names in push order
  pub fn keys(&self) -> Vec<&str> {
    self.pairs.iter().map(|(k, _)| k.as_str()).collect()
  }

  /// Iterate `(key, value)` pairs in push order
  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }

  /// Number of parameters
  pub fn len(&self) -> usize {
    self.pairs.len()
  }

  /// True when no parameter was pushed
  pub fn is_empty(&self) -> bool {
    self.pairs.is_empty()
  }
}

/// Form encoded, e.g. `symbol=BTC%2CETH&convert=USD`
impl fmt::Display for Query {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in self.iter() {
      serializer.append_pair(key, value);
    }
    f.write_str(&serializer.finish())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_csv_string_and_sequence_join_identically() {
    let from_csv = ListParam::from("BTC,ETH");
    let from_vec = ListParam::from(vec!["BTC", "ETH"]);
    let from_array = ListParam::from(["BTC", "ETH"]);

    assert_eq!(from_csv.join_csv(), "BTC,ETH");
    assert_eq!(from_csv.join_csv(), from_vec.join_csv());
    assert_eq!(from_vec.join_csv(), from_array.join_csv());
  }

  #[test]
  fn test_numeric_ids() {
    assert_eq!(ListParam::from(1u64).join_csv(), "1");
    assert_eq!(ListParam::from(vec![1u64, 1027]).join_csv(), "1,1027");
    assert_eq!(ListParam::from([1u32, 2, 3]).join_csv(), "1,2,3");
  }

  #[test]
  fn test_empty_params() {
    assert!(ListParam::from("").is_empty());
    assert!(ListParam::from(Vec::<String>::new()).is_empty());
    assert!(!ListParam::from("BTC").is_empty());
    assert!(present(&Some(ListParam::from(""))).is_none());
    assert!(present(&None).is_none());
    assert!(present(&Some(ListParam::from("BTC"))).is_some());
  }

  #[test]
  fn test_query_preserves_insertion_order() {
    let mut query = Query::new();
    query.push("start", 1);
    query.push_opt("limit", None::<u32>);
    query.push_opt("convert", Some("USD"));
    query.push("sort", "id");

    assert_eq!(query.keys(), vec!["start", "convert", "sort"]);
    assert_eq!(query.get("convert"), Some("USD"));
    assert!(!query.contains_key("limit"));
    assert_eq!(query.len(), 3);
  }

  #[test]
  fn test_query_display_is_form_encoded() {
    let mut query = Query::new();
    query.push("symbol", ListParam::from(vec!["BTC", "ETH"]).join_csv());
    query.push("convert", "USD");

    assert_eq!(query.to_string(), "symbol=BTC%2CETH&convert=USD");
  }
}
