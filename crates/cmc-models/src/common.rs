/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Response envelope shared by every CoinMarketCap Pro endpoint

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status block present on every response, successful or not
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
  /// Time the response was generated
  pub timestamp: DateTime<Utc>,

  /// 0 on success, upstream error code otherwise
  pub error_code: i64,

  /// Upstream error description
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub error_message: Option<String>,

  /// Milliseconds the upstream spent on the call
  pub elapsed: i64,

  /// API credits charged for the call
  pub credit_count: i64,

  /// Deprecation or plan notice
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub notice: Option<String>,
}

impl Status {
  /// True when the upstream reported an error
  pub fn is_error(&self) -> bool {
    self.error_code != 0
  }
}

/// `{ status, data }` wrapper around every response payload
///
/// `data` is absent on most error responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
  pub status: Status,

  pub data: Option<T>,
}

impl<T: DeserializeOwned> Envelope<T> {
  /// Interpret a raw JSON response as a typed envelope
  pub fn from_value(value: Value) -> serde_json::Result<Self> {
    serde_json::from_value(value)
  }
}

/// Keyed payloads hold one object when looked up by id and a list when
/// looked up by symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
  One(T),
  Many(Vec<T>),
}

impl<T> OneOrMany<T> {
  /// Flatten into a list
  pub fn into_vec(self) -> Vec<T> {
    match self {
      OneOrMany::One(item) => vec![item],
      OneOrMany::Many(items) => items,
    }
  }
}
