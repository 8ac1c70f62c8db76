use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::http::ServerResponse;
use crate::paging::Page;

/// A long-running operation returned by methods that do not complete immediately.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Operation {
    /// The server-assigned name, unique within the service that returns it.
    pub name: String,
    /// Service-specific metadata, typically progress information. Contains an `@type` entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, Value>>,
    /// If `false`, the operation is still in progress.
    pub done: bool,
    /// The error result of the operation in case of failure or cancellation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Status>,
    /// The normal response of the operation in case of success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<HashMap<String, Value>>,
    #[serde(skip)]
    pub server_response: ServerResponse,
}

impl Operation {
    /// Decodes `metadata` into the type documented by the service.
    pub fn metadata_as<T: DeserializeOwned>(&self) -> Option<Result<T, serde_json::Error>> {
        self.metadata.as_ref().map(decode_any)
    }

    /// Decodes `response` into the type documented by the service.
    pub fn response_as<T: DeserializeOwned>(&self) -> Option<Result<T, serde_json::Error>> {
        self.response.as_ref().map(decode_any)
    }
}

fn decode_any<T: DeserializeOwned>(any: &HashMap<String, Value>) -> Result<T, serde_json::Error> {
    let fields = any
        .iter()
        .filter(|(k, _)| k.as_str() != "@type")
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect::<serde_json::Map<_, _>>();
    serde_json::from_value(Value::Object(fields))
}

crate::impl_response_meta!(Operation);

/// The logical error model used by REST and RPC APIs.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Status {
    /// The status code, which should be an enum value of google.rpc.Code.
    pub code: i32,
    /// A developer-facing error message in English.
    pub message: String,
    /// A list of messages that carry the error details.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<HashMap<String, Value>>,
}

/// The response of an operations list call.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ListOperationsResponse {
    pub operations: Vec<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
    #[serde(skip)]
    pub server_response: ServerResponse,
}

crate::impl_response_meta!(ListOperationsResponse);

impl Page for ListOperationsResponse {
    fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }
}

/// The request message for cancelling an operation.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
pub struct CancelOperationRequest {}

#[cfg(test)]
mod test {
    use serde_json::json;

    use crate::longrunning::Operation;

    #[derive(serde::Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    struct Progress {
        percent_done: i32,
    }

    #[test]
    fn test_metadata_as() {
        let op: Operation = serde_json::from_value(json!({
            "name": "operations/abc",
            "metadata": {"@type": "type.googleapis.com/test.Progress", "percentDone": 40},
        }))
        .unwrap();
        assert!(!op.done);
        let progress: Progress = op.metadata_as().unwrap().unwrap();
        assert_eq!(40, progress.percent_done);
        assert!(op.response_as::<Progress>().is_none());
    }
}
