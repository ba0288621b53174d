use serde::{Deserialize, Serialize};

/// Generic response body of the Shapes account API. A response is either a success containing
/// data, a message to let the user know what happened or an error/failure message.
///
/// A [Failure][ApiResponseBody::Failure] is the backend rejecting the request (bad credentials,
/// duplicate email) while an [Error][ApiResponseBody::Error] means the backend could not perform
/// the request at all.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(tag = "type", content = "data")]
pub enum ApiResponseBody<T> {
    Success(T),
    Message(String),
    Failure(String),
    Error(String),
}
