use async_trait::async_trait;
use common::api::ApiResponseBody;
#[cfg(test)]
use mockall::automock;
use shapes_common::{Credentials, Registration, Session, User};
use thiserror::Error;

/// Remote account operations used by the sign-in and sign-up flows. An operation the backend
/// rejects resolves to [None], only transport and server errors are [Err].
#[cfg_attr(test, automock)]
#[async_trait(?Send)]
pub trait AccountApi {
    /// Create a new account, returning the created user
    async fn create_user_account(&self, registration: &Registration) -> Result<Option<User>>;
    /// Sign in with `credentials`, returning the new session
    async fn sign_in_account(&self, credentials: &Credentials) -> Result<Option<Session>>;
    /// User of the current session, if there is one
    async fn current_user(&self) -> Result<Option<User>>;
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[cfg(feature = "csr")]
    #[error(transparent)]
    Fetch(#[from] gloo_net::Error),
    #[error("API error\n{0}")]
    ApiError(String),
    #[error("Expecting data but got message")]
    UnexpectedMessage,
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Self::ApiError(value.to_owned())
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self::ApiError(value)
    }
}

/// Unwrap a response envelope. A [Failure][ApiResponseBody::Failure] is the backend rejecting the
/// request and maps to [None].
/// # Errors
/// This function will return an error if the body is an error or a message instead of data
pub fn into_data<T>(body: ApiResponseBody<T>) -> Result<Option<T>> {
    match body {
        ApiResponseBody::Success(data) => Ok(Some(data)),
        ApiResponseBody::Failure(message) => {
            log::warn!("Request rejected. {message}");
            Ok(None)
        }
        ApiResponseBody::Message(message) => {
            log::debug!("{message}");
            Err(Error::UnexpectedMessage)
        }
        ApiResponseBody::Error(message) => Err(message.into()),
    }
}

#[cfg(feature = "csr")]
pub use http::HttpAccountApi;

#[cfg(feature = "csr")]
mod http {
    use std::{cell::RefCell, rc::Rc};

    use async_trait::async_trait;
    use common::api::ApiResponseBody;
    use gloo_net::http::{Request, Response};
    use serde::de::DeserializeOwned;
    use shapes_common::{Credentials, Registration, Session, User};

    use super::{into_data, AccountApi, Result};
    use crate::config::ClientConfig;

    /// [AccountApi] over HTTP. The session token from a successful sign-in is kept in memory and
    /// sent as a bearer token on later requests.
    #[derive(Clone)]
    pub struct HttpAccountApi {
        /// Configuration providing the base url of the API
        config: ClientConfig,
        /// Token of the current session, if signed in
        token: Rc<RefCell<Option<String>>>,
    }

    impl HttpAccountApi {
        pub fn new(config: ClientConfig) -> Self {
            Self {
                config,
                token: Rc::new(RefCell::new(None)),
            }
        }

        /// Current token formatted for the `Authorization` header
        fn auth_header_value(&self) -> Option<String> {
            self.token
                .borrow()
                .as_ref()
                .map(|token| format!("Bearer {token}"))
        }
    }

    #[async_trait(?Send)]
    impl AccountApi for HttpAccountApi {
        async fn create_user_account(&self, registration: &Registration) -> Result<Option<User>> {
            let url = self.config.endpoint("/users");
            let response = Request::post(&url).json(registration)?.send().await?;
            parse_response(response).await
        }

        async fn sign_in_account(&self, credentials: &Credentials) -> Result<Option<Session>> {
            let url = self.config.endpoint("/login");
            let response = Request::post(&url).json(credentials)?.send().await?;
            let session = parse_response::<Session>(response).await?;
            if let Some(session) = &session {
                self.token.replace(Some(session.token.clone()));
            }
            Ok(session)
        }

        async fn current_user(&self) -> Result<Option<User>> {
            let Some(auth) = self.auth_header_value() else {
                return Ok(None);
            };
            let url = self.config.endpoint("/user");
            let response = Request::get(&url)
                .header("Authorization", &auth)
                .send()
                .await?;
            parse_response(response).await
        }
    }

    /// Check the status of a response and unwrap its JSON envelope
    async fn parse_response<T>(response: Response) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        // ensure we've got 2xx status
        if response.ok() {
            into_data(response.json::<ApiResponseBody<T>>().await?)
        } else {
            Err(response.text().await?.into())
        }
    }
}

#[cfg(test)]
mod test {
    use common::api::ApiResponseBody;

    use super::{into_data, Error};

    #[test]
    fn into_data_should_return_success_data() {
        let data = into_data(ApiResponseBody::Success(5));

        assert!(matches!(data, Ok(Some(5))));
    }

    #[test]
    fn into_data_should_map_failure_to_none() {
        let data = into_data(ApiResponseBody::<i32>::Failure("Invalid user credentials".to_owned()));

        assert!(matches!(data, Ok(None)));
    }

    #[test]
    fn into_data_should_reject_message() {
        let data = into_data(ApiResponseBody::<i32>::Message("Updated".to_owned()));

        assert!(matches!(data, Err(Error::UnexpectedMessage)));
    }

    #[test]
    fn into_data_should_error_on_server_error() {
        let data = into_data(ApiResponseBody::<i32>::Error("internal".to_owned()));

        let Err(Error::ApiError(message)) = data else {
            panic!("server error was not reported");
        };
        assert_eq!(message, "internal");
    }
}
