//! API endpoint table and wire constants.

use std::time::Duration;

/// Hostname of the Navigable AI API.
pub const HOSTNAME: &str = "www.navigable.ai";

/// Header carrying the model API key on every request.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP method for an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
}

impl RequestMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Path and method for an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointParams {
    pub path: &'static str,
    pub method: RequestMethod,
}

/// The closed set of Navigable AI API operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    SendMessage,
    GetMessages,
    GetChatSessions,
    /// Session id is appended to the path dynamically.
    GetSessionMessages,
}

impl Endpoint {
    /// Static descriptor for this endpoint.
    pub fn params(&self) -> EndpointParams {
        match self {
            Self::SendMessage => EndpointParams {
                path: "/api/v1/chat",
                method: RequestMethod::Post,
            },
            Self::GetMessages => EndpointParams {
                path: "/api/v1/chat",
                method: RequestMethod::Get,
            },
            Self::GetChatSessions => EndpointParams {
                path: "/api/v1/chat/sessions",
                method: RequestMethod::Get,
            },
            Self::GetSessionMessages => EndpointParams {
                path: "/api/v1/chat/sessions/",
                method: RequestMethod::Get,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_descriptors() {
        assert_eq!(Endpoint::SendMessage.params().path, "/api/v1/chat");
        assert_eq!(Endpoint::SendMessage.params().method, RequestMethod::Post);
        assert_eq!(Endpoint::GetMessages.params().method, RequestMethod::Get);
        assert_eq!(
            Endpoint::GetChatSessions.params().path,
            "/api/v1/chat/sessions"
        );
        assert_eq!(
            Endpoint::GetSessionMessages.params().path,
            "/api/v1/chat/sessions/"
        );
    }

    #[test]
    fn method_as_str() {
        assert_eq!(RequestMethod::Get.as_str(), "GET");
        assert_eq!(RequestMethod::Post.as_str(), "POST");
    }
}
