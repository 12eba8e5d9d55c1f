use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::header;
use axum::http::request::Parts;
use std::convert::Infallible;
use std::net::SocketAddr;

/// What the server observed about the requesting client. Extraction never
/// fails; anything the client didn't send is simply absent.
pub struct ClientMeta {
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

// Proxy headers take precedence over the socket address, first hop wins on
// a comma-separated x-forwarded-for chain.
const IP_HEADERS: [&str; 2] = ["x-forwarded-for", "x-real-ip"];

impl<S> FromRequestParts<S> for ClientMeta
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header_ip = IP_HEADERS.iter().find_map(|name| {
            parts
                .headers
                .get(*name)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.split(',').next())
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        });

        let ip = header_ip.or_else(|| {
            parts
                .extensions
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip().to_string())
        });

        let user_agent = parts
            .headers
            .get(header::USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        Ok(Self { ip, user_agent })
    }
}
