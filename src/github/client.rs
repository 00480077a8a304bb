use super::{error::Error, responses::Repository};
use http::{
    header::{ACCEPT, USER_AGENT},
    HeaderMap, HeaderValue,
};
use reqwest::{Client, ClientBuilder};
use tracing::debug;
use url::Url;

type ClientResult<T> = Result<T, Error>;

/// Unauthenticated client for the repository lookup endpoint.
#[derive(Clone, Debug)]
pub struct GhClient {
    base_url: Url,
    http: Client,
}

impl GhClient {
    pub fn new(base_url: impl Into<Option<Url>>) -> ClientResult<Self> {
        let base_url: Url =
            base_url.into().map(Result::Ok).unwrap_or_else(|| "https://api.github.com/".parse())?;

        let headers = {
            let mut headers = HeaderMap::new();

            let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            headers.insert(USER_AGENT, HeaderValue::from_str(&user_agent)?);

            headers.insert(ACCEPT, "application/vnd.github.v3+json".try_into()?);

            headers
        };

        let http = ClientBuilder::new().default_headers(headers).build()?;

        let client = GhClient { base_url, http };
        debug!(?client);

        Ok(client)
    }

    fn build_url(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        url
    }

    /// Get a repository.
    ///
    /// The query is passed through verbatim as the `{owner}/{name}` part of
    /// the path, a malformed query surfaces as a not-found response.
    ///
    /// [GitHub Docs].
    ///
    /// [GitHub Docs]: https://docs.github.com/en/rest/reference/repos#get-a-repository
    pub async fn get_repository(&self, query: &str) -> ClientResult<Repository> {
        let url = self.build_url(&format!("/repos/{query}"));
        let request = self.http.get(url);
        debug!(?request, "sending request");
        let response = request.send().await?;
        debug!(?response, "received response");
        let response = response.error_for_status()?;
        let response_body: Repository = response.json().await?;
        debug!(?response_body, "response body");
        Ok(response_body)
    }
}
