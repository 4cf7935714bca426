use reqwest::{
    header::{ACCEPT, USER_AGENT},
    RequestBuilder,
};

pub const API_VERSION: &str = "2022-11-28";
pub const AGENT: &str = "force-update-build-count";

pub trait Headers {
    fn github_headers(self, token: &str) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn github_headers(self, token: &str) -> RequestBuilder {
        self.bearer_auth(token)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .header(USER_AGENT, AGENT)
    }
}

#[macro_export]
macro_rules! get {
    ($client:expr, $url:expr) => {{
        use $crate::{github::macros::Headers, http::ResponseHandler};

        $client
            .http()
            .get($url)
            .github_headers($client.token())
            .send()
            .await
            .handle()
            .await
    }};
}

#[macro_export]
macro_rules! patch {
    ($client:expr, $url:expr, $body:expr) => {{
        use reqwest::header::CONTENT_TYPE;
        use $crate::{github::macros::Headers, http::ResponseHandler};

        $client
            .http()
            .patch($url)
            .github_headers($client.token())
            .header(CONTENT_TYPE, "application/json")
            .body($body)
            .send()
            .await
            .handle()
            .await
    }};
}
