pub mod github_client;
mod handler;
pub mod macros;
mod request;
pub mod response;

pub use github_client::GithubClient;
pub use github_client::DEFAULT_API_URL;
