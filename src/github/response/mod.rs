mod pull_request_response;
mod variable_response;

pub use pull_request_response::PullRequest;
pub use variable_response::Variable;
