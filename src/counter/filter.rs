use crate::github::response::PullRequest;

/// Pull requests that should bump the count, in their original order.
pub fn eligible<'a>(
    pull_requests: &'a [PullRequest],
    label: &str,
    require_merged: bool,
) -> Vec<&'a PullRequest> {
    pull_requests
        .iter()
        .filter(|pr| !require_merged || pr.is_merged())
        .filter(|pr| pr.has_label(label))
        .collect()
}
