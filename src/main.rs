mod action;
mod config;
mod counter;
mod github;
mod http;
mod logger;
#[cfg(test)]
mod test_support;

use action::Inputs;
use config::{Config, CountSource, OUTPUT_NAME};
use counter::{
    BuildCount, DocumentStore, RepositoryPullRequests, Settings, Store, VariableStore,
};
use github::GithubClient;

#[tokio::main]
async fn main() {
    if let Err(err) = logger::init() {
        eprintln!("Cannot initialize logger: {:#}", err);
    }

    log::info!("Starting");
    let inputs = Inputs::from_env();

    let count = match Config::load(&inputs) {
        Ok(config) => {
            action::mask(&config.token);
            build_count(&config).await
        }
        Err(cause) => counter::report(counter::Error::Config { cause }),
    };

    log::info!("{}={}", OUTPUT_NAME, count);
    if let Err(err) = action::set_output(OUTPUT_NAME, count) {
        action::error(format!("{:#}", err));
    }
}

async fn build_count(config: &Config) -> BuildCount {
    let client = GithubClient::new(&config.api_url, &config.token);

    let store = match &config.source {
        CountSource::Variable { .. } => Store::Variable(VariableStore::new(
            client.clone(),
            &config.owner,
            &config.repo,
        )),
        CountSource::Document { url } => Store::Document(DocumentStore::new(url)),
    };
    let pulls = RepositoryPullRequests::new(client, &config.owner, &config.repo);

    counter::run(&store, &pulls, &Settings::from(config)).await
}
