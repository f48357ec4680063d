use ureq::config::Config;
use ureq::{Agent, Body};
use ureq::http::Response;

/// Single GET request. Transport failures and non 2xx status codes are both errors.
pub fn get(url: &str) -> Result<Response<Body>, ureq::Error> {
    let config = Config::builder().http_status_as_error(true).build();
    let agent = Agent::new_with_config(config);
    tracing::debug!(url, "GET");
    agent.get(url).call()
}

/// Fetch the full body of `url` as bytes, without ureq's default size limit.
pub fn get_body(url: &str) -> Result<Vec<u8>, ureq::Error> {
    let mut response = get(url)?;
    tracing::debug!(status = %response.status(), "response received");
    response.body_mut().with_config().limit(u64::MAX).read_to_vec()
}
