/// Reads a response body as text.
///
/// With the `test-mode` feature and `NEWS_RECORD=1`, the body is also saved to the
/// fixture directory as `{endpoint}_{key}.json`, so offline tests can replay it.
pub(crate) async fn read_body(
    resp: reqwest::Response,
    endpoint: &str,
    key: &str,
) -> Result<String, reqwest::Error> {
    let body = resp.text().await?;

    #[cfg(feature = "test-mode")]
    if crate::core::fixtures::recording_enabled() {
        match crate::core::fixtures::record(endpoint, key, &body) {
            #[cfg(feature = "tracing")]
            Ok(path) => tracing::debug!(path = %path.display(), "recorded fixture"),
            #[cfg(not(feature = "tracing"))]
            Ok(_) => {}
            Err(e) => eprintln!("NEWS_RECORD: failed to write fixture {endpoint}_{key}: {e}"),
        }
    }
    #[cfg(not(feature = "test-mode"))]
    let _ = (endpoint, key);

    Ok(body)
}
