use aws_config::Region;

/// Creates an AWS SQS client using credentials and configuration from the environment.
///
/// This function loads AWS configuration from environment variables such as:
/// - `AWS_ACCESS_KEY_ID`
/// - `AWS_SECRET_ACCESS_KEY`
/// - `AWS_REGION`
/// - `AWS_PROFILE`
///
/// # Example
///
/// ```rust,no_run
/// use sqs_tail::client::create_sqs_client_from_env;
///
/// #[tokio::main]
/// async fn main() {
///     let client = create_sqs_client_from_env().await;
///     // Use the client...
/// }
/// ```
pub async fn create_sqs_client_from_env() -> aws_sdk_sqs::Client {
    create_sqs_client(None, None).await
}

/// Creates an AWS SQS client from the environment, with optional overrides.
///
/// # Arguments
///
/// * `region` - Region to use instead of the one from the environment/profile
/// * `endpoint_url` - Custom endpoint, e.g. `http://localhost:4566` for LocalStack
///
/// Credentials are always resolved through the default provider chain.
pub async fn create_sqs_client(
    region: Option<&str>,
    endpoint_url: Option<&str>,
) -> aws_sdk_sqs::Client {
    let mut loader = aws_config::from_env();

    if let Some(region) = region {
        loader = loader.region(Region::new(region.to_string()));
    }

    if let Some(endpoint_url) = endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }

    let config = loader.load().await;
    aws_sdk_sqs::Client::new(&config)
}
