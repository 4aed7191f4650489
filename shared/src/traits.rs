pub mod api {
    use std::{error::Error as ErrorT, fmt::Debug};

    use async_trait::async_trait;
    use bytes::Bytes;

    pub type ApiError = Box<dyn ErrorT + Send + Sync + 'static>;

    /// Trait implemented by structures capable of performing raw HTTP GET requests.
    ///
    /// Implementors return the raw body of a successful response; any
    /// transport or status failure is reported as an [`ApiError`].
    #[async_trait]
    pub trait ApiRequest: Send + Sync + Debug {
        async fn request(&self, url: String) -> Result<Bytes, ApiError>;
    }
}
