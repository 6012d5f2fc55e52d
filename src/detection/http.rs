use super::{Classifier, RawDetection};
use crate::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Classifier backed by a remote inference endpoint.
///
/// Posts the image as a multipart `image` field and expects a JSON body with a
/// `detections` array of `{label, confidence, region?}` objects.
pub struct HttpClassifier {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpClassifier {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::configuration(format!("classifier HTTP client: {e}")))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key,
        })
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    async fn classify(&self, image: &[u8]) -> Result<Vec<RawDetection>> {
        let part = reqwest::multipart::Part::bytes(image.to_vec()).file_name("image");
        let form = reqwest::multipart::Form::new().part("image", part);

        let mut request = self.client.post(&self.endpoint).multipart(form);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::detection(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::detection(format!(
                "inference endpoint returned {status}: {body}"
            )));
        }

        let body: InferenceResponse = response
            .json()
            .await
            .map_err(|e| Error::detection(format!("undecodable inference response: {e}")))?;
        Ok(body.detections)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[derive(serde::Deserialize)]
struct InferenceResponse {
    detections: Vec<RawDetection>,
}
