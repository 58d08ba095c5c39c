use recymap_core::{
    entities::{Classification, WasteCategory},
    gateways::classify::{ClassificationError, ClassificationGateway},
};
use serde::Deserialize;
use std::{collections::BTreeMap, time::Duration};

/// Classifies images by sending them to an HTTP inference service.
///
/// The raw image bytes are posted as request body and the service
/// is expected to respond with a JSON object like
/// `{"predicted_class": "glass", "confidence": 0.93, "class_probabilities": {..}}`
/// or `{"error": ".."}`.
#[derive(Debug, Clone)]
pub struct HttpClassifier {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpClassifier {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Debug, Deserialize)]
struct ClassifierResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    predicted_class: Option<String>,
    #[serde(default)]
    confidence: f64,
    #[serde(default)]
    class_probabilities: BTreeMap<String, f64>,
}

fn into_classification(
    response: ClassifierResponse,
) -> Result<Classification, ClassificationError> {
    let ClassifierResponse {
        error,
        predicted_class,
        confidence,
        class_probabilities,
    } = response;
    if let Some(error) = error {
        return Err(ClassificationError::Rejected(error));
    }
    let predicted_class = predicted_class
        .ok_or_else(|| ClassificationError::Rejected("Missing predicted class".into()))?;
    let label = predicted_class
        .parse::<WasteCategory>()
        .map_err(|_| ClassificationError::UnknownLabel(predicted_class))?;
    if !(0.0..=1.0).contains(&confidence) {
        return Err(ClassificationError::Rejected(format!(
            "Invalid confidence {confidence}"
        )));
    }
    let probabilities: Vec<_> = class_probabilities
        .into_iter()
        .filter_map(|(class, p)| match class.parse::<WasteCategory>() {
            Ok(category) => Some((category, p)),
            Err(_) => {
                log::debug!("Ignoring probability of unknown class '{class}'");
                None
            }
        })
        .collect();
    let mut classification = Classification::new(label, confidence);
    if !probabilities.is_empty() {
        classification.probabilities = probabilities;
    }
    Ok(classification)
}

impl ClassificationGateway for HttpClassifier {
    fn classify(&self, image: &[u8]) -> Result<Classification, ClassificationError> {
        log::debug!("Sending {} bytes to classifier {}", image.len(), self.url);
        let response = self
            .client
            .post(&self.url)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(image.to_vec())
            .send()
            .map_err(|err| ClassificationError::Unavailable(err.to_string()))?;
        let status = response.status();
        if status.is_server_error() {
            return Err(ClassificationError::Unavailable(format!(
                "Response status {status}"
            )));
        }
        let payload: ClassifierResponse = response.json().map_err(|err| {
            if status.is_success() {
                ClassificationError::Rejected(format!("Invalid response: {err}"))
            } else {
                ClassificationError::Rejected(format!("Response status {status}"))
            }
        })?;
        if !status.is_success() && payload.error.is_none() {
            return Err(ClassificationError::Rejected(format!(
                "Response status {status}"
            )));
        }
        into_classification(payload)
    }
}
