use gloo_file::{Blob, File as GlooFile};
use gloo_net::http::Request;
use shared::{ClassificationResult, DiseaseLabel, PredictResponse};
use thiserror::Error;

/// Fixed inference endpoint. One POST per analysis; no retry, no backoff,
/// no timeout override.
const PREDICT_URL: &str = match option_env!("CORNCARE_API_URL") {
    Some(url) => url,
    None => "https://autogamic-damaris-impatiently.ngrok-free.dev/predict",
};

// The upload always claims a JPEG named photo.jpg, whatever the picked file
// actually was; the server only looks at the bytes.
const UPLOAD_FIELD: &str = "file";
const UPLOAD_FILENAME: &str = "photo.jpg";
const UPLOAD_MIME: &str = "image/jpeg";

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("failed to build upload request: {0}")]
    Request(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to parse classifier response: {0}")]
    Decode(String),
}

/// Uploads one image and returns the normalized classification.
///
/// Every failure mode is typed here, but callers surface a single generic
/// "analysis failed" message; the specific cause only reaches the console.
pub async fn classify(file: &GlooFile) -> Result<ClassificationResult, ClassifyError> {
    let jpeg = Blob::new_with_options((**file).clone(), Some(UPLOAD_MIME));
    let form_data =
        web_sys::FormData::new().map_err(|e| ClassifyError::Request(format!("{e:?}")))?;
    form_data
        .append_with_blob_and_filename(UPLOAD_FIELD, jpeg.as_ref(), UPLOAD_FILENAME)
        .map_err(|e| ClassifyError::Request(format!("{e:?}")))?;

    let response = Request::post(PREDICT_URL)
        .body(form_data)
        .map_err(|e| ClassifyError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ClassifyError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ClassifyError::Status { status, body });
    }

    let parsed = response
        .json::<PredictResponse>()
        .await
        .map_err(|e| ClassifyError::Decode(e.to_string()))?;

    let result = ClassificationResult::from_response(parsed);
    if result.label == DiseaseLabel::Healthy && !result.raw_label.contains("Healthy") {
        log::warn!(
            "unrecognized classifier label {:?}, defaulting to Healthy",
            result.raw_label
        );
    }

    Ok(result)
}
