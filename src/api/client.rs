/// Upload-and-classify client
///
/// One request per upload: the selected file goes out as a multipart form
/// (single part named `file`) and the JSON reply comes back paired with the
/// verdict derived from its `description` field. No retries and no timeout:
/// the request waits as long as the remote service takes.
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::error::ClassifyError;
use super::verdict::Verdict;

/// The fixed remote classification endpoint
pub const PREDICT_ENDPOINT: &str =
    "https://deepfake-fastapi-backend.azurewebsites.net/predict_deepfake";

/// Outcome of a successful request: the derived verdict plus the decoded
/// response body, preserved verbatim for the details panel.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub verdict: Verdict,
    pub payload: Value,
}

/// Send an image to the production classification endpoint
pub async fn classify_image(path: PathBuf) -> Result<Analysis, ClassifyError> {
    classify_image_at(PREDICT_ENDPOINT, path).await
}

/// Send an image to an arbitrary endpoint (tests point this at a local stub)
pub async fn classify_image_at(
    endpoint: &str,
    path: PathBuf,
) -> Result<Analysis, ClassifyError> {
    let file_name = display_file_name(&path);
    let bytes = tokio::fs::read(&path).await?;

    println!("📤 Uploading {} ({} bytes) for classification...", file_name, bytes.len());

    let part = reqwest::multipart::Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(mime_for(&path))?;
    let form = reqwest::multipart::Form::new().part("file", part);

    let client = reqwest::Client::new();
    let response = client.post(endpoint).multipart(form).send().await?;

    let status = response.status();
    if !status.is_success() {
        eprintln!("❌ Classifier answered with HTTP {}", status.as_u16());
        return Err(ClassifyError::ServerStatus(status.as_u16()));
    }

    let payload: Value = response.json().await?;
    let verdict = Verdict::from_payload(&payload);

    println!("🧠 Verdict: {}", verdict);

    Ok(Analysis { verdict, payload })
}

/// File name to place in the multipart part (and in log lines)
fn display_file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "upload".to_string())
}

/// Guess a MIME type from the file extension.
/// The picker filters to these formats; anything else (a drag-and-dropped
/// arbitrary file) is sent as an opaque blob and left to the server.
fn mime_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}
