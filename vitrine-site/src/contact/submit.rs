//! Contact form submission.

use std::time::Duration;

/// Simulated round-trip used when no endpoint is configured.
pub const DEMO_LATENCY: Duration = Duration::from_millis(1500);

/// Everything needed to perform one submission, detached from the form so
/// the send can run while the form keeps handling input.
#[derive(Debug, Clone)]
pub struct SubmissionRequest {
    /// Effective endpoint; `None` selects demo mode.
    pub endpoint: Option<String>,
    pub fields: Vec<(String, String)>,
}

/// Submission failures.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("the endpoint rejected the submission ({0})")]
    Rejected(reqwest::StatusCode),
    #[error("could not reach the endpoint: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Send the form.
///
/// With an endpoint, POST the fields as a form body and treat any
/// non-success status as a rejection. Without one, simulate the round-trip
/// locally so the page remains demonstrable before the endpoint is set up.
pub async fn submit(request: SubmissionRequest) -> Result<(), SubmitError> {
    match request.endpoint.as_deref() {
        Some(endpoint) => {
            log::info!("contact: submitting to {endpoint}");
            let response = reqwest::Client::new()
                .post(endpoint)
                .header(reqwest::header::ACCEPT, "application/json")
                .form(&request.fields)
                .send()
                .await?;
            if response.status().is_success() {
                Ok(())
            } else {
                Err(SubmitError::Rejected(response.status()))
            }
        }
        None => {
            log::info!(
                "contact: demo submission ({} fields), no endpoint configured",
                request.fields.len()
            );
            tokio::time::sleep(DEMO_LATENCY).await;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn demo_mode_succeeds_without_network() {
        let request = SubmissionRequest {
            endpoint: None,
            fields: vec![("name".to_string(), "Ada".to_string())],
        };
        let started = tokio::time::Instant::now();
        submit(request).await.expect("demo submission");
        assert!(started.elapsed() >= DEMO_LATENCY);
    }
}
