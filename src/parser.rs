//! Client for the external resume-parsing API.
//!
//! When no API key is configured the client runs in stub mode and returns
//! fixed sample data, so the upload pipeline works without the third-party
//! service.

use backoff::future::retry_notify;
use backoff::Error as BackoffError;
use backoff::ExponentialBackoff;
use reqwest::multipart;
use reqwest::Client;
use serde::Deserialize;
use std::env;

use crate::error::AppError;
use crate::resume::{Contact, DerivedFacts, EducationEntry, EmploymentEntry, ParsedResume};

const DEFAULT_PARSER_URL: &str = "https://resumeparser.app/resume/parse";

/// Envelope the parsing API wraps its result in.
#[derive(Debug, Deserialize)]
struct ParserResponse {
    #[serde(default)]
    parsed: ParsedResume,
}

#[derive(Clone)]
pub struct ParserClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl ParserClient {
    /// Build a client from `RESUME_PARSER_URL` / `RESUME_PARSER_API_KEY`.
    /// A missing or empty key selects stub mode.
    pub fn from_env() -> Self {
        let endpoint =
            env::var("RESUME_PARSER_URL").unwrap_or_else(|_| DEFAULT_PARSER_URL.to_string());
        let api_key = env::var("RESUME_PARSER_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());
        if api_key.is_none() {
            tracing::info!("RESUME_PARSER_API_KEY not set; using stub resume data");
        }
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }

    /// Client that always returns sample data.
    pub fn stub() -> Self {
        Self {
            client: Client::new(),
            endpoint: DEFAULT_PARSER_URL.to_string(),
            api_key: None,
        }
    }

    pub fn is_stub(&self) -> bool {
        self.api_key.is_none()
    }

    /// Parse an uploaded document into a structured resume. HTTP 429 and 5xx
    /// responses and connect/timeout failures are retried with exponential
    /// backoff; other failures are permanent.
    #[tracing::instrument(skip(self, data), fields(file_name = %file_name, bytes = data.len()))]
    pub async fn parse(&self, file_name: &str, data: Vec<u8>) -> Result<ParsedResume, AppError> {
        let api_key = match &self.api_key {
            Some(key) => key.clone(),
            None => {
                tracing::debug!("stub mode; returning sample resume");
                return Ok(sample_resume());
            }
        };

        let backoff = ExponentialBackoff::default();
        let response = retry_notify(
            backoff,
            || {
                let part = multipart::Part::bytes(data.clone()).file_name(file_name.to_string());
                let form = multipart::Form::new().part("file", part);
                let request = self
                    .client
                    .post(&self.endpoint)
                    .bearer_auth(&api_key)
                    .multipart(form);
                async move {
                    match request.send().await {
                        Ok(resp) => {
                            let status = resp.status();
                            if status.is_success() {
                                Ok(resp)
                            } else if status == reqwest::StatusCode::TOO_MANY_REQUESTS
                                || status.is_server_error()
                            {
                                tracing::debug!("Retrying on status: {}", status);
                                Err(BackoffError::transient(anyhow::anyhow!(
                                    "parser returned retryable status: {}",
                                    status
                                )))
                            } else {
                                tracing::debug!("Permanent error status: {}", status);
                                Err(BackoffError::permanent(anyhow::anyhow!(
                                    "parser returned non-retryable status: {}",
                                    status
                                )))
                            }
                        }
                        Err(err) => {
                            if err.is_timeout() || err.is_connect() || err.is_request() {
                                tracing::debug!("Retrying on reqwest error: {}", err);
                                Err(BackoffError::transient(anyhow::Error::new(err)))
                            } else {
                                tracing::debug!("Permanent reqwest error: {}", err);
                                Err(BackoffError::permanent(anyhow::Error::new(err)))
                            }
                        }
                    }
                }
            },
            retry_notify_handler,
        )
        .await
        .map_err(|err| AppError::ParserApi(err.to_string()))?;

        let parsed: ParserResponse = response
            .json()
            .await
            .map_err(|err| AppError::ParserApi(format!("invalid response body: {}", err)))?;
        Ok(parsed.parsed)
    }
}

fn retry_notify_handler<E>(err: E, duration: std::time::Duration)
where
    E: std::fmt::Display,
{
    tracing::warn!(
        "Parser request failed: {}. Retrying in {:.1}s...",
        err,
        duration.as_secs_f32()
    );
}

/// Fixed sample resume used in stub mode.
pub fn sample_resume() -> ParsedResume {
    ParsedResume {
        name: "Max Mustermann".to_string(),
        title: "Software Engineer".to_string(),
        brief: "Experienced software engineer with a focus on web development".to_string(),
        contact: Contact {
            location_city: "Berlin".to_string(),
            location_country: "DE".to_string(),
            email: "max@example.com".to_string(),
            phone: "+49 123 456789".to_string(),
            linkedin: "https://linkedin.com/in/max-mustermann".to_string(),
            github: None,
            twitter: None,
            website: None,
        },
        employment_history: vec![EmploymentEntry {
            company: "Tech Company GmbH".to_string(),
            position: "Senior Software Engineer".to_string(),
            start_date: "2020-01".to_string(),
            end_date: "Present".to_string(),
            description: vec![
                "Built web applications with React and Node.js".to_string(),
                "Introduced automated testing across the frontend stack".to_string(),
            ],
        }],
        education: vec![EducationEntry {
            degree: "Bachelor of Science, Computer Science".to_string(),
            institution: "Technische Universität Berlin".to_string(),
            graduation_date: "2019".to_string(),
        }],
        skills: vec![
            "JavaScript".to_string(),
            "React".to_string(),
            "Node.js".to_string(),
            "TypeScript".to_string(),
        ],
        languages: vec!["German".to_string(), "English".to_string()],
        certificates: vec![],
        derived: DerivedFacts {
            years_of_experience: 0,
            approximate_age: None,
        },
    }
}
