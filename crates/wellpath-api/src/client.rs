use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use wellpath_core::endpoints;
use wellpath_core::models::chat::{ChatMessage, MessagesReply, OutgoingMessage};
use wellpath_core::models::identity::Identity;
use wellpath_core::models::kind::AssessmentKind;
use wellpath_core::models::referral::{Referral, ReferralForm, ReferralsReply};
use wellpath_core::models::status::{StatusReply, StatusRequest};
use wellpath_core::models::submission::{Submission, SubmissionAck};
use wellpath_core::models::user::{LoginReply, LoginRequest, Role, UserProfile};

use crate::error::ApiError;

const USER_AGENT: &str = concat!("wellpath/", env!("CARGO_PKG_VERSION"));

/// Client for one API deployment. Cheap to clone.
///
/// No timeout or retry is layered on top of reqwest's defaults; a failed
/// call surfaces immediately and the user decides whether to try again.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = base_url.into();
        let trimmed = base_url.trim();
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ApiError::InvalidBaseUrl(base_url));
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile, ApiError> {
        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let reply: LoginReply = self.post(endpoints::login(), &request).await?;

        match reply.user {
            Some(user) if reply.status.eq_ignore_ascii_case("success") => {
                info!(user = user.id, role = %user.role, "signed in");
                Ok(user)
            }
            _ => Err(ApiError::Rejected(
                reply.message.unwrap_or(reply.status),
            )),
        }
    }

    /// Raw completion status string for `(kind, identity)`.
    pub async fn test_status(
        &self,
        kind: AssessmentKind,
        identity: &Identity,
    ) -> Result<String, ApiError> {
        let request = StatusRequest::new(kind, identity);
        let reply: StatusReply = self.post(endpoints::test_status(), &request).await?;
        debug!(%kind, %identity, status = %reply.status, "test status");
        Ok(reply.status)
    }

    pub async fn submit(&self, submission: &Submission) -> Result<SubmissionAck, ApiError> {
        let ack: SubmissionAck = self.post(submission.endpoint(), submission).await?;
        info!(kind = %submission.kind(), status = %ack.status, "submission acknowledged");
        Ok(ack)
    }

    pub async fn messages(&self, referral_id: u64) -> Result<Vec<ChatMessage>, ApiError> {
        let reply: MessagesReply = self
            .get(endpoints::messages(), &[("referral_id", referral_id.to_string())])
            .await?;
        if !reply.status.eq_ignore_ascii_case("success") {
            return Err(ApiError::Rejected(reply.status));
        }
        Ok(reply.messages)
    }

    pub async fn send_message(&self, message: &OutgoingMessage) -> Result<SubmissionAck, ApiError> {
        self.post(endpoints::send_message(), message).await
    }

    /// Referrals visible to `user_id` acting as `role`.
    pub async fn referrals(&self, user_id: &str, role: Role) -> Result<Vec<Referral>, ApiError> {
        let reply: ReferralsReply = self
            .get(
                endpoints::referrals(),
                &[
                    ("user_id", user_id.to_string()),
                    ("role", role.as_str().to_string()),
                ],
            )
            .await?;
        if !reply.status.eq_ignore_ascii_case("success") {
            return Err(ApiError::Rejected(reply.status));
        }
        Ok(reply.referrals)
    }

    pub async fn submit_referral(&self, form: ReferralForm) -> Result<SubmissionAck, ApiError> {
        let form = form.validate()?;
        let ack: SubmissionAck = self.post(endpoints::submit_referral(), &form).await?;
        if !ack.is_success() {
            return Err(ApiError::Rejected(ack.message.unwrap_or(ack.status)));
        }
        info!(student = %form.student_id, "referral submitted");
        Ok(ack)
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = endpoints::join(&self.base_url, path);
        debug!(%url, "POST");
        let request = self.http.post(&url).json(body);
        self.execute(url, request).await
    }

    async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<R, ApiError> {
        let url = endpoints::join(&self.base_url, path);
        debug!(%url, "GET");
        let request = self.http.get(&url).query(query);
        self.execute(url, request).await
    }

    async fn execute<R: DeserializeOwned>(
        &self,
        url: String,
        request: reqwest::RequestBuilder,
    ) -> Result<R, ApiError> {
        let response = request.send().await.map_err(|e| ApiError::Transport {
            url: url.clone(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| ApiError::Transport {
            url: url.clone(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&body).map_err(|e| ApiError::Decode {
            url,
            message: e.to_string(),
        })
    }
}
