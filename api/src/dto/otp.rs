use serde::{Deserialize, Serialize};
use validator::Validate;

/// Form-encoded body of `POST /api/otp`
///
/// Every field is optional so that a missing field is reported by the
/// handler with the right message instead of a generic decode error.
/// The body is decoded whatever its `Content-Type`; browsers posting a
/// plain string send `text/plain`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OtpForm {
    /// `request` or `verify`
    pub action: Option<String>,

    /// `login`, `lab1` or `lab2` (request only)
    pub purpose: Option<String>,

    /// Id returned by a previous request (verify only)
    pub request_id: Option<String>,

    /// The emailed code (verify only)
    pub code: Option<String>,
}

/// Action selected by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpAction {
    Request,
    Verify,
}

impl OtpForm {
    /// Decode a urlencoded body; the first occurrence of a repeated key wins
    pub fn from_body(body: &[u8]) -> Result<Self, serde_urlencoded::de::Error> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body)?;
        let mut form = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "action" => &mut form.action,
                "purpose" => &mut form.purpose,
                "request_id" => &mut form.request_id,
                "code" => &mut form.code,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }

        Ok(form)
    }

    /// Parsed action, `None` when missing or unknown
    pub fn action(&self) -> Option<OtpAction> {
        match self.action.as_deref() {
            Some("request") => Some(OtpAction::Request),
            Some("verify") => Some(OtpAction::Verify),
            _ => None,
        }
    }
}

/// Fields required by `action=verify`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    #[validate(length(min = 1))]
    pub request_id: String,

    #[validate(length(min = 1))]
    pub code: String,
}

impl From<&OtpForm> for VerifyCodeRequest {
    fn from(form: &OtpForm) -> Self {
        Self {
            request_id: form.request_id.clone().unwrap_or_default(),
            code: form.code.clone().unwrap_or_default(),
        }
    }
}

/// Response for a successful `action=request`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestCodeResponse {
    pub request_id: String,
}

/// Response for a successful `action=verify`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyCodeResponse {
    pub ok: bool,
}
