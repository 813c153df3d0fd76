use serde::{Deserialize, Serialize};

/// Newsletter signup payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewsletterSubscription {
    pub email: String,
    pub first_name: String,
    pub source: String,
}

impl NewsletterSubscription {
    /// Signup coming from the site-wide banner.
    pub fn from_site(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            first_name: String::new(),
            source: "website".to_string(),
        }
    }
}

/// Wholesale partnership inquiry payload.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct WholesaleInquiry {
    pub business_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub business_type: String,
    pub location: String,
    pub website: String,
    pub estimated_monthly_volume: String,
    pub message: String,
}

/// Both lead endpoints answer (success or refusal) with a single message.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LeadReply {
    pub message: String,
}

/// Cheap pre-submission check; the backend performs real validation.
pub fn looks_like_email(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.contains('@')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_signup_defaults() {
        let subscription = NewsletterSubscription::from_site("a@b.co");
        assert_eq!(subscription.email, "a@b.co");
        assert_eq!(subscription.first_name, "");
        assert_eq!(subscription.source, "website");
    }

    #[test]
    fn test_newsletter_wire_shape() {
        let json = serde_json::to_value(NewsletterSubscription::from_site("a@b.co")).unwrap();
        assert_eq!(json["email"], "a@b.co");
        assert_eq!(json["first_name"], "");
        assert_eq!(json["source"], "website");
    }

    #[test]
    fn test_looks_like_email() {
        assert!(looks_like_email("someone@example.com"));
        assert!(looks_like_email("  a@b  "));
        assert!(!looks_like_email("not-an-email"));
        assert!(!looks_like_email("   "));
    }
}
