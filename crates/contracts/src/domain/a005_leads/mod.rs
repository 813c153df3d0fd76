pub mod request;

pub use request::{looks_like_email, LeadReply, NewsletterSubscription, WholesaleInquiry};
