use corpsite_contact::ContactInquiry;

use crate::EmailService;

impl EmailService {
    /// Tells staff about a new inquiry. Returns `false` when the message
    /// could not be delivered; the error is logged, never returned.
    pub async fn send_contact_notification(&self, inquiry: &ContactInquiry) -> bool {
        let result = self
            .send_plain(
                &self.staff_address,
                notification_subject(inquiry),
                notification_body(inquiry, &self.company_name),
            )
            .await;

        match result {
            Ok(_) => {
                tracing::info!(inquiry_id = inquiry.id, "Contact notification sent");
                true
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    recipient = %self.staff_address,
                    inquiry_id = inquiry.id,
                    "Failed to send contact notification"
                );
                false
            }
        }
    }

    /// Thanks the visitor for their inquiry. Same failure contract as
    /// [`EmailService::send_contact_notification`].
    pub async fn send_auto_reply(&self, inquiry: &ContactInquiry) -> bool {
        let result = self
            .send_plain(
                &inquiry.email,
                auto_reply_subject(&self.company_name),
                auto_reply_body(inquiry, &self.company_name, &self.contact_phones),
            )
            .await;

        match result {
            Ok(_) => {
                tracing::info!(inquiry_id = inquiry.id, "Auto-reply sent");
                true
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    recipient = %inquiry.email,
                    inquiry_id = inquiry.id,
                    "Failed to send auto-reply"
                );
                false
            }
        }
    }
}

fn notification_subject(inquiry: &ContactInquiry) -> String {
    format!("New Contact Inquiry: {}", inquiry.subject)
}

fn notification_body(inquiry: &ContactInquiry, company_name: &str) -> String {
    format!(
        r#"New contact inquiry received:

Name: {}
Email: {}
Phone: {}
Company: {}
Subject: {}
Service Interest: {}

Message:
{}

---
This inquiry was submitted through the {} website.
"#,
        inquiry.name,
        inquiry.email,
        inquiry.phone.as_deref().unwrap_or("Not provided"),
        inquiry.company.as_deref().unwrap_or("Not provided"),
        inquiry.subject,
        inquiry.service_interest.as_deref().unwrap_or("Not specified"),
        inquiry.message,
        company_name
    )
}

fn auto_reply_subject(company_name: &str) -> String {
    format!("Thank you for contacting {company_name}")
}

fn auto_reply_body(inquiry: &ContactInquiry, company_name: &str, phones: &[String; 2]) -> String {
    format!(
        r#"Dear {},

Thank you for contacting {}. We have received your inquiry regarding "{}".

Our team will review your message and get back to you within 24 hours.

If you have any urgent queries, please feel free to call us at:
- {}
- {}

Best regards,
{} Team

---
This is an automated response. Please do not reply to this email.
"#,
        inquiry.name, company_name, inquiry.subject, phones[0], phones[1], company_name
    )
}
