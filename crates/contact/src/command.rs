use corpsite_db::table::ContactInquiries;
use corpsite_shared::{Error, Timestamps};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{ContactInquiry, ContactService, Status};

/// A visitor's contact-form submission.
///
/// Required text fields default to empty when absent from the payload so that
/// a missing field is reported through validation with its field name.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SubmitInquiryInput {
    #[serde(default)]
    #[validate(custom(function = "not_blank"), length(max = 255))]
    pub name: String,
    #[serde(default)]
    #[validate(email, length(max = 320))]
    pub email: String,
    #[validate(length(max = 32))]
    pub phone: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "not_blank"), length(max = 255))]
    pub subject: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub message: String,
    #[validate(length(max = 255))]
    pub company: Option<String>,
    #[validate(length(max = 255))]
    pub service_interest: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusInput {
    pub status: Status,
    pub response: Option<String>,
    pub responded_by: Option<i64>,
}

impl Validate for UpdateStatusInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let has_response = self.response.as_deref().is_some_and(|r| !r.trim().is_empty());
        if has_response && self.responded_by.is_none() {
            errors.add("responded_by", ValidationError::new("required"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }

    Ok(())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl ContactService {
    pub async fn create_inquiry(
        &self,
        input: SubmitInquiryInput,
    ) -> corpsite_shared::Result<ContactInquiry> {
        input.validate()?;

        let timestamps = Timestamps::now();
        let statement = Query::insert()
            .into_table(ContactInquiries::Table)
            .columns([
                ContactInquiries::Name,
                ContactInquiries::Email,
                ContactInquiries::Phone,
                ContactInquiries::Subject,
                ContactInquiries::Message,
                ContactInquiries::Company,
                ContactInquiries::ServiceInterest,
                ContactInquiries::Status,
                ContactInquiries::CreatedAt,
                ContactInquiries::UpdatedAt,
            ])
            .values_panic([
                input.name.into(),
                input.email.into(),
                non_blank(input.phone).into(),
                input.subject.into(),
                input.message.into(),
                non_blank(input.company).into(),
                non_blank(input.service_interest).into(),
                Status::New.to_string().into(),
                timestamps.created_at.into(),
                timestamps.updated_at.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id = sqlx::query_with(&sql, values)
            .execute(&self.0)
            .await?
            .last_insert_rowid();

        let Some(inquiry) = self.get_inquiry_by_id(id).await? else {
            corpsite_shared::bail!("contact inquiry {id} missing after insert");
        };

        tracing::info!(inquiry_id = id, "Contact inquiry stored");

        Ok(inquiry)
    }

    /// Moves an inquiry forward in its lifecycle, optionally attaching the
    /// staff response. Returns `None` without writing anything when `id` is
    /// unknown.
    ///
    /// The write only applies while the stored status is still the one the
    /// transition was checked against; a concurrent change re-runs the check.
    pub async fn update_inquiry_status(
        &self,
        id: i64,
        input: UpdateStatusInput,
    ) -> corpsite_shared::Result<Option<ContactInquiry>> {
        input.validate()?;

        let response = non_blank(input.response);

        let from = loop {
            let Some(current) = self.get_inquiry_by_id(id).await? else {
                return Ok(None);
            };

            if !current.status.can_transition_to(input.status) {
                return Err(Error::InvalidTransition {
                    from: current.status.to_string(),
                    to: input.status.to_string(),
                });
            }

            let now = corpsite_shared::now();
            let mut values: Vec<(ContactInquiries, Expr)> = vec![
                (ContactInquiries::Status, input.status.to_string().into()),
                (ContactInquiries::UpdatedAt, now.into()),
            ];

            if let Some(response) = &response {
                values.push((ContactInquiries::Response, response.clone().into()));
                values.push((ContactInquiries::RespondedAt, now.into()));
                values.push((ContactInquiries::RespondedBy, input.responded_by.into()));
            }

            let statement = Query::update()
                .table(ContactInquiries::Table)
                .values(values)
                .and_where(Expr::col(ContactInquiries::Id).eq(id))
                .and_where(Expr::col(ContactInquiries::Status).eq(current.status.to_string()))
                .to_owned();

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

            if result.rows_affected() == 1 {
                break current.status;
            }

            tracing::debug!(inquiry_id = id, "Contact inquiry status changed concurrently, retrying");
        };

        tracing::info!(
            inquiry_id = id,
            from = %from,
            to = %input.status,
            "Contact inquiry status updated"
        );

        self.get_inquiry_by_id(id).await
    }
}
