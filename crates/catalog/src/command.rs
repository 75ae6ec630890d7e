use std::sync::LazyLock;

use corpsite_db::table::Services;
use corpsite_shared::{Error, Timestamps};
use regex::Regex;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use validator::Validate;

use crate::{Service, ServiceService};

static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid slug regex"));

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateServiceInput {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(regex(path = *SLUG_REGEX), length(max = 120))]
    pub slug: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub detailed_description: Option<String>,
    pub icon: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    #[serde(default)]
    pub sort_order: i64,
    #[validate(length(max = 255))]
    pub meta_title: Option<String>,
    #[validate(length(max = 500))]
    pub meta_description: Option<String>,
}

/// Editable fields of a service. The slug is public link material and has no
/// counterpart here.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateServiceInput {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub detailed_description: Option<String>,
    pub icon: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    #[serde(default)]
    pub sort_order: i64,
    #[validate(length(max = 255))]
    pub meta_title: Option<String>,
    #[validate(length(max = 500))]
    pub meta_description: Option<String>,
}

fn default_is_active() -> bool {
    true
}

impl ServiceService {
    pub async fn create_service(
        &self,
        input: CreateServiceInput,
    ) -> corpsite_shared::Result<Service> {
        input.validate()?;

        let timestamps = Timestamps::now();
        let statement = Query::insert()
            .into_table(Services::Table)
            .columns([
                Services::Title,
                Services::Slug,
                Services::Description,
                Services::DetailedDescription,
                Services::Icon,
                Services::Image,
                Services::Features,
                Services::IsActive,
                Services::SortOrder,
                Services::MetaTitle,
                Services::MetaDescription,
                Services::CreatedAt,
                Services::UpdatedAt,
            ])
            .values_panic([
                input.title.into(),
                input.slug.to_owned().into(),
                input.description.into(),
                input.detailed_description.into(),
                input.icon.into(),
                input.image.into(),
                serde_json::to_string(&input.features)?.into(),
                input.is_active.into(),
                input.sort_order.into(),
                input.meta_title.into(),
                input.meta_description.into(),
                timestamps.created_at.into(),
                timestamps.updated_at.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id = match sqlx::query_with(&sql, values).execute(&self.0).await {
            Ok(result) => result.last_insert_rowid(),
            Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
                return Err(Error::Conflict(format!(
                    "service slug `{}` already exists",
                    input.slug
                )));
            }
            Err(err) => return Err(err.into()),
        };

        let Some(service) = self.get_service_by_id(id).await? else {
            corpsite_shared::bail!("service {id} missing after insert");
        };

        tracing::info!(service_id = id, slug = %service.slug, "Service created");

        Ok(service)
    }

    pub async fn update_service(
        &self,
        id: i64,
        input: UpdateServiceInput,
    ) -> corpsite_shared::Result<Option<Service>> {
        input.validate()?;

        if self.get_service_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let statement = Query::update()
            .table(Services::Table)
            .values([
                (Services::Title, input.title.into()),
                (Services::Description, input.description.into()),
                (
                    Services::DetailedDescription,
                    input.detailed_description.into(),
                ),
                (Services::Icon, input.icon.into()),
                (Services::Image, input.image.into()),
                (
                    Services::Features,
                    serde_json::to_string(&input.features)?.into(),
                ),
                (Services::IsActive, input.is_active.into()),
                (Services::SortOrder, input.sort_order.into()),
                (Services::MetaTitle, input.meta_title.into()),
                (Services::MetaDescription, input.meta_description.into()),
                (Services::UpdatedAt, corpsite_shared::now().into()),
            ])
            .and_where(Expr::col(Services::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        tracing::info!(service_id = id, "Service updated");

        self.get_service_by_id(id).await
    }
}
