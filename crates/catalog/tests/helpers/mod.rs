use std::{path::PathBuf, str::FromStr};

use corpsite_catalog::{CreateServiceInput, Service, ServiceService};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    corpsite_db::migrator()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;

    Ok(pool)
}

pub fn service_input(slug: impl Into<String>, sort_order: i64, is_active: bool) -> CreateServiceInput {
    let slug = slug.into();

    CreateServiceInput {
        title: format!("Service {slug}"),
        description: format!("About {slug}"),
        slug,
        detailed_description: None,
        icon: Some("fa-hospital".to_owned()),
        image: None,
        features: vec!["Planning".to_owned(), "Licensing".to_owned()],
        is_active,
        sort_order,
        meta_title: None,
        meta_description: None,
    }
}

#[allow(dead_code)]
pub async fn create_service(
    service: &ServiceService,
    slug: impl Into<String>,
    sort_order: i64,
    is_active: bool,
) -> anyhow::Result<Service> {
    Ok(service
        .create_service(service_input(slug, sort_order, is_active))
        .await?)
}
