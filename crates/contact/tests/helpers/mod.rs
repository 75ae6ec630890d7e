use std::{path::PathBuf, str::FromStr};

use corpsite_contact::{ContactService, SubmitInquiryInput};
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

#[allow(dead_code)]
pub fn submission(name: impl Into<String>) -> SubmitInquiryInput {
    let name = name.into();

    SubmitInquiryInput {
        email: format!("{name}@corpsite.localhost"),
        name,
        subject: "Pricing".to_owned(),
        message: "my message".to_owned(),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub async fn create_submit(service: &ContactService, name: impl Into<String>) -> anyhow::Result<i64> {
    let ids = create_submit_all(service, vec![name]).await?;

    Ok(ids.first().unwrap().to_owned())
}

#[allow(dead_code)]
pub async fn create_submit_all(
    service: &ContactService,
    names: impl IntoIterator<Item = impl Into<String>>,
) -> anyhow::Result<Vec<i64>> {
    let mut ids = vec![];
    for name in names.into_iter() {
        let inquiry = service.create_inquiry(submission(name)).await?;
        ids.push(inquiry.id);
    }

    Ok(ids)
}
