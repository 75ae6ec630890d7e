use std::path::Path;

use anyhow::Result;
use corpsite_catalog::{CreateServiceInput, ServiceService, UpdateServiceInput};

/// Load a JSON array of services into the catalog.
///
/// Services are matched by slug: unknown slugs are created and known ones
/// have every other field replaced.
pub async fn import(config: crate::config::Config, file: impl AsRef<Path>) -> Result<()> {
    let file = file.as_ref();
    let content = tokio::fs::read_to_string(file).await?;
    let inputs: Vec<CreateServiceInput> = serde_json::from_str(&content)?;

    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    crate::db::migrate(&pool).await?;

    let (created, updated) = import_services(&ServiceService(pool.clone()), inputs).await?;
    pool.close().await;

    tracing::info!(
        file = %file.display(),
        created,
        updated,
        "Services imported"
    );

    Ok(())
}

pub async fn import_services(
    service: &ServiceService,
    inputs: Vec<CreateServiceInput>,
) -> Result<(usize, usize)> {
    let mut created = 0;
    let mut updated = 0;

    for input in inputs {
        match service.get_service_by_slug(&input.slug).await? {
            Some(existing) => {
                service
                    .update_service(
                        existing.id,
                        UpdateServiceInput {
                            title: input.title,
                            description: input.description,
                            detailed_description: input.detailed_description,
                            icon: input.icon,
                            image: input.image,
                            features: input.features,
                            is_active: input.is_active,
                            sort_order: input.sort_order,
                            meta_title: input.meta_title,
                            meta_description: input.meta_description,
                        },
                    )
                    .await?;
                updated += 1;
            }
            None => {
                service.create_service(input).await?;
                created += 1;
            }
        }
    }

    Ok((created, updated))
}
