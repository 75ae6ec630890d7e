use corpsite_db::table::Services;
use corpsite_shared::Pagination;
use sea_query::{Expr, ExprTrait, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::{Service, ServiceService};

fn select() -> SelectStatement {
    sea_query::Query::select()
        .columns([
            Services::Id,
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
        .from(Services::Table)
        .to_owned()
}

impl ServiceService {
    /// Services by display order (`sort_order`, then insertion order).
    pub async fn get_services(
        &self,
        pagination: Pagination,
        active_only: bool,
    ) -> corpsite_shared::Result<Vec<Service>> {
        let mut statement = select();

        if active_only {
            statement.and_where(Expr::col(Services::IsActive).eq(true));
        }

        statement
            .order_by(Services::SortOrder, Order::Asc)
            .order_by(Services::Id, Order::Asc)
            .limit(pagination.bounded_limit())
            .offset(pagination.offset());

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Service, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    pub async fn get_service_by_slug(
        &self,
        slug: impl Into<String>,
    ) -> corpsite_shared::Result<Option<Service>> {
        let statement = select()
            .and_where(Expr::col(Services::Slug).eq(slug.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Service, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }

    pub(crate) async fn get_service_by_id(
        &self,
        id: i64,
    ) -> corpsite_shared::Result<Option<Service>> {
        let statement = select()
            .and_where(Expr::col(Services::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Service, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }
}
