use corpsite_db::table::ContactInquiries;
use corpsite_shared::Pagination;
use sea_query::{Expr, ExprTrait, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::{ContactInquiry, ContactService};

fn select() -> SelectStatement {
    sea_query::Query::select()
        .columns([
            ContactInquiries::Id,
            ContactInquiries::Name,
            ContactInquiries::Email,
            ContactInquiries::Phone,
            ContactInquiries::Subject,
            ContactInquiries::Message,
            ContactInquiries::Company,
            ContactInquiries::ServiceInterest,
            ContactInquiries::Status,
            ContactInquiries::Response,
            ContactInquiries::RespondedAt,
            ContactInquiries::RespondedBy,
            ContactInquiries::CreatedAt,
            ContactInquiries::UpdatedAt,
        ])
        .from(ContactInquiries::Table)
        .to_owned()
}

impl ContactService {
    /// Inquiries in insertion order, oldest first.
    pub async fn get_inquiries(
        &self,
        pagination: Pagination,
    ) -> corpsite_shared::Result<Vec<ContactInquiry>> {
        let statement = select()
            .order_by(ContactInquiries::Id, Order::Asc)
            .limit(pagination.bounded_limit())
            .offset(pagination.offset())
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, ContactInquiry, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    pub async fn get_inquiry_by_id(
        &self,
        id: i64,
    ) -> corpsite_shared::Result<Option<ContactInquiry>> {
        let statement = select()
            .and_where(Expr::col(ContactInquiries::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, ContactInquiry, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }
}
