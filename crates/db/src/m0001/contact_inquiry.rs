use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::ContactInquiries;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(ContactInquiries::Table)
        .col(
            ColumnDef::new(ContactInquiries::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(ContactInquiries::Name).string().not_null())
        .col(
            ColumnDef::new(ContactInquiries::Email)
                .string()
                .not_null()
                .string_len(320),
        )
        .col(ColumnDef::new(ContactInquiries::Phone).string().null())
        .col(ColumnDef::new(ContactInquiries::Subject).string().not_null())
        .col(ColumnDef::new(ContactInquiries::Message).text().not_null())
        .col(ColumnDef::new(ContactInquiries::Company).string().null())
        .col(
            ColumnDef::new(ContactInquiries::ServiceInterest)
                .string()
                .null(),
        )
        .col(
            ColumnDef::new(ContactInquiries::Status)
                .string()
                .not_null()
                .string_len(15)
                .default("new"),
        )
        .col(ColumnDef::new(ContactInquiries::Response).text().null())
        .col(
            ColumnDef::new(ContactInquiries::RespondedAt)
                .big_integer()
                .null(),
        )
        .col(
            ColumnDef::new(ContactInquiries::RespondedBy)
                .big_integer()
                .null(),
        )
        .col(
            ColumnDef::new(ContactInquiries::CreatedAt)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(ContactInquiries::UpdatedAt)
                .big_integer()
                .not_null(),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(ContactInquiries::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateIdx1;

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_contact_inquiries_status")
        .table(ContactInquiries::Table)
        .col(ContactInquiries::Status)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_contact_inquiries_status")
        .table(ContactInquiries::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateIdx1 {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_idx_1().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_idx_1().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
