mod contact_inquiry;
mod service;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "corpsite",
    "m0001",
    vec_box![],
    vec_box![
        contact_inquiry::CreateTable,
        contact_inquiry::CreateIdx1,
        service::CreateTable,
        service::CreateUk1,
        service::CreateIdx1,
    ]
);
