use sea_query::Iden;

#[derive(Iden, Clone, Copy)]
pub enum ContactInquiries {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Subject,
    Message,
    Company,
    ServiceInterest,
    Status,
    Response,
    RespondedAt,
    RespondedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum Services {
    Table,
    Id,
    Title,
    Slug,
    Description,
    DetailedDescription,
    Icon,
    Image,
    Features,
    IsActive,
    SortOrder,
    MetaTitle,
    MetaDescription,
    CreatedAt,
    UpdatedAt,
}
