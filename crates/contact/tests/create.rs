use corpsite_contact::{ContactService, Status, SubmitInquiryInput};
use corpsite_shared::{Error, Pagination};
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_create_inquiry_stores_submission_as_new() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let service = ContactService(pool);

    let inquiry = service
        .create_inquiry(SubmitInquiryInput {
            name: "A. Visitor".to_owned(),
            email: "a@x.com".to_owned(),
            subject: "Pricing".to_owned(),
            message: "How much?".to_owned(),
            phone: Some("+91 9812692333".to_owned()),
            company: Some("".to_owned()),
            ..Default::default()
        })
        .await?;

    assert!(inquiry.id > 0);
    assert_eq!(inquiry.name, "A. Visitor");
    assert_eq!(inquiry.email, "a@x.com");
    assert_eq!(inquiry.subject, "Pricing");
    assert_eq!(inquiry.message, "How much?");
    assert_eq!(inquiry.status, Status::New);
    assert_eq!(inquiry.phone.as_deref(), Some("+91 9812692333"));
    assert_eq!(inquiry.company, None);
    assert_eq!(inquiry.response, None);
    assert_eq!(inquiry.responded_at, None);
    assert_eq!(inquiry.responded_by, None);
    assert_eq!(
        inquiry.timestamps.created_at,
        inquiry.timestamps.updated_at
    );

    let loaded = service.get_inquiry_by_id(inquiry.id).await?;
    assert_eq!(loaded, Some(inquiry));

    Ok(())
}

#[tokio::test]
async fn test_invalid_submissions_are_rejected_before_persisting() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let service = ContactService(pool);

    let cases = [
        ("name", SubmitInquiryInput {
            name: "".to_owned(),
            ..helpers::submission("john")
        }),
        ("name", SubmitInquiryInput {
            name: "   ".to_owned(),
            ..helpers::submission("john")
        }),
        ("email", SubmitInquiryInput {
            email: "not-an-email".to_owned(),
            ..helpers::submission("john")
        }),
        ("email", SubmitInquiryInput {
            email: "".to_owned(),
            ..helpers::submission("john")
        }),
        ("subject", SubmitInquiryInput {
            subject: "".to_owned(),
            ..helpers::submission("john")
        }),
        ("message", SubmitInquiryInput {
            message: "".to_owned(),
            ..helpers::submission("john")
        }),
    ];

    for (field, input) in cases {
        match service.create_inquiry(input).await {
            Err(Error::Validate(errors)) => {
                assert!(
                    errors.field_errors().contains_key(field),
                    "expected a `{field}` error, got {errors:?}"
                );
            }
            other => panic!("expected validation error for `{field}`, got {other:?}"),
        }
    }

    let stored = service.get_inquiries(Pagination::default()).await?;
    assert!(stored.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_missing_fields_deserialize_to_validation_errors() -> anyhow::Result<()> {
    let input: SubmitInquiryInput =
        serde_json::from_str(r#"{"email": "a@x.com", "message": "hello"}"#)?;

    let errors = validator::Validate::validate(&input).unwrap_err();
    let fields = errors.field_errors();
    assert!(fields.contains_key("name"));
    assert!(fields.contains_key("subject"));
    assert!(!fields.contains_key("email"));
    assert!(!fields.contains_key("message"));

    Ok(())
}

#[tokio::test]
async fn test_unknown_inquiry_is_absent() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let service = ContactService(pool);

    assert_eq!(service.get_inquiry_by_id(42).await?, None);

    Ok(())
}
