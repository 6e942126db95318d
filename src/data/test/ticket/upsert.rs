use super::*;

/// Tests creating a new ticket record.
///
/// Expected: Ok with one row stored for the channel
#[tokio::test]
async fn creates_new_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TicketRepository::new(db);
    let stored = repo.upsert(&Ticket::new(111, 222, at(100))).await?;

    assert_eq!(stored, Ticket::new(111, 222, at(100)));

    let row = entity::prelude::Ticket::find().one(db).await?.unwrap();
    assert_eq!(row.channel_id, "111");
    assert_eq!(row.creator_id, "222");

    Ok(())
}

/// Tests updating an existing ticket record.
///
/// Verifies that upserting the same channel replaces the activity timestamp
/// instead of inserting a second row.
///
/// Expected: Ok with a single updated row
#[tokio::test]
async fn updates_existing_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TicketRepository::new(db);
    repo.upsert(&Ticket::new(111, 222, at(100))).await?;
    let updated = repo.upsert(&Ticket::new(111, 222, at(90_000))).await?;

    assert_eq!(updated.last_creator_activity, at(90_000));

    let count = entity::prelude::Ticket::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that upsert preserves created_at on update.
///
/// Expected: Ok with created_at unchanged and updated_at advanced
#[tokio::test]
async fn preserves_created_at_on_update() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TicketRepository::new(db);
    repo.upsert(&Ticket::new(111, 222, at(100))).await?;
    let original = entity::prelude::Ticket::find().one(db).await?.unwrap();

    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    repo.upsert(&Ticket::new(111, 222, at(200))).await?;
    let updated = entity::prelude::Ticket::find().one(db).await?.unwrap();

    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at > original.updated_at);

    Ok(())
}
