use test_utils::factory::create_ticket;

use super::*;

/// Tests retrieving a ticket by channel ID.
///
/// Verifies that the repository converts the stored string IDs back into the
/// ticket domain model.
///
/// Expected: Ok(Some(ticket))
#[tokio::test]
async fn returns_ticket_for_channel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    TicketFactory::new(db)
        .channel_id(123456789)
        .creator_id(987654321)
        .last_creator_message_at(at(1_700_000_000))
        .build()
        .await?;

    let repo = TicketRepository::new(db);
    let ticket = repo.get_by_channel_id(123456789).await?;

    assert_eq!(
        ticket,
        Some(Ticket::new(123456789, 987654321, at(1_700_000_000)))
    );

    Ok(())
}

/// Tests retrieving a ticket created with factory defaults.
///
/// Expected: Ok(Some(ticket)) with the stored channel and creator IDs
#[tokio::test]
async fn returns_default_ticket() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let row = create_ticket(db).await?;
    let channel_id: u64 = row.channel_id.parse().unwrap();
    let creator_id: u64 = row.creator_id.parse().unwrap();

    let repo = TicketRepository::new(db);
    let ticket = repo.get_by_channel_id(channel_id).await?.unwrap();

    assert_eq!(ticket.channel_id, channel_id);
    assert_eq!(ticket.creator_id, creator_id);

    Ok(())
}

/// Tests retrieving an untracked channel.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_untracked_channel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    TicketFactory::new(db).build().await?;

    let repo = TicketRepository::new(db);
    let ticket = repo.get_by_channel_id(1).await?;

    assert!(ticket.is_none());

    Ok(())
}

/// Tests that a corrupted row surfaces as an internal error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_non_numeric_creator_id() -> Result<(), AppError> {
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    entity::ticket::ActiveModel {
        id: ActiveValue::NotSet,
        channel_id: ActiveValue::Set("55".to_string()),
        creator_id: ActiveValue::Set("not-a-snowflake".to_string()),
        last_creator_message_at: ActiveValue::Set(at(1)),
        created_at: ActiveValue::Set(at(1)),
        updated_at: ActiveValue::Set(at(1)),
    }
    .insert(db)
    .await?;

    let result = TicketRepository::new(db).get_by_channel_id(55).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
