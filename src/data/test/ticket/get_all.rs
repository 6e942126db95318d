use super::*;

/// Tests listing every tracked ticket.
///
/// Expected: Ok with one entry per stored channel, in insertion order
#[tokio::test]
async fn returns_all_tickets() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    TicketFactory::new(db).channel_id(1).build().await?;
    TicketFactory::new(db).channel_id(2).build().await?;
    TicketFactory::new(db).channel_id(3).build().await?;

    let tickets = TicketRepository::new(db).get_all().await?;

    let channels: Vec<u64> = tickets.iter().map(|t| t.channel_id).collect();
    assert_eq!(channels, vec![1, 2, 3]);

    Ok(())
}

/// Tests listing with no tickets stored.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_when_nothing_tracked() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tickets = TicketRepository::new(db).get_all().await?;

    assert!(tickets.is_empty());

    Ok(())
}
