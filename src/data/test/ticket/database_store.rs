use super::*;

/// Tests the database-backed store through the `TicketStore` seam.
///
/// Verifies that set/get/all behave like the in-memory store: one record per
/// channel, last write wins.
///
/// Expected: Ok with the latest record per channel
#[tokio::test]
async fn behaves_like_keyed_store() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap().clone();

    let mut store = DatabaseTicketStore::new(db);

    store.set(Ticket::new(10, 1, at(100))).await?;
    store.set(Ticket::new(10, 1, at(500))).await?;
    store.set(Ticket::new(20, 2, at(100))).await?;

    assert_eq!(store.get(10).await?, Some(Ticket::new(10, 1, at(500))));
    assert_eq!(store.get(30).await?, None);
    assert_eq!(store.all().await?.len(), 2);

    Ok(())
}
