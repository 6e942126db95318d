use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(pk_auto(Ticket::Id))
                    .col(string(Ticket::ChannelId))
                    .col(string(Ticket::CreatorId))
                    .col(timestamp(Ticket::LastCreatorMessageAt))
                    .col(timestamp(Ticket::CreatedAt))
                    .col(timestamp(Ticket::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // One ticket record per channel
        manager
            .create_index(
                Index::create()
                    .name("idx_ticket_channel_id")
                    .table(Ticket::Table)
                    .col(Ticket::ChannelId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_ticket_channel_id")
                    .table(Ticket::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Ticket {
    Table,
    Id,
    ChannelId,
    CreatorId,
    LastCreatorMessageAt,
    CreatedAt,
    UpdatedAt,
}
