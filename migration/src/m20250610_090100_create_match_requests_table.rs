use sea_orm_migration::prelude::*;

use crate::m20250610_090000_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create match_requests table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(MatchRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MatchRequests::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MatchRequests::MentorId).uuid().not_null())
                    .col(ColumnDef::new(MatchRequests::MenteeId).uuid().not_null())
                    .col(ColumnDef::new(MatchRequests::Message).text().not_null())
                    .col(
                        ColumnDef::new(MatchRequests::Status)
                            .string_len(16)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(MatchRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(MatchRequests::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .check(Expr::cust(
                        "status IN ('pending', 'accepted', 'rejected', 'cancelled')",
                    ))
                    .check(Expr::cust("mentor_id <> mentee_id"))
                    // FK → users (mentor)
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_requests_mentor_id")
                            .from(MatchRequests::Table, MatchRequests::MentorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // FK → users (mentee)
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_requests_mentee_id")
                            .from(MatchRequests::Table, MatchRequests::MenteeId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Invariant backstops
        // =====================================================

        // One active request per (mentor, mentee) pair
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX uq_match_requests_pair_active
                ON match_requests (mentor_id, mentee_id)
                WHERE status IN ('pending', 'accepted');
                "#,
            )
            .await?;

        // One pending request per mentee
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX uq_match_requests_mentee_pending
                ON match_requests (mentee_id)
                WHERE status = 'pending';
                "#,
            )
            .await?;

        // One accepted mentee per mentor
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX uq_match_requests_mentor_accepted
                ON match_requests (mentor_id)
                WHERE status = 'accepted';
                "#,
            )
            .await?;

        // =====================================================
        // Listing indexes
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_match_requests_mentor_id
                ON match_requests (mentor_id, created_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_match_requests_mentee_id
                ON match_requests (mentee_id, created_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_match_requests_updated_at
                BEFORE UPDATE ON match_requests
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS update_match_requests_updated_at ON match_requests",
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS uq_match_requests_pair_active;
                DROP INDEX IF EXISTS uq_match_requests_mentee_pending;
                DROP INDEX IF EXISTS uq_match_requests_mentor_accepted;
                DROP INDEX IF EXISTS idx_match_requests_mentor_id;
                DROP INDEX IF EXISTS idx_match_requests_mentee_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MatchRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MatchRequests {
    Table,
    Id,
    MentorId,
    MenteeId,
    Message,
    Status,
    CreatedAt,
    UpdatedAt,
}
