use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "match_requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub mentor_id: Uuid,
    pub mentee_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    /// "pending" | "accepted" | "rejected" | "cancelled"
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::MentorId",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_delete = "Cascade"
    )]
    Mentor,
    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::MenteeId",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_delete = "Cascade"
    )]
    Mentee,
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    #[allow(unused_mut)]
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            if !_insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
