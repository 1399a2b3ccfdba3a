use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    /// "mentor" | "mentee"
    pub role: String,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    #[sea_orm(nullable)]
    pub image_data: Option<Vec<u8>>,
    #[sea_orm(nullable)]
    pub image_format: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub skills: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use sea_orm::ActiveValue::{self, Set};

        if let ActiveValue::Set(email) = &self.email {
            self.email = Set(email.trim().to_lowercase());
        }

        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;

            if !_insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
