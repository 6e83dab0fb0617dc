//! `daily_sales` table: one row per product sale on a given day.

use chrono::NaiveDate;
use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::{coerce, errors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "daily_sales")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: NaiveDate,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub category: String,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub product: String,
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub pack_size: String,
    pub quantity: i64,
    pub price: f64,
    pub total: f64,
    /// Not a foreign key; nothing here owns users.
    pub user_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Create payload: every column except `id`, all required.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewDailySale {
    pub date: NaiveDate,
    #[serde(deserialize_with = "coerce::str_max_50")]
    pub category: String,
    #[serde(deserialize_with = "coerce::str_max_50")]
    pub product: String,
    #[serde(deserialize_with = "coerce::str_max_20")]
    pub pack_size: String,
    #[serde(deserialize_with = "coerce::int")]
    pub quantity: i64,
    #[serde(deserialize_with = "coerce::float")]
    pub price: f64,
    #[serde(deserialize_with = "coerce::float")]
    pub total: f64,
    #[serde(deserialize_with = "coerce::int")]
    pub user_id: i64,
}

impl NewDailySale {
    /// Destructures every field, so a column added to `Model` must be mapped here too.
    pub fn into_active_model(self) -> ActiveModel {
        let NewDailySale { date, category, product, pack_size, quantity, price, total, user_id } = self;
        ActiveModel {
            id: NotSet,
            date: Set(date),
            category: Set(category),
            product: Set(product),
            pack_size: Set(pack_size),
            quantity: Set(quantity),
            price: Set(price),
            total: Set(total),
            user_id: Set(user_id),
        }
    }
}

/// Insert one sale; the database assigns the id.
pub async fn create(db: &DatabaseConnection, input: NewDailySale) -> Result<Model, errors::ModelError> {
    input
        .into_active_model()
        .insert(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Every sale, oldest first.
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
