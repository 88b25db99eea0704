use crate::models::OrderStatus;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the orders table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub client_id: Uuid,
    pub order_date: DateTimeWithTimeZone,
    pub status: OrderStatus,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Order {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            client_id: model.client_id,
            order_date: model.order_date.into(),
            status: model.status,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

// Orders always enter storage pending, with a server-side order date.
impl From<crate::models::NewOrder> for ActiveModel {
    fn from(input: crate::models::NewOrder) -> Self {
        ActiveModel {
            id: Set(Uuid::now_v7()),
            client_id: Set(input.client_id),
            order_date: Set(chrono::Utc::now().into()),
            status: Set(OrderStatus::Pending),
            created_at: Set(chrono::Utc::now().into()),
            updated_at: Set(chrono::Utc::now().into()),
        }
    }
}
