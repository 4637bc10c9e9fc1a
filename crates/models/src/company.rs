use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, PaginatorTrait, QueryOrder, Set, TransactionTrait};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Textual form of `founding_date` in every representation.
pub const FOUNDING_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    pub founder: Option<String>,
    pub founding_date: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Wire rendering of a company. Field names match the column names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRepresentation {
    pub id: i32,
    pub name: Option<String>,
    pub founder: Option<String>,
    pub founding_date: String,
}

fn format_founding_date(at: &DateTime) -> String {
    at.format(FOUNDING_DATE_FORMAT).to_string()
}

impl Model {
    pub fn to_representation(&self) -> CompanyRepresentation {
        CompanyRepresentation {
            id: self.id,
            name: self.name.clone(),
            founder: self.founder.clone(),
            founding_date: format_founding_date(&self.founding_date),
        }
    }
}

impl From<Model> for CompanyRepresentation {
    fn from(m: Model) -> Self {
        let founding_date = format_founding_date(&m.founding_date);
        Self { id: m.id, name: m.name, founder: m.founder, founding_date }
    }
}

/// Fields a caller may supply for a new row; `id` always comes from the store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewCompany {
    pub name: Option<String>,
    pub founder: Option<String>,
    pub founding_date: Option<DateTime>,
}

impl NewCompany {
    pub fn new(name: Option<String>, founder: Option<String>) -> Self {
        Self { name, founder, founding_date: None }
    }

    fn into_row(self, now: DateTime) -> ActiveModel {
        ActiveModel {
            name: Set(self.name),
            founder: Set(self.founder),
            founding_date: Set(self.founding_date.unwrap_or(now)),
            ..Default::default()
        }
    }
}

pub fn now() -> DateTime {
    Utc::now().naive_utc()
}

pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, ModelError> {
    let rows = Entity::find().order_by_asc(Column::Id).all(db).await?;
    Ok(rows)
}

pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, ModelError> {
    let row = Entity::find_by_id(id).one(db).await?;
    Ok(row)
}

/// Insert one row and read it back inside a single transaction.
pub async fn insert(db: &DatabaseConnection, input: NewCompany) -> Result<Model, ModelError> {
    let txn = db.begin().await?;
    let created = input.into_row(now()).insert(&txn).await?;
    txn.commit().await?;
    Ok(created)
}

/// Bulk insert; callers wanting atomicity pass a transaction.
pub async fn insert_many<C: ConnectionTrait>(db: &C, inputs: Vec<NewCompany>) -> Result<u64, ModelError> {
    if inputs.is_empty() {
        return Ok(0);
    }
    let count = inputs.len() as u64;
    let stamp = now();
    let rows = inputs.into_iter().map(|c| c.into_row(stamp));
    Entity::insert_many(rows).exec(db).await?;
    Ok(count)
}

pub async fn delete_all<C: ConnectionTrait>(db: &C) -> Result<u64, ModelError> {
    let res = Entity::delete_many().exec(db).await?;
    Ok(res.rows_affected)
}

pub async fn count<C: ConnectionTrait>(db: &C) -> Result<u64, ModelError> {
    let n = Entity::find().count(db).await?;
    Ok(n)
}
