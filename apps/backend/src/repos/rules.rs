//! Rules repository functions (generic over ConnectionTrait).
//!
//! The rules table is a singleton: every read and write targets the fixed row
//! id, so a second create can only ever hit the primary key conflict.

use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};

use crate::entities::rules::{self, RULES_ROW_ID};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

/// Rules domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct RulesDoc {
    pub text: String,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

impl From<rules::Model> for RulesDoc {
    fn from(model: rules::Model) -> Self {
        Self {
            text: model.text,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

pub async fn find<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Option<RulesDoc>, DomainError> {
    let model = rules::Entity::find_by_id(RULES_ROW_ID)
        .one(conn)
        .await
        .map_err(DomainError::from)?;
    Ok(model.map(RulesDoc::from))
}

/// Create the singleton row. Fails with a conflict when it already exists.
pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    text: &str,
) -> Result<RulesDoc, DomainError> {
    let now = time::OffsetDateTime::now_utc();
    let active = rules::ActiveModel {
        id: Set(RULES_ROW_ID),
        text: Set(text.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let rows = rules::Entity::insert(active)
        .on_conflict(
            OnConflict::column(rules::Column::Id)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await
        .map_err(DomainError::from)?;

    if rows == 0 {
        return Err(DomainError::conflict(
            ConflictKind::RulesAlreadyExist,
            "Rules already exist",
        ));
    }

    find(conn).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Rules, "Rules row missing after insert")
    })
}

/// Update the singleton row. Fails with NotFound when it was never created.
pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    text: &str,
) -> Result<RulesDoc, DomainError> {
    if find(conn).await?.is_none() {
        return Err(DomainError::not_found(
            NotFoundKind::Rules,
            "Rules have not been created yet",
        ));
    }
    let active = rules::ActiveModel {
        id: Set(RULES_ROW_ID),
        text: Set(text.to_string()),
        created_at: sea_orm::NotSet,
        updated_at: Set(time::OffsetDateTime::now_utc()),
    };
    let model = active.update(conn).await.map_err(DomainError::from)?;
    Ok(RulesDoc::from(model))
}
