//! Player repository functions (generic over ConnectionTrait).

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::players;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Player domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub position: i32,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

impl From<players::Model> for Player {
    fn from(model: players::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            position: model.position,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// All players ordered by board position, id as tiebreak.
pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Player>, DomainError> {
    let models = players::Entity::find()
        .order_by_asc(players::Column::Position)
        .order_by_asc(players::Column::Id)
        .all(conn)
        .await
        .map_err(DomainError::from)?;
    Ok(models.into_iter().map(Player::from).collect())
}

pub async fn count<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, DomainError> {
    players::Entity::find()
        .count(conn)
        .await
        .map_err(DomainError::from)
}

/// Players other than `id`; used when re-checking the cap on update.
pub async fn count_excluding<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<u64, DomainError> {
    players::Entity::find()
        .filter(players::Column::Id.ne(id))
        .count(conn)
        .await
        .map_err(DomainError::from)
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<Player>, DomainError> {
    let model = players::Entity::find_by_id(id)
        .one(conn)
        .await
        .map_err(DomainError::from)?;
    Ok(model.map(Player::from))
}

/// Find a player by id or return NotFound.
pub async fn require_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Player, DomainError> {
    find_by_id(conn, id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Player, format!("Player {id} not found"))
    })
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    position: i32,
) -> Result<Player, DomainError> {
    let now = time::OffsetDateTime::now_utc();
    let active = players::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        position: Set(position),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let model = active.insert(conn).await.map_err(DomainError::from)?;
    Ok(Player::from(model))
}

pub async fn update_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    name: &str,
    position: i32,
) -> Result<Player, DomainError> {
    let active = players::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        position: Set(position),
        created_at: NotSet,
        updated_at: Set(time::OffsetDateTime::now_utc()),
    };
    let model = active.update(conn).await.map_err(DomainError::from)?;
    Ok(Player::from(model))
}

/// Delete a player; returns the number of rows removed.
pub async fn delete_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<u64, DomainError> {
    let result = players::Entity::delete_by_id(id)
        .exec(conn)
        .await
        .map_err(DomainError::from)?;
    Ok(result.rows_affected)
}
