//! Task repository functions (generic over ConnectionTrait).
//!
//! Task ids live in a fixed slot range owned by the service layer; the repo
//! only ever writes ids it is handed.

use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, QuerySelect, Set,
};

use crate::entities::tasks;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Task domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i32,
    pub description: String,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

impl From<tasks::Model> for Task {
    fn from(model: tasks::Model) -> Self {
        Self {
            id: model.id,
            description: model.description,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// All tasks ordered by slot id.
pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Task>, DomainError> {
    let models = tasks::Entity::find()
        .order_by_asc(tasks::Column::Id)
        .all(conn)
        .await
        .map_err(DomainError::from)?;
    Ok(models.into_iter().map(Task::from).collect())
}

/// Ids of slots that already hold a row, ascending.
pub async fn existing_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<i32>, DomainError> {
    tasks::Entity::find()
        .select_only()
        .column(tasks::Column::Id)
        .order_by_asc(tasks::Column::Id)
        .into_tuple()
        .all(conn)
        .await
        .map_err(DomainError::from)
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Option<Task>, DomainError> {
    let model = tasks::Entity::find_by_id(id)
        .one(conn)
        .await
        .map_err(DomainError::from)?;
    Ok(model.map(Task::from))
}

/// Find a task by id or return NotFound.
pub async fn require_task<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Task, DomainError> {
    find_by_id(conn, id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Task, format!("Task {id} not found"))
    })
}

/// Insert a task at `id`; a unique violation surfaces as a conflict.
pub async fn create_task<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
    description: &str,
) -> Result<Task, DomainError> {
    let now = time::OffsetDateTime::now_utc();
    let active = tasks::ActiveModel {
        id: Set(id),
        description: Set(description.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let model = active.insert(conn).await.map_err(DomainError::from)?;
    Ok(Task::from(model))
}

/// Insert a task at `id` unless the slot is already occupied.
/// Returns true when a row was actually written.
pub async fn create_task_if_absent<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
    description: &str,
) -> Result<bool, DomainError> {
    let now = time::OffsetDateTime::now_utc();
    let active = tasks::ActiveModel {
        id: Set(id),
        description: Set(description.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let rows = tasks::Entity::insert(active)
        .on_conflict(
            OnConflict::column(tasks::Column::Id)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await
        .map_err(DomainError::from)?;
    Ok(rows == 1)
}

pub async fn update_description<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
    description: &str,
) -> Result<Task, DomainError> {
    let active = tasks::ActiveModel {
        id: Set(id),
        description: Set(description.to_string()),
        created_at: sea_orm::NotSet,
        updated_at: Set(time::OffsetDateTime::now_utc()),
    };
    let model = active.update(conn).await.map_err(DomainError::from)?;
    Ok(Task::from(model))
}
