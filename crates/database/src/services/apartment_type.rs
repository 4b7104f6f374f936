use crate::{entities::apartment_types, error::StoreError};
use chrono::Utc;
use models::{apartment_type::ApartmentTypePayload, validation::ValidationErrors};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, SqlErr,
};
use uuid::Uuid;

pub struct ApartmentTypeService;

impl ApartmentTypeService {
    const ENTITY: &'static str = "Apartment type";

    pub async fn create(
        db: &DatabaseConnection,
        payload: ApartmentTypePayload,
    ) -> Result<apartment_types::Model, StoreError> {
        let apartment_type = payload.validate_new()?;
        Self::ensure_name_available(db, &apartment_type.name, None).await?;

        let now = Utc::now();
        let name = apartment_type.name.clone();

        apartment_types::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(apartment_type.name),
            description: Set(apartment_type.description),
            is_active: Set(apartment_type.is_active),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await
        .map_err(|e| Self::map_unique_violation(e, &name))
    }

    /// Lists every apartment type ordered by name
    pub async fn list_all(
        db: &DatabaseConnection,
    ) -> Result<Vec<apartment_types::Model>, StoreError> {
        let apartment_types = apartment_types::Entity::find()
            .order_by_asc(apartment_types::Column::Name)
            .all(db)
            .await?;

        Ok(apartment_types)
    }

    pub async fn get_by_id(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<apartment_types::Model, StoreError> {
        apartment_types::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| StoreError::not_found(Self::ENTITY, id))
    }

    /// Applies a partial update; fields absent from the payload keep their value
    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        payload: ApartmentTypePayload,
    ) -> Result<apartment_types::Model, StoreError> {
        let changes = payload.validate_changes()?;
        let existing = Self::get_by_id(db, id).await?;

        if changes.is_empty() {
            return Ok(existing);
        }

        if let Some(name) = &changes.name
            && *name != existing.name
        {
            Self::ensure_name_available(db, name, Some(id)).await?;
        }

        let new_name = changes.name.clone().unwrap_or_else(|| existing.name.clone());
        let mut apartment_type = existing.into_active_model();

        if let Some(name) = changes.name {
            apartment_type.name = Set(name);
        }
        if let Some(description) = changes.description {
            apartment_type.description = Set(description);
        }
        if let Some(is_active) = changes.is_active {
            apartment_type.is_active = Set(is_active);
        }
        apartment_type.updated_at = Set(Utc::now());

        apartment_type
            .update(db)
            .await
            .map_err(|e| Self::map_unique_violation(e, &new_name))
    }

    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), StoreError> {
        let result = apartment_types::Entity::delete_by_id(id).exec(db).await?;

        if result.rows_affected == 0 {
            return Err(StoreError::not_found(Self::ENTITY, id));
        }

        Ok(())
    }

    async fn ensure_name_available(
        db: &DatabaseConnection,
        name: &str,
        except: Option<Uuid>,
    ) -> Result<(), StoreError> {
        let mut query =
            apartment_types::Entity::find().filter(apartment_types::Column::Name.eq(name));

        if let Some(id) = except {
            query = query.filter(apartment_types::Column::Id.ne(id));
        }

        match query.one(db).await? {
            Some(_) => Err(Self::duplicate_name(name)),
            None => Ok(()),
        }
    }

    // The unique index still guards against concurrent writers that pass the pre-check
    fn map_unique_violation(err: DbErr, name: &str) -> StoreError {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::duplicate_name(name),
            _ => StoreError::Db(err),
        }
    }

    fn duplicate_name(name: &str) -> StoreError {
        ValidationErrors::single(
            "name",
            format!("Apartment type with name `{name}` already exists"),
        )
        .into()
    }
}
