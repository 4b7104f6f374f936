use crate::{entities::reservations, error::StoreError};
use chrono::Utc;
use log::debug;
use models::{
    reservation::{ReservationPayload, StatusPayload},
    reservation_status::ReservationStatus,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QueryTrait,
};
use uuid::Uuid;

pub struct ReservationService;

impl ReservationService {
    const ENTITY: &'static str = "Reservation";

    /// Validates a submission and stores it as a new pending reservation
    pub async fn create(
        db: &DatabaseConnection,
        payload: ReservationPayload,
    ) -> Result<reservations::Model, StoreError> {
        let reservation = payload.validate()?;
        let now = Utc::now();

        let model = reservations::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(reservation.name),
            number: Set(reservation.number),
            message: Set(reservation.message),
            apartment_type: Set(reservation.apartment_type),
            date: Set(now),
            status: Set(ReservationStatus::Pending),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await?;

        debug!("Created reservation {}", model.id);
        Ok(model)
    }

    /// Lists reservations newest first, optionally restricted to one status
    pub async fn list_all(
        db: &DatabaseConnection,
        status: Option<ReservationStatus>,
    ) -> Result<Vec<reservations::Model>, StoreError> {
        let reservations = reservations::Entity::find()
            .apply_if(status, |query, status| {
                query.filter(reservations::Column::Status.eq(status))
            })
            .order_by_desc(reservations::Column::Date)
            .all(db)
            .await?;

        Ok(reservations)
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<reservations::Model, StoreError> {
        reservations::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| StoreError::not_found(Self::ENTITY, id))
    }

    /// Moves a reservation to the requested status.
    ///
    /// Applying the status a reservation already has only refreshes `updated_at`.
    pub async fn update_status(
        db: &DatabaseConnection,
        id: Uuid,
        payload: StatusPayload,
    ) -> Result<reservations::Model, StoreError> {
        let status = payload.validate()?;

        let mut reservation = Self::find_by_id(db, id).await?.into_active_model();
        reservation.status = Set(status);
        reservation.updated_at = Set(Utc::now());

        Ok(reservation.update(db).await?)
    }

    /// Removes a reservation. No route exposes this.
    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), StoreError> {
        let result = reservations::Entity::delete_by_id(id).exec(db).await?;

        if result.rows_affected == 0 {
            return Err(StoreError::not_found(Self::ENTITY, id));
        }

        Ok(())
    }

    pub async fn count_all(db: &DatabaseConnection) -> Result<u64, StoreError> {
        Ok(reservations::Entity::find().count(db).await?)
    }

    pub async fn count_by_status(
        db: &DatabaseConnection,
        status: ReservationStatus,
    ) -> Result<u64, StoreError> {
        let count = reservations::Entity::find()
            .filter(reservations::Column::Status.eq(status))
            .count(db)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_db;
    use chrono::Duration;

    fn payload(name: &str) -> ReservationPayload {
        ReservationPayload {
            name: Some(name.to_string()),
            number: Some("555-1234".to_string()),
            message: Some("Interested".to_string()),
            apartment_type: Some("2BR".to_string()),
        }
    }

    fn status(value: &str) -> StatusPayload {
        StatusPayload {
            status: Some(value.to_string()),
        }
    }

    #[tokio::test]
    async fn create_stores_a_pending_reservation() {
        let db = setup_db().await;
        let before = Utc::now();

        let created = ReservationService::create(&db, payload("Jane"))
            .await
            .unwrap();

        assert_eq!(created.status, ReservationStatus::Pending);
        assert_eq!(created.name, "Jane");
        assert!((created.date - before).abs() < Duration::seconds(5));

        let stored = ReservationService::find_by_id(&db, created.id)
            .await
            .unwrap();
        assert_eq!(stored.id, created.id);
        assert_eq!(stored.status, ReservationStatus::Pending);
    }

    #[tokio::test]
    async fn invalid_submission_persists_nothing() {
        let db = setup_db().await;

        let err = ReservationService::create(
            &db,
            ReservationPayload {
                name: None,
                ..payload("ignored")
            },
        )
        .await
        .unwrap_err();

        match err {
            StoreError::Validation(errors) => assert_eq!(errors.fields(), vec!["name"]),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(ReservationService::count_all(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn update_status_is_idempotent() {
        let db = setup_db().await;
        let created = ReservationService::create(&db, payload("Jane"))
            .await
            .unwrap();

        let first = ReservationService::update_status(&db, created.id, status("Done"))
            .await
            .unwrap();
        let second = ReservationService::update_status(&db, created.id, status("Done"))
            .await
            .unwrap();

        assert_eq!(first.status, ReservationStatus::Done);
        assert_eq!(second.status, ReservationStatus::Done);
        assert_eq!(second.name, first.name);
        assert_eq!(second.date, first.date);
        assert_eq!(second.created_at, created.created_at);
        assert!(second.updated_at >= first.updated_at);
    }

    #[tokio::test]
    async fn update_status_rejects_unknown_ids_and_statuses() {
        let db = setup_db().await;

        let missing = ReservationService::update_status(&db, Uuid::new_v4(), status("Done"))
            .await
            .unwrap_err();
        assert!(matches!(missing, StoreError::NotFound { .. }));

        let created = ReservationService::create(&db, payload("Jane"))
            .await
            .unwrap();
        let invalid = ReservationService::update_status(&db, created.id, status("Closed"))
            .await
            .unwrap_err();
        assert!(matches!(invalid, StoreError::Validation(_)));

        let stored = ReservationService::find_by_id(&db, created.id)
            .await
            .unwrap();
        assert_eq!(stored.status, ReservationStatus::Pending);
    }

    #[tokio::test]
    async fn counts_always_add_up() {
        let db = setup_db().await;

        let mut ids = Vec::new();
        for name in ["a", "b", "c", "d"] {
            ids.push(ReservationService::create(&db, payload(name)).await.unwrap().id);
        }
        ReservationService::update_status(&db, ids[0], status("Done"))
            .await
            .unwrap();
        ReservationService::update_status(&db, ids[1], status("Done"))
            .await
            .unwrap();
        ReservationService::update_status(&db, ids[1], status("Pending"))
            .await
            .unwrap();
        ReservationService::delete(&db, ids[3]).await.unwrap();

        let total = ReservationService::count_all(&db).await.unwrap();
        let done = ReservationService::count_by_status(&db, ReservationStatus::Done)
            .await
            .unwrap();
        let pending = ReservationService::count_by_status(&db, ReservationStatus::Pending)
            .await
            .unwrap();

        assert_eq!(total, 3);
        assert_eq!(done, 1);
        assert_eq!(pending, 2);
        assert_eq!(total, done + pending);
    }

    #[tokio::test]
    async fn list_filters_by_status() {
        let db = setup_db().await;
        let first = ReservationService::create(&db, payload("first"))
            .await
            .unwrap();
        ReservationService::create(&db, payload("second"))
            .await
            .unwrap();
        ReservationService::update_status(&db, first.id, status("Done"))
            .await
            .unwrap();

        let all = ReservationService::list_all(&db, None).await.unwrap();
        assert_eq!(all.len(), 2);

        let done = ReservationService::list_all(&db, Some(ReservationStatus::Done))
            .await
            .unwrap();
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].id, first.id);
    }

    #[tokio::test]
    async fn delete_unknown_reservation_is_not_found() {
        let db = setup_db().await;

        let err = ReservationService::delete(&db, Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }
}
