use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tracing::warn;

use super::db_err;
use crate::domain::{DomainError, DomainResult, Service, ServiceRepository};
use crate::infrastructure::database::entities::service;

pub struct SeaOrmServiceRepository {
    db: DatabaseConnection,
}

impl SeaOrmServiceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn service_model_to_domain(model: service::Model) -> Service {
    Service {
        id: model.id,
        name: model.name,
        price: model.price,
        currency_symbol: model.currency_symbol,
        currency_name: model.currency_name,
        stylist_id: model.stylist_id,
    }
}

fn service_to_active(s: Service) -> service::ActiveModel {
    service::ActiveModel {
        id: Set(s.id),
        name: Set(s.name),
        price: Set(s.price),
        currency_symbol: Set(s.currency_symbol),
        currency_name: Set(s.currency_name),
        stylist_id: Set(s.stylist_id),
    }
}

#[async_trait]
impl ServiceRepository for SeaOrmServiceRepository {
    async fn insert_many_unordered(&self, services: Vec<Service>) -> DomainResult<usize> {
        let total = services.len();
        let mut inserted = 0usize;
        let mut failures = Vec::new();

        for s in services {
            let name = s.name.clone();
            match service_to_active(s).insert(&self.db).await {
                Ok(_) => inserted += 1,
                Err(e) => {
                    warn!(service = %name, error = %e, "Failed to insert service");
                    failures.push(format!("{name}: {e}"));
                }
            }
        }

        if failures.is_empty() {
            Ok(inserted)
        } else {
            Err(DomainError::Database(format!(
                "{} of {} services failed to insert: {}",
                failures.len(),
                total,
                failures.join("; ")
            )))
        }
    }

    async fn find_by_stylist(&self, stylist_id: &str) -> DomainResult<Vec<Service>> {
        let models = service::Entity::find()
            .filter(service::Column::StylistId.eq(stylist_id))
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(service_model_to_domain).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewService;
    use crate::infrastructure::database::test_database;

    fn service(name: &str, stylist_id: &str) -> Service {
        NewService {
            name: name.into(),
            price: 20.0,
            currency_symbol: "$".into(),
            currency_name: "USD".into(),
        }
        .attach_to(stylist_id)
    }

    #[tokio::test]
    async fn inserts_all_and_reads_back_by_parent() {
        let repo = SeaOrmServiceRepository::new(test_database().await);
        let n = repo
            .insert_many_unordered(vec![
                service("Braids", "s-1"),
                service("Cut", "s-1"),
                service("Dye", "s-2"),
            ])
            .await
            .unwrap();
        assert_eq!(n, 3);

        let mut names: Vec<_> = repo
            .find_by_stylist("s-1")
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["Braids", "Cut"]);
    }

    #[tokio::test]
    async fn failing_row_does_not_stop_the_rest() {
        let repo = SeaOrmServiceRepository::new(test_database().await);
        let first = service("Braids", "s-1");
        let mut dup = service("Cut", "s-1");
        dup.id = first.id.clone();

        let err = repo
            .insert_many_unordered(vec![first, dup, service("Dye", "s-1")])
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Database(_)));
        assert_eq!(repo.find_by_stylist("s-1").await.unwrap().len(), 2);
    }
}
