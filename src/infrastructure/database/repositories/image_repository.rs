use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use super::db_err;
use crate::domain::{DomainError, DomainResult, Image, ImageKind, ImageRepository};
use crate::infrastructure::database::entities::image;

pub struct SeaOrmImageRepository {
    db: DatabaseConnection,
}

impl SeaOrmImageRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn image_model_to_domain(model: image::Model) -> DomainResult<Image> {
    let kind = ImageKind::parse(&model.kind).ok_or_else(|| {
        DomainError::Database(format!("unknown image type {:?} on {}", model.kind, model.id))
    })?;
    Ok(Image {
        id: model.id,
        kind,
        url: model.url,
        stylist_id: model.stylist_id,
        created_at: model.created_at,
    })
}

#[async_trait]
impl ImageRepository for SeaOrmImageRepository {
    async fn insert_many(&self, images: Vec<Image>) -> DomainResult<()> {
        if images.is_empty() {
            return Ok(());
        }

        let models = images.into_iter().map(|i| image::ActiveModel {
            id: Set(i.id),
            kind: Set(i.kind.as_str().to_string()),
            url: Set(i.url),
            stylist_id: Set(i.stylist_id),
            created_at: Set(i.created_at),
        });

        image::Entity::insert_many(models)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn find_by_stylist(&self, stylist_id: &str) -> DomainResult<Vec<Image>> {
        image::Entity::find()
            .filter(image::Column::StylistId.eq(stylist_id))
            .order_by_asc(image::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(image_model_to_domain)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::test_database;

    #[tokio::test]
    async fn batch_insert_and_lookup() {
        let repo = SeaOrmImageRepository::new(test_database().await);
        repo.insert_many(vec![
            Image::new_stylist_image("https://cdn/a.jpg", "s-1"),
            Image::new_stylist_image("https://cdn/b.jpg", "s-1"),
            Image::new_stylist_image("https://cdn/c.jpg", "s-2"),
        ])
        .await
        .unwrap();

        let images = repo.find_by_stylist("s-1").await.unwrap();
        assert_eq!(images.len(), 2);
        assert!(images.iter().all(|i| i.kind == ImageKind::Stylist));
    }

    #[tokio::test]
    async fn empty_batch_is_a_no_op() {
        let repo = SeaOrmImageRepository::new(test_database().await);
        repo.insert_many(Vec::new()).await.unwrap();
        assert!(repo.find_by_stylist("s-1").await.unwrap().is_empty());
    }
}
