//! Author resolution: get or create an author by name

use crate::{error::LoadResult, repository::CatalogStore};

/// Outcome of resolving an author name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorResolution {
    Existing(i32),
    Created(i32),
}

impl AuthorResolution {
    pub fn id(self) -> i32 {
        match self {
            AuthorResolution::Existing(id) | AuthorResolution::Created(id) => id,
        }
    }
}

/// Return the id of the author called `name`, inserting the author if needed.
///
/// A newly inserted author is committed at once, so it outlives any later
/// failure in the row being loaded.
pub async fn resolve_author<S>(store: &mut S, name: &str) -> LoadResult<AuthorResolution>
where
    S: CatalogStore + ?Sized,
{
    tracing::info!("Getting or creating author: {}", name);

    if let Some(id) = store.find_author_id(name).await? {
        tracing::info!("Author {} already exists with ID: {}", name, id);
        return Ok(AuthorResolution::Existing(id));
    }

    let id = store.insert_author(name).await?;
    store.commit().await?;
    tracing::info!("Created new author {} with ID: {}", name, id);
    Ok(AuthorResolution::Created(id))
}
