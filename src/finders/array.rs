//! In-memory slice pagination

use super::types::PaginateArgs;
use crate::collection::{Collection, Paginated};
use crate::config::PaginateConfig;
use crate::error::Result;

/// Paginate an in-memory slice
///
/// `total_entries` is the slice length unless given explicitly. A page past
/// the end yields an empty collection.
pub fn paginate_slice<T: Clone>(
    items: &[T],
    args: &PaginateArgs,
    config: &PaginateConfig,
) -> Result<Collection<T>> {
    let page = args.resolve_page(None)?;
    let per_page = args.resolve_per_page(None, config)?;
    let total = args.total_entries.unwrap_or(items.len() as u64);

    let collection = Collection::with_page(page, per_page, Some(total))?;
    let start = usize::try_from(collection.offset()).unwrap_or(usize::MAX);
    let window: Vec<T> = items
        .iter()
        .skip(start)
        .take(usize::try_from(per_page).unwrap_or(usize::MAX))
        .cloned()
        .collect();

    Ok(collection.replace(window))
}

/// Extension trait: `posts.paginate(&args, &config)`
pub trait Paginate<T> {
    /// Return the requested page as a [`Collection`]
    fn paginate(&self, args: &PaginateArgs, config: &PaginateConfig) -> Result<Collection<T>>;
}

impl<T: Clone> Paginate<T> for [T] {
    fn paginate(&self, args: &PaginateArgs, config: &PaginateConfig) -> Result<Collection<T>> {
        paginate_slice(self, args, config)
    }
}

impl<T: Clone> Paginate<T> for Vec<T> {
    fn paginate(&self, args: &PaginateArgs, config: &PaginateConfig) -> Result<Collection<T>> {
        paginate_slice(self, args, config)
    }
}
