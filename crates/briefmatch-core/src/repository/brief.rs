//! Brief repository trait definition.

use briefmatch_types::brief::{Brief, BriefId};
use briefmatch_types::error::RepositoryError;

/// Repository trait for submitted briefs.
pub trait BriefRepository: Send + Sync {
    /// Insert one brief.
    fn create(
        &self,
        brief: &Brief,
    ) -> impl std::future::Future<Output = Result<Brief, RepositoryError>> + Send;

    /// Get a brief by ID.
    fn get_by_id(
        &self,
        id: &BriefId,
    ) -> impl std::future::Future<Output = Result<Option<Brief>, RepositoryError>> + Send;
}
