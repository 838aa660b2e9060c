//! Talent repository trait definition.

use briefmatch_types::error::RepositoryError;
use briefmatch_types::talent::Talent;

/// Repository trait for talent profiles.
///
/// The ranking path only ever reads the whole table; the catalogue service
/// also inserts. Uses native async fn in traits (Rust 2024 edition).
pub trait TalentRepository: Send + Sync {
    /// All talents, in insertion order.
    fn list_all(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Talent>, RepositoryError>> + Send;

    /// Insert one talent. Returns the stored record.
    fn create(
        &self,
        talent: &Talent,
    ) -> impl std::future::Future<Output = Result<Talent, RepositoryError>> + Send;

    /// Number of stored talents.
    fn count(&self) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}
