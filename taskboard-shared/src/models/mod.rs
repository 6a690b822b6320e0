/// Database models for TaskBoard
///
/// This module contains all database models and their CRUD operations. Every
/// operation is a single parameterized statement (task creation with an
/// owner is the one transactional exception), and every store failure is
/// re-signaled as a [`RepositoryError`](crate::error::RepositoryError)
/// carrying the entity name.
///
/// # Models
///
/// - `user`: User accounts
/// - `task`: Tasks with due dates, priority and status
/// - `link`: Task-to-user association rows that define task ownership
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::models::user::{User, CreateUser};
/// use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let new_user = CreateUser {
///     username: "alice".to_string(),
///     password_hash: "$argon2id$...".to_string(),
///     email: "alice@example.com".to_string(),
/// };
///
/// let user = User::create(&pool, new_user).await?;
/// # Ok(())
/// # }
/// ```

pub mod link;
pub mod task;
pub mod user;
