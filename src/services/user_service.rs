//! User service for user CRUD operations.
//!
//! Wraps every repository call with timing measurement, pre/post log
//! emission, and log-then-propagate on failure. The repository's outcome is
//! always returned unchanged: absent records and rejected writes are plain
//! values, and persistence errors pass through without wrapping.

use std::sync::Arc;
use std::time::Instant;

use uuid::Uuid;

use crate::errors::RepositoryError;
use crate::logging::LoggerAdapter;
use crate::models::User;
use crate::repositories::UserRepository;

pub struct UserService {
    repository: Arc<dyn UserRepository>,
    logger: Arc<dyn LoggerAdapter>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>, logger: Arc<dyn LoggerAdapter>) -> Self {
        Self { repository, logger }
    }

    /// Fetch every user. An empty vector is a valid outcome, not an error.
    pub async fn get_all(&self) -> Result<Vec<User>, RepositoryError> {
        self.logger.info("Retrieving all users", &[]);

        let started = Instant::now();
        let result = self.repository.get_all().await;
        let elapsed_ms = started.elapsed().as_millis();

        match result {
            Ok(users) => {
                self.logger
                    .info("All users retrieved in {}ms", &[elapsed_ms.to_string()]);
                Ok(users)
            }
            Err(err) => {
                self.logger
                    .error(&err, "Something went wrong while retrieving all users", &[]);
                Err(err)
            }
        }
    }

    /// Fetch a single user. `None` means no record matched, which is a
    /// successful outcome. The id is passed through unvalidated.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        self.logger
            .info("Retrieving user with id: {}", &[id.to_string()]);

        let started = Instant::now();
        let result = self.repository.get_by_id(id).await;
        let elapsed_ms = started.elapsed().as_millis();

        match result {
            Ok(user) => {
                self.logger.info(
                    "User with id {} retrieved in {}ms",
                    &[id.to_string(), elapsed_ms.to_string()],
                );
                Ok(user)
            }
            Err(err) => {
                self.logger.error(
                    &err,
                    "Something went wrong while retrieving user with id {}",
                    &[id.to_string()],
                );
                Err(err)
            }
        }
    }

    /// Persist a fully-formed user (id and name already populated by the
    /// caller). The boolean is the repository's verdict: `false` means the
    /// record was rejected, e.g. a duplicate — not an error.
    pub async fn create(&self, user: User) -> Result<bool, RepositoryError> {
        self.logger.info(
            "Creating user with id {} and name: {}",
            &[user.id.to_string(), user.full_name.clone()],
        );

        let started = Instant::now();
        let result = self.repository.create(&user).await;
        let elapsed_ms = started.elapsed().as_millis();

        match result {
            Ok(created) => {
                self.logger.info(
                    "User with id {} created in {}ms",
                    &[user.id.to_string(), elapsed_ms.to_string()],
                );
                Ok(created)
            }
            Err(err) => {
                self.logger
                    .error(&err, "Something went wrong while creating a user", &[]);
                Err(err)
            }
        }
    }

    /// Remove a user. `false` means no record matched the id — not an error.
    pub async fn delete_by_id(&self, id: Uuid) -> Result<bool, RepositoryError> {
        self.logger
            .info("Deleting user with id: {}", &[id.to_string()]);

        let started = Instant::now();
        let result = self.repository.delete_by_id(id).await;
        let elapsed_ms = started.elapsed().as_millis();

        match result {
            Ok(deleted) => {
                self.logger.info(
                    "User with id {} deleted in {}ms",
                    &[id.to_string(), elapsed_ms.to_string()],
                );
                Ok(deleted)
            }
            Err(err) => {
                self.logger.error(
                    &err,
                    "Something went wrong while deleting user with id {}",
                    &[id.to_string()],
                );
                Err(err)
            }
        }
    }
}
