/// gRPC server implementation for user-service
///
/// Implements the five Users RPCs: GetUser, Create, GetAllUsers, Update,
/// Delete. Domain outcomes travel in the CodeResult envelope of each
/// response; only malformed requests become non-OK RPC statuses.
use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::{info, warn};

use crate::error::{RegistryError, RegistryResult};
use crate::grpc::userhub::users::users_server::Users;
use crate::grpc::userhub::users::{
    CodeResult, CreateUserRequest, CreateUserResponse, DeleteUserResponse, EmailAddress, Filters,
    GetAllUsersResponse, GetUserResponse, Id, UpdateUserRequest, UpdateUserResponse, User,
};
use crate::repository::{UserRecord, UserRepository};

/// User registry gRPC server
pub struct UsersService {
    repo: Arc<dyn UserRepository>,
}

impl UsersService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

fn record_to_proto(record: &UserRecord) -> User {
    User {
        id: record.id,
        email: record.email.clone(),
        name: record.name.clone(),
        last_name: record.last_name.clone(),
    }
}

fn error_code(err: &RegistryError) -> CodeResult {
    match err {
        RegistryError::AlreadyExists(_) => CodeResult::Failed,
        RegistryError::NotFound(_) => CodeResult::NotFound,
        RegistryError::InvalidInput(_) => CodeResult::InvalidInput,
    }
}

fn validate_email(email: &str) -> RegistryResult<()> {
    if email.is_empty() || !email.contains('@') {
        return Err(RegistryError::InvalidInput(format!(
            "invalid email address {email:?}"
        )));
    }
    Ok(())
}

#[tonic::async_trait]
impl Users for UsersService {
    async fn get_user(
        &self,
        request: Request<EmailAddress>,
    ) -> Result<Response<GetUserResponse>, Status> {
        let req = request.into_inner();

        match self.repo.find_by_email(&req.value).await {
            Some(record) => Ok(Response::new(GetUserResponse {
                code: CodeResult::Ok as i32,
                user: Some(record_to_proto(&record)),
            })),
            // No payload: consumers key off the defaulted zero id.
            None => Ok(Response::new(GetUserResponse {
                code: CodeResult::NotFound as i32,
                user: None,
            })),
        }
    }

    async fn create(
        &self,
        request: Request<CreateUserRequest>,
    ) -> Result<Response<CreateUserResponse>, Status> {
        let user = request
            .into_inner()
            .user
            .ok_or_else(|| Status::invalid_argument("user payload is required"))?;

        let result = match validate_email(&user.email) {
            Ok(()) => {
                self.repo
                    .insert(&user.email, &user.name, &user.last_name)
                    .await
            }
            Err(err) => Err(err),
        };

        match result {
            Ok(id) => {
                info!(user_id = id, email = %user.email, "User created");
                Ok(Response::new(CreateUserResponse {
                    code: CodeResult::Ok as i32,
                    user_id: id,
                }))
            }
            Err(err) => {
                warn!(email = %user.email, error = %err, "Create rejected");
                Ok(Response::new(CreateUserResponse {
                    code: error_code(&err) as i32,
                    user_id: 0,
                }))
            }
        }
    }

    async fn get_all_users(
        &self,
        _request: Request<Filters>,
    ) -> Result<Response<GetAllUsersResponse>, Status> {
        let users = self.repo.list().await;

        Ok(Response::new(GetAllUsersResponse {
            code: CodeResult::Ok as i32,
            users: users.iter().map(record_to_proto).collect(),
        }))
    }

    async fn update(
        &self,
        request: Request<UpdateUserRequest>,
    ) -> Result<Response<UpdateUserResponse>, Status> {
        let user = request
            .into_inner()
            .user
            .ok_or_else(|| Status::invalid_argument("user payload is required"))?;

        let result = match validate_email(&user.email) {
            Ok(()) => {
                self.repo
                    .update(UserRecord {
                        id: user.id,
                        email: user.email.clone(),
                        name: user.name,
                        last_name: user.last_name,
                    })
                    .await
            }
            Err(err) => Err(err),
        };

        match result {
            Ok(()) => {
                info!(user_id = user.id, "User updated");
                Ok(Response::new(UpdateUserResponse {
                    code: CodeResult::Ok as i32,
                }))
            }
            Err(err) => {
                warn!(user_id = user.id, error = %err, "Update rejected");
                Ok(Response::new(UpdateUserResponse {
                    code: error_code(&err) as i32,
                }))
            }
        }
    }

    async fn delete(&self, request: Request<Id>) -> Result<Response<DeleteUserResponse>, Status> {
        let id = request.into_inner().value;

        match self.repo.remove(id).await {
            Ok(()) => {
                info!(user_id = id, "User deleted");
                Ok(Response::new(DeleteUserResponse {
                    code: CodeResult::Ok as i32,
                }))
            }
            Err(err) => {
                warn!(user_id = id, error = %err, "Delete rejected");
                Ok(Response::new(DeleteUserResponse {
                    code: error_code(&err) as i32,
                }))
            }
        }
    }
}
