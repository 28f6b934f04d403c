//! Client-side proxy translating REST-domain user operations into calls
//! against the user registry gRPC service.

use std::time::Duration;

use tonic::transport::{Channel, Endpoint};
use tonic::Request;

use crate::error::ProxyError;
use crate::grpc::config::ProxyConfig;
use crate::grpc::userhub::users::users_client::UsersClient;
use crate::grpc::userhub::users::{
    self as wire, CodeResult, CreateUserRequest, EmailAddress, Filters, Id, UpdateUserRequest,
};
use crate::models::User;

/// Deadline for a single registry call, measured from call start.
const CALL_TIMEOUT: Duration = Duration::from_secs(10);

/// Registry-facing user proxy.
///
/// Every operation dials a fresh channel, issues exactly one RPC under a
/// 10-second deadline and drops the channel on every exit path. Status
/// codes of completed RPCs collapse into [`ProxyError`] domain variants;
/// transport failures pass through untouched. No retries are attempted.
#[derive(Debug, Clone)]
pub struct UserProxy {
    config: ProxyConfig,
}

impl UserProxy {
    pub fn new(config: ProxyConfig) -> Self {
        Self { config }
    }

    /// Dial a channel scoped to a single call. Dropping the returned
    /// client releases the connection.
    async fn dial(&self) -> Result<UsersClient<Channel>, ProxyError> {
        let endpoint = Endpoint::from_shared(self.config.registry_url())?
            .connect_timeout(CALL_TIMEOUT)
            .tcp_nodelay(true);
        let channel = endpoint.connect().await?;
        Ok(UsersClient::new(channel))
    }

    fn request<T>(message: T) -> Request<T> {
        let mut request = Request::new(message);
        request.set_timeout(CALL_TIMEOUT);
        request
    }

    /// Fetch every user known to the registry, in registry order.
    pub async fn get_all(&self) -> Result<Vec<User>, ProxyError> {
        let mut client = self.dial().await?;
        let response = client
            .get_all_users(Self::request(Filters {}))
            .await?
            .into_inner();

        Ok(response.users.into_iter().map(User::from).collect())
    }

    /// Create a user. The input id is ignored; the registry assigns one
    /// and it is folded back into the returned value.
    pub async fn create(&self, user: User) -> Result<User, ProxyError> {
        let mut client = self.dial().await?;
        let wire_user = wire::User {
            id: 0,
            ..wire::User::from(&user)
        };
        let response = client
            .create(Self::request(CreateUserRequest {
                user: Some(wire_user),
            }))
            .await?
            .into_inner();

        match response.code() {
            CodeResult::Failed => Err(ProxyError::AlreadyExists),
            CodeResult::InvalidInput => Err(ProxyError::InvalidInput),
            _ => Ok(User {
                id: response.user_id,
                ..user
            }),
        }
    }

    /// Update a user in place. The registry does not echo fields back, so
    /// the unchanged input is returned on success.
    pub async fn update(&self, user: User) -> Result<User, ProxyError> {
        let mut client = self.dial().await?;
        let response = client
            .update(Self::request(UpdateUserRequest {
                user: Some(wire::User::from(&user)),
            }))
            .await?
            .into_inner();

        match response.code() {
            // The registry reports conflicting updates as FAILED, surfaced
            // with the same error as a conflicting create.
            CodeResult::Failed => Err(ProxyError::AlreadyExists),
            CodeResult::InvalidInput => Err(ProxyError::InvalidInput),
            CodeResult::NotFound => Err(ProxyError::NotFound),
            _ => Ok(user),
        }
    }

    /// Delete a user by id.
    ///
    /// The flag is `false` on success and on wire-level failures; a
    /// transport failure reports `true`. Callers must check the error
    /// before trusting the flag.
    pub async fn delete(&self, id: i32) -> (bool, Option<ProxyError>) {
        let mut client = match self.dial().await {
            Ok(client) => client,
            Err(err) => return (true, Some(err)),
        };
        let response = match client.delete(Self::request(Id { value: id })).await {
            Ok(response) => response.into_inner(),
            Err(status) => return (true, Some(status.into())),
        };

        match response.code() {
            CodeResult::Failed => (false, Some(ProxyError::Internal)),
            CodeResult::NotFound => (false, Some(ProxyError::NotFound)),
            _ => (false, None),
        }
    }

    /// Look a user up by email address.
    pub async fn get_by_email(&self, email: &str) -> Result<User, ProxyError> {
        let mut client = self.dial().await?;
        let response = client
            .get_user(Self::request(EmailAddress {
                value: email.to_owned(),
            }))
            .await?
            .into_inner();

        // A missing payload defaults to the zero id, which is how the
        // registry signals a miss.
        let user = response.user.unwrap_or_default();
        if user.id == 0 {
            return Err(ProxyError::NotFound);
        }

        Ok(User::from(user))
    }
}
