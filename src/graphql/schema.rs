use async_graphql::{Context, EmptySubscription, ID, Object, Schema};

use crate::model::{NewUser, UserPatch};
use crate::rest::RestClient;

use super::types::{Company, User, client};

pub type GraftSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Assemble the type graph and bind the REST adapter into request context.
pub fn build_schema(client: RestClient) -> GraftSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(client)
        .finish()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get a user. The backend exposes list semantics only, so this surfaces
    /// the first record of the collection.
    async fn user(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<User>> {
        let record = client(ctx).fetch_user().await?.into_first();
        Ok(record.map(User::from))
    }

    /// Get a company, same first-record semantics as `user`.
    async fn company(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Company>> {
        let record = client(ctx).fetch_company().await?.into_first();
        Ok(record.map(Company::from))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a user. `firstName` and `age` are required; a document missing
    /// them fails validation before this body runs.
    async fn add_user(
        &self,
        ctx: &Context<'_>,
        first_name: String,
        age: i32,
        last_name: Option<String>,
    ) -> async_graphql::Result<User> {
        let input = NewUser {
            first_name,
            last_name,
            age,
        };
        let record = client(ctx).create_user(&input).await?;
        Ok(record.into())
    }

    /// Delete a user by id, returning the deleted record.
    async fn delete_user(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<User> {
        let record = client(ctx).delete_user(&id).await?;
        Ok(record.into())
    }

    /// Partially update a user by id.
    async fn edit_user(
        &self,
        ctx: &Context<'_>,
        id: ID,
        first_name: Option<String>,
        last_name: Option<String>,
        age: Option<i32>,
    ) -> async_graphql::Result<User> {
        let patch = UserPatch {
            first_name,
            last_name,
            age,
        };
        let record = client(ctx).update_user(&id, &patch).await?;
        Ok(record.into())
    }
}
