use async_graphql::{ComplexObject, Context, ID, SimpleObject};

use crate::model::{CompanyRecord, UserRecord};
use crate::rest::RestClient;

pub(super) fn client<'a>(ctx: &Context<'a>) -> &'a RestClient {
    ctx.data::<RestClient>().unwrap()
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct User {
    pub id: ID,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
}

#[ComplexObject]
impl User {
    /// The company this user belongs to. Fetched only when selected; a failed
    /// fetch becomes a field-level error while the user's own fields stand.
    async fn company(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Company>> {
        let record = client(ctx).fetch_user_company().await?.into_first();
        Ok(record.map(Company::from))
    }
}

impl From<UserRecord> for User {
    fn from(r: UserRecord) -> Self {
        Self {
            id: ID(r.id.to_string()),
            first_name: r.first_name,
            last_name: r.last_name,
            age: r.age,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Company {
    pub id: ID,
    pub name: Option<String>,
}

#[ComplexObject]
impl Company {
    /// Users employed by this company, fetched only when selected.
    async fn users(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<User>>> {
        let records = client(ctx).fetch_company_users().await?.into_vec();
        Ok(Some(records.into_iter().map(User::from).collect()))
    }
}

impl From<CompanyRecord> for Company {
    fn from(r: CompanyRecord) -> Self {
        Self {
            id: ID(r.id.to_string()),
            name: r.name,
        }
    }
}
