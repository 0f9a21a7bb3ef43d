use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{Html, IntoResponse},
    routing::get,
};
use tracing::info;

use super::schema::GraftSchema;

const BIND_HOST: &str = "0.0.0.0";

/// Endpoint URL for the startup banner, derived from the actual bind address.
pub fn endpoint_url(port: u16) -> String {
    format!("http://{}:{}/graphql", BIND_HOST, port)
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

async fn health() -> &'static str {
    "ok"
}

/// Serve the schema over HTTP until the process is stopped.
pub async fn run_server(schema: GraftSchema, port: u16) -> std::io::Result<()> {
    let app = Router::new()
        .route("/graphql", get(graphiql).post_service(GraphQL::new(schema)))
        .route("/health", get(health));

    let listener = tokio::net::TcpListener::bind((BIND_HOST, port)).await?;
    info!(port, "GraphQL server listening");
    axum::serve(listener, app).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_matches_bind_address() {
        let url = endpoint_url(4000);
        assert_eq!(url, format!("http://{}:4000/graphql", BIND_HOST));
    }
}
