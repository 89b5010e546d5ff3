use axum::extract::Query;

use common::types::GreetingQuery;

pub async fn hello() -> &'static str {
    "Hello, World!"
}

pub async fn greeting(Query(q): Query<GreetingQuery>) -> String {
    format!("Hola, soy {}", q.name_or_default())
}
