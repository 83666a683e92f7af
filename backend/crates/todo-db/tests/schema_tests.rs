mod common;

use common::{live_config, unreachable_config};

use todo_db::{ConnectionProvider, DbError, ensure_schema};

use googletest::prelude::*;

#[tokio::test]
async fn given_unreachable_store_when_ensuring_schema_then_connection_error() {
    // Given
    let provider = ConnectionProvider::new(&unreachable_config());

    // When
    let result = ensure_schema(&provider).await;

    // Then
    assert!(matches!(result, Err(DbError::Connection { .. })));
}

#[tokio::test]
#[ignore = "requires a running MySQL server"]
async fn given_initialized_store_when_ensuring_schema_twice_then_no_error_and_one_table() {
    // Given
    let provider = ConnectionProvider::new(&live_config());

    // When
    let first = ensure_schema(&provider).await;
    let second = ensure_schema(&provider).await;

    // Then
    assert_that!(first, ok(anything()));
    assert_that!(second, ok(anything()));

    let mut conn = provider.acquire().await.unwrap();
    let (tables,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM information_schema.tables \
         WHERE table_schema = DATABASE() AND table_name = 'todos'",
    )
    .fetch_one(&mut *conn)
    .await
    .unwrap();
    assert_that!(tables, eq(1));
}
