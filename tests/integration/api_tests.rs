//! HTTP client tests against a wiremock server

use chrono::NaiveDate;
use library_client::{
    config::ApiConfig,
    models::{BookPatch, Category, LendingStatus, NewBook, NewLending},
    ApiClient, BookSearch, ClientError,
};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Client whose base URL carries the `/api` prefix, as in production
fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&ApiConfig {
        base_url: format!("{}/api", server.uri()),
        timeout_secs: Some(5),
    })
    .expect("Failed to build client")
}

fn book(id: i64, total: i32, available: i32) -> Value {
    json!({
        "id": id,
        "title": "Designing Data-Intensive Applications",
        "author": "Kleppmann",
        "isbn": "978-1449373320",
        "description": "Distributed systems",
        "category": "데이터베이스",
        "totalCopies": total,
        "availableCopies": available,
        "createdAt": "2024-01-05T12:00:00",
        "updatedAt": "2024-01-06T08:00:00.512"
    })
}

fn lending(id: i64, status: &str, returned_at: Option<&str>) -> Value {
    json!({
        "id": id,
        "userId": 3,
        "userName": "Choi",
        "bookId": 1,
        "bookTitle": "Designing Data-Intensive Applications",
        "borrowedAt": "2024-05-01T10:00:00",
        "dueDate": "2024-05-15T23:59:59",
        "returnedAt": returned_at,
        "status": status,
        "createdAt": "2024-05-01T10:00:00",
        "updatedAt": "2024-05-01T10:00:00"
    })
}

#[tokio::test]
async fn test_list_books_sends_json_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .and(header("content-type", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([book(1, 3, 1), book(2, 1, 0)])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let books = client_for(&server).list_books().await.unwrap();
    assert_eq!(books.len(), 2);
    assert_eq!(books[0].category, Category::Database);
    assert_eq!(books[1].available_copies, 0);
}

#[tokio::test]
async fn test_search_by_title_encodes_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/books/search/title"))
        .and(query_param("title", "러스트 입문"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([book(4, 2, 2)])))
        .expect(1)
        .mount(&server)
        .await;

    let books = client_for(&server)
        .search_books(BookSearch::Title, "러스트 입문")
        .await
        .unwrap();
    assert_eq!(books[0].id, 4);
}

#[tokio::test]
async fn test_category_path_is_percent_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/books/category/%EC%9B%B9%EA%B0%9C%EB%B0%9C"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let books = client_for(&server)
        .list_books_by_category(Category::WebDevelopment)
        .await
        .unwrap();
    assert!(books.is_empty());
}

#[tokio::test]
async fn test_create_book_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/books"))
        .and(body_json(json!({
            "title": "Designing Data-Intensive Applications",
            "author": "Kleppmann",
            "category": "데이터베이스",
            "totalCopies": 3,
            "availableCopies": 3
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(book(12, 3, 3)))
        .expect(1)
        .mount(&server)
        .await;

    let new_book = NewBook::new(
        "Designing Data-Intensive Applications",
        "Kleppmann",
        Category::Database,
        3,
    );
    let created = client_for(&server).create_book(&new_book).await.unwrap();
    assert_eq!(created.id, 12);
    assert_eq!(created.available_copies, 3);
}

#[tokio::test]
async fn test_update_book_sends_patch_only() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/books/12"))
        .and(body_json(json!({"description": "2nd edition"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(book(12, 3, 3)))
        .expect(1)
        .mount(&server)
        .await;

    let patch = BookPatch {
        description: Some("2nd edition".to_string()),
        ..Default::default()
    };
    client_for(&server).update_book(12, &patch).await.unwrap();
}

#[tokio::test]
async fn test_delete_no_content_and_ok() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/books/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": true})))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/lendings/1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.delete_book(1).await.unwrap();
    client.delete_user(1).await.unwrap();

    let err = client.delete_lending(1).await.unwrap_err();
    match err {
        ClientError::RequestFailed { status, status_text } => {
            assert_eq!(status, 404);
            assert_eq!(status_text, "Not Found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_delete_rejects_other_success_statuses() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/books/2"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).delete_book(2).await.unwrap_err();
    assert_eq!(err.status(), Some(202));
}

#[tokio::test]
async fn test_offset_timestamps_decode() {
    let server = MockServer::start().await;
    let mut with_offsets = book(3, 2, 1);
    with_offsets["createdAt"] = json!("2024-01-05T12:00:00Z");
    with_offsets["updatedAt"] = json!("2024-01-06T08:00:00+09:00");
    let mut due_with_offset = lending(8, "BORROWED", None);
    due_with_offset["dueDate"] = json!("2024-05-15T23:59:59+09:00");
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([with_offsets])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/lendings/8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(due_with_offset))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let books = client.list_books().await.unwrap();
    assert_eq!(books[0].created_at, "2024-01-05T12:00:00Z");

    let lending = client.get_lending(8).await.unwrap();
    assert_eq!(
        lending.due_date.date(),
        NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
    );
}

#[tokio::test]
async fn test_book_stats_calls_both_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/books/stats/total"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(250)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/books/stats/available"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(180)))
        .expect(1)
        .mount(&server)
        .await;

    let stats = client_for(&server).book_stats().await.unwrap();
    assert_eq!(stats.total_books, 250);
    assert_eq!(stats.available_books, 180);
}

#[tokio::test]
async fn test_lending_lifecycle() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/lendings"))
        .and(body_json(json!({"bookId": 1, "userId": 3, "dueDate": "2024-05-15T23:59:59"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(lending(7, "BORROWED", None)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/lendings/7/return"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(lending(7, "RETURNED", Some("2024-05-10T09:12:00"))),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/lendings/7/return"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let due = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
    let created = client.create_lending(&NewLending::new(1, 3, due)).await.unwrap();
    assert_eq!(created.status, LendingStatus::Borrowed);

    let returned = client.return_lending(7).await.unwrap();
    assert_eq!(returned.status, LendingStatus::Returned);
    assert!(returned.returned_at.is_some());

    let again = client.return_lending(7).await.unwrap_err();
    assert_eq!(again.status(), Some(409));
}

#[tokio::test]
async fn test_user_soft_delete() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/users/5/deactivate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5,
            "username": "kim",
            "name": "Kim",
            "email": "kim@example.org",
            "role": "USER",
            "active": false,
            "createdAt": "2024-01-01T00:00:00",
            "updatedAt": "2024-06-01T00:00:00"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = client_for(&server).deactivate_user(5).await.unwrap();
    assert!(!user.active);
    assert_eq!(user.phone, None);
}

#[tokio::test]
async fn test_statistics_report_fails_as_a_whole() {
    let server = MockServer::start().await;
    for endpoint in ["overview", "monthly", "popular-books", "category-stats", "growth-stats"] {
        Mock::given(method("GET"))
            .and(path(format!("/api/statistics/{endpoint}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/api/statistics/department-stats"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).statistics_report().await.unwrap_err();
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_statistics_report_with_empty_payloads() {
    let server = MockServer::start().await;
    for endpoint in [
        "overview",
        "monthly",
        "popular-books",
        "category-stats",
        "department-stats",
        "growth-stats",
    ] {
        Mock::given(method("GET"))
            .and(path(format!("/api/statistics/{endpoint}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;
    }

    let report = client_for(&server).statistics_report().await.unwrap();
    assert_eq!(report.overview.this_month_borrowed, 0);
    assert!(report.monthly.monthly_stats.is_empty());
    assert!(report.departments.department_stats.is_empty());
}

#[tokio::test]
async fn test_unreachable_service_is_a_transport_error() {
    let client = ApiClient::new(&ApiConfig {
        base_url: "http://127.0.0.1:1/api".to_string(),
        timeout_secs: Some(2),
    })
    .unwrap();

    let err = client.list_users().await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
    assert_eq!(err.status(), None);
}
