use crate::Config;
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use url::Url;

pub(crate) const USERS_JSON: &str = r#"[
    {"id": 1, "name": "Leanne Graham", "username": "Bret"},
    {"id": 2, "name": "Ervin Howell", "username": "Antonette"},
    {"id": 3, "name": "Clementine Bauch", "username": "Samantha"}
]"#;

pub(crate) const POSTS_JSON: &str = r#"[
    {"id": 1, "userId": 1, "title": "A", "body": "ba"},
    {"id": 2, "userId": 1, "title": "B", "body": "bb"},
    {"id": 3, "userId": 2, "title": "C", "body": "bc"}
]"#;

/// What an endpoint of the test server replies with
#[derive(Debug, Clone)]
pub(crate) enum Reply {
    Json(&'static str),
    Status(StatusCode),
    /// Never reply in a reasonable time
    Hang,
}

/// A local server standing in for the remote api
pub(crate) struct TestServer {
    pub config: Config,
    pub users_hits: Arc<AtomicUsize>,
    pub posts_hits: Arc<AtomicUsize>,
}

impl TestServer {
    pub(crate) async fn spawn(users: Reply, posts: Reply) -> Self {
        std::env::set_var("NO_PROXY", "127.0.0.1,localhost");

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind");
        let addr = listener.local_addr().expect("missing local addr");

        let users_hits = Arc::new(AtomicUsize::new(0));
        let posts_hits = Arc::new(AtomicUsize::new(0));

        let app = Router::new()
            .route("/users", {
                let hits = users_hits.clone();
                get(move || respond(users.clone(), hits.clone()))
            })
            .route("/posts", {
                let hits = posts_hits.clone();
                get(move || respond(posts.clone(), hits.clone()))
            });
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let url = |path: &str| Url::parse(&format!("http://{addr}{path}")).expect("invalid url");
        Self {
            config: Config::new(url("/users"), url("/posts")),
            users_hits,
            posts_hits,
        }
    }

    pub(crate) fn hits(&self) -> (usize, usize) {
        (
            self.users_hits.load(Ordering::SeqCst),
            self.posts_hits.load(Ordering::SeqCst),
        )
    }
}

async fn respond(reply: Reply, hits: Arc<AtomicUsize>) -> Response {
    hits.fetch_add(1, Ordering::SeqCst);
    match reply {
        Reply::Json(body) => ([(CONTENT_TYPE, "application/json")], body).into_response(),
        Reply::Status(status) => status.into_response(),
        Reply::Hang => {
            tokio::time::sleep(Duration::from_secs(60)).await;
            StatusCode::OK.into_response()
        }
    }
}
