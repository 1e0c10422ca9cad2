use posts_client::{POSTS_URL, PostsApi, PostsController, ReqwestClient, View};

fn posts_url() -> String {
    std::env::var("POSTS_HTTP_URL").unwrap_or_else(|_| POSTS_URL.to_string())
}

#[tokio::test]
#[ignore = "requires network access to the posts endpoint"]
async fn http_fetch_posts_smoke() {
    let client = ReqwestClient::new().expect("client must build");
    let api = PostsApi::with_url(client, posts_url());

    let posts = api.fetch_posts().await.expect("fetch_posts must succeed");
    assert!(!posts.is_empty());
    assert!(posts.iter().all(|post| post.id > 0));
}

#[tokio::test]
#[ignore = "requires network access to the posts endpoint"]
async fn http_controller_smoke() {
    let client = ReqwestClient::new().expect("client must build");
    let api = PostsApi::with_url(client, posts_url());
    let mut controller = PostsController::new();

    assert!(controller.run(&api).await);
    assert!(matches!(controller.state().view(), View::Success(posts) if !posts.is_empty()));
}

#[tokio::test]
async fn http_unreachable_host_surfaces_error() {
    let client = ReqwestClient::new().expect("client must build");
    let api = PostsApi::with_url(client, "http://127.0.0.1:9/posts");
    let mut controller = PostsController::new();

    assert!(controller.run(&api).await);
    let state = controller.state();
    assert!(!state.is_fetching);
    assert!(state.posts.is_empty());
    assert!(state.error.is_some(), "unexpected state: {state:?}");
}
