use formbot::core::image_cache::ImageCache;

#[tokio::test]
async fn test_put_then_get_returns_url() {
    let cache = ImageCache::new();
    cache.put("u1", "http://x/a.png").await;

    assert_eq!(cache.get("u1").await.as_deref(), Some("http://x/a.png"));
    assert_eq!(cache.get("u2").await, None);
}

#[tokio::test]
async fn test_put_overwrites_and_get_does_not_consume() {
    let cache = ImageCache::new();
    cache.put("u1", "http://x/a.png").await;
    cache.put("u1", "http://x/b.png").await;

    assert_eq!(cache.get("u1").await.as_deref(), Some("http://x/b.png"));
    // Stale entries stay until the next upload.
    assert_eq!(cache.get("u1").await.as_deref(), Some("http://x/b.png"));
}

#[tokio::test]
async fn test_clones_share_entries() {
    let cache = ImageCache::new();
    let clone = cache.clone();
    clone.put("u1", "http://x/a.png").await;

    assert_eq!(cache.get("u1").await.as_deref(), Some("http://x/a.png"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_users_do_not_interfere() {
    let cache = ImageCache::new();

    let tasks: Vec<_> = (0..32)
        .map(|i| {
            let cache = cache.clone();
            tokio::spawn(async move {
                let user = format!("user-{i}");
                cache.put(&user, &format!("http://x/{i}.png")).await;
            })
        })
        .collect();
    for task in tasks {
        task.await.unwrap();
    }

    for i in 0..32 {
        assert_eq!(
            cache.get(&format!("user-{i}")).await,
            Some(format!("http://x/{i}.png"))
        );
    }
}
