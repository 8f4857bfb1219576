use anyhow::Result;
use serde_json::json;

// Smoke test against a running server: `cargo run` then
// `cargo test --test quick_dev -- --ignored --nocapture`.
#[tokio::test]
#[ignore]
async fn quick_dev() -> Result<()> {
    let hc = httpc_test::new_client("http://localhost:3000/api")?;

    hc.do_get("/health").await?.print().await?;

    let res = hc
        .do_post(
            "/posts",
            json!({
              "title": "Bitcoin",
              "content": "Let's create a cold wallet of Bitcoin",
            }),
        )
        .await?;
    res.print().await?;
    let id = res.json_value::<i64>("/id")?;

    hc.do_put(
        &format!("/posts/{id}"),
        json!({
          "title": "Bitcoin, revisited",
          "content": "Cold wallets, one year later",
        }),
    )
    .await?
    .print()
    .await?;

    hc.do_get("/posts?page=1&limit=5").await?.print().await?;

    hc.do_delete(&format!("/posts/{id}"))
        .await?
        .print()
        .await?;

    Ok(())
}
