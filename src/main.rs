use anyhow::{Context, Result};
use movies_client::{client::Invoker, logger, query};

#[tokio::main]
async fn main() -> Result<()> {
    logger::init();
    let name = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");
    println!("{name} v{version}");

    let invoker = Invoker::connect().await;

    let response = invoker
        .invoke(Some(query::post_movie(
            "21 Jump Street",
            "2020-01-01T12:00:00.0000Z",
            &["Channing Tatum", "Jonah Mills"],
        )))
        .await?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    let movie_id = response["data"]["post_movie"]
        .as_str()
        .context("post_movie returned no id")?
        .to_owned();

    let response = invoker.invoke(Some(query::get_movie(&movie_id))).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    let response = invoker.invoke(Some(query::list_movies())).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    let response = invoker.invoke(Some(query::delete_movie(&movie_id))).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
