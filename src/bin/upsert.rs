use anyhow::Result;
use chrono::{TimeZone, Utc};
use movies_client::{
    client::Invoker,
    logger,
    query::{self, MovieRole, PutMovieRequest},
};

#[tokio::main]
async fn main() -> Result<()> {
    logger::init();

    let invoker = Invoker::connect().await;

    let request = PutMovieRequest {
        title: "21 Jump Street".to_owned(),
        imdb_id: Some("tt1232829".to_owned()),
        published_at: Utc.with_ymd_and_hms(2012, 3, 16, 0, 0, 0).unwrap(),
        roles: vec![
            MovieRole {
                actor_first_name: "Channing".to_owned(),
                actor_last_name: "Tatum".to_owned(),
                character_names: vec!["Greg Jenko".to_owned()],
            },
            MovieRole {
                actor_first_name: "Jonah".to_owned(),
                actor_last_name: "Hill".to_owned(),
                character_names: vec!["Morton Schmidt".to_owned()],
            },
        ],
    };

    let response = invoker.invoke(Some(query::put_movie(&request))).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    let response = invoker
        .invoke(Some(query::get_movie_by_title("21 Jump Street", 2012)))
        .await?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
