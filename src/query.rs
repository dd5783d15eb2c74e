//! Builders for the GraphQL request payloads understood by the movies
//! function. Each builder returns the `{"query": ...}` object the function
//! expects; no client-side validation of the query syntax is attempted.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::client::Payload;

/// Role entry for [`put_movie`], naming the actor and the characters they
/// played.
#[derive(Debug, Clone)]
pub struct MovieRole {
    pub actor_first_name: String,
    pub actor_last_name: String,
    pub character_names: Vec<String>,
}

/// Full upsert request for [`put_movie`], carrying the nested role list in
/// one call. Distinct from the simpler [`post_movie`] create.
#[derive(Debug, Clone)]
pub struct PutMovieRequest {
    pub title: String,
    pub imdb_id: Option<String>,
    pub published_at: DateTime<Utc>,
    pub roles: Vec<MovieRole>,
}

/// Create a movie record. The function replies with the new record's id
/// under `data.post_movie`.
pub fn post_movie(title: &str, watched: &str, actors: &[&str]) -> Payload {
    let actors = actors.iter().map(|a| quote(a)).collect::<Vec<_>>().join(", ");
    payload(format!(
        "mutation {{ post_movie(request: {{ title: {}, watched: {}, actors: [{}] }}) }}",
        quote(title),
        quote(watched),
        actors,
    ))
}

/// Fetch a record by id, selecting its full field set.
pub fn get_movie(id: &str) -> Payload {
    payload(format!(
        "query {{ get_movie(id: {}) {{ id, title, watched, actors }} }}",
        quote(id),
    ))
}

/// Fetch a record by title and publication year.
pub fn get_movie_by_title(title: &str, published: i32) -> Payload {
    payload(format!(
        "query {{ get_movie(title: {}, published: {published}) {{ \
         meta {{ title, imdb_id, published_at }}, \
         roles {{ actor {{ first_name, last_name }}, characters {{ name }} }} }} }}",
        quote(title),
    ))
}

/// List the ids of all stored records.
pub fn list_movies() -> Payload {
    payload("query { list_movies }".to_owned())
}

/// Delete a record by id.
pub fn delete_movie(id: &str) -> Payload {
    payload(format!("mutation {{ delete_movie(id: {}) }}", quote(id)))
}

/// Create or replace a record with full nested role data.
pub fn put_movie(request: &PutMovieRequest) -> Payload {
    let roles = request
        .roles
        .iter()
        .map(|role| {
            let characters = role
                .character_names
                .iter()
                .map(|c| quote(c))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "{{ actor_first_name: {}, actor_last_name: {}, character_names: [{}] }}",
                quote(&role.actor_first_name),
                quote(&role.actor_last_name),
                characters,
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    let imdb_id = match &request.imdb_id {
        Some(id) => quote(id),
        None => "null".to_owned(),
    };
    let published_at = request
        .published_at
        .to_rfc3339_opts(SecondsFormat::Secs, true);

    payload(format!(
        "mutation {{ put_movie(request: {{ title: {}, imdb_id: {}, published_at: {}, roles: [{}] }}) }}",
        quote(&request.title),
        imdb_id,
        quote(&published_at),
        roles,
    ))
}

fn payload(query: String) -> Payload {
    let mut map = Payload::new();
    map.insert("query".to_owned(), Value::String(query));
    map
}

/// Render a GraphQL string literal, escaping quotes, backslashes and
/// newlines embedded in the argument.
fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
