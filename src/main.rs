#[macro_use]
extern crate rocket;

mod endpoints;
mod linkedin_api;
mod models;
mod utils;

use dotenv::dotenv;
use endpoints::{
    extract_all, extract_all_threading, extract_comments, extract_likes, extract_post_comments,
    extract_posts, extract_profile, home,
};
use linkedin_api::ApiSettings;

#[launch]
fn rocket() -> rocket::Rocket<rocket::Build> {
    dotenv().ok();

    let settings = ApiSettings::from_env().expect("RAPIDAPI_KEY must be set in .env file");

    rocket::build()
        .manage(settings)
        .manage(reqwest::Client::new())
        .mount(
            "/",
            routes![
                home,
                extract_profile,
                extract_posts,
                extract_comments,
                extract_likes,
                extract_post_comments,
                extract_all,
                extract_all_threading
            ],
        )
}
