/*
 * Copyright (c) 2025 kazhuravlev and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate unsplash;

use anyhow::Result;
use dotenvy::dotenv;
use unsplash::v1::oauth2::OAuth2Config;

// Run once without UNSPLASH_AUTH_CODE to get the consent url, approve the
// application in the browser, then run again with the code it shows.
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let access_key = std::env::var("UNSPLASH_ACCESS_KEY")?;
    let secret_key = std::env::var("UNSPLASH_SECRET_KEY")?;
    let conf = OAuth2Config::new(&access_key, &secret_key);

    match std::env::var("UNSPLASH_AUTH_CODE").ok().filter(|c| !c.is_empty()) {
        None => {
            println!("Go to URL and get 'code' string");
            println!("{}", conf.authorize_url("state")?);
        }
        Some(code) => {
            let token = conf.exchange_code(&reqwest::Client::new(), &code).await?;
            println!("Your 'accessToken':");
            println!("{}", token.access_token);
        }
    }
    Ok(())
}
