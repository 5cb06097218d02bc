//! Admin API demo
//!
//! Signs in against a Letmein admin service and walks an organization
//! through its lifecycle. Expects a service at `LETMEIN_URL` (defaults
//! to localhost) with the credentials below.

// Demo-specific lint allowances
#![allow(missing_docs)]
#![allow(clippy::print_stdout)]

use letmein::admin::OrganizationsApi;
use letmein::{AdminConfig, AuthConfig, ErrorKind, SessionApi};

#[tokio::main]
async fn main() -> letmein::Result<()> {
    let base_url =
        std::env::var("LETMEIN_URL").unwrap_or_else(|_| "http://localhost:4000".to_string());
    let app_token = std::env::var("LETMEIN_APP_TOKEN").unwrap_or_default();

    // Sign in as an admin to get a session token.
    let sessions = SessionApi::new(AuthConfig::new("admin", &base_url, &app_token));
    let session_token = sessions.sign_in("admin@example.com", "Secret.123!").await?;
    println!("signed in");

    let organizations = OrganizationsApi::new(AdminConfig::new(&base_url, &session_token));

    // Create, rename, then delete an organization.
    let mut organization = organizations
        .create("Demo Organization", "Created by the admin-api demo")
        .await?;
    println!("created organization {}", organization.id);

    organization.name = "Demo Organization (renamed)".to_string();
    let organization = organizations.update(&organization).await?;
    println!("renamed to {}", organization.name);

    let page = organizations.list(1, 10).await?;
    println!(
        "{} organizations total, page {} of {}",
        page.pagination.count, page.pagination.page, page.pagination.last
    );

    organizations.delete(&organization.id).await?;
    println!("deleted organization {}", organization.id);

    // Classified errors are plain values to branch on.
    match organizations.find(&organization.id).await {
        Ok(_) => println!("unexpectedly still there"),
        Err(err) if err.kind() == Some(ErrorKind::NotFound) => {
            println!("organization is gone, as expected");
        }
        Err(err) => return Err(err),
    }

    sessions.sign_out(&session_token).await?;
    println!("signed out");
    Ok(())
}
