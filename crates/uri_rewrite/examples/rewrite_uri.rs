// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Example demonstrating how a request URI is adjusted before it is sent.

use uri_rewrite::RewriteUri;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let listing: http::Uri = "https://api.example.com/tenants/contoso/users?page=1&size=50".parse()?;

    let next_page = listing.with_query_parameter("page", Some("2"))?;
    println!("Next page: {next_page}");

    let other_tenant = next_page.with_route_parameter("tenants", Some("fabrikam"))?;
    println!("Other tenant: {other_tenant}");

    let link = "/reports/daily".with_query_parameter("format", Some("csv"))?;
    println!("Report link: {link}");

    Ok(())
}
