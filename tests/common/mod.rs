//
//  starr
//  tests/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

#![allow(dead_code)]

use mockito::{Server, ServerGuard};
use starr::api::{Client, Config};

pub const API_KEY: &str = "mockAPIkey";

/// Starts a mock service on a random local port.
pub async fn server() -> ServerGuard {
    Server::new_async().await
}

/// Client settings pointing at `server`.
pub fn config(server: &ServerGuard) -> Config {
    Config::new(server.url(), API_KEY)
}

/// A bare transport pointing at `server`.
pub fn client(server: &ServerGuard) -> Client {
    config(server)
        .build()
        .expect("mock server URL is valid")
}

/// A JSON page body in the shape every paged endpoint returns.
pub fn page_body(page: usize, page_size: usize, total: usize, first_id: usize, count: usize) -> String {
    let records: Vec<serde_json::Value> = (first_id..first_id + count)
        .map(|id| serde_json::json!({ "id": id }))
        .collect();
    serde_json::json!({
        "page": page,
        "pageSize": page_size,
        "sortKey": "date",
        "sortDirection": "descending",
        "totalRecords": total,
        "records": records,
    })
    .to_string()
}
