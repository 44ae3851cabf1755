//! Integration tests against the real catalog API.
//!
//! These tests need network access and are ignored by default. The endpoint
//! can be overridden with a `.env` file in the artworks-lib directory:
//!
//! ```env
//! ARTWORKS_ENDPOINT=https://api.artic.edu/api/v1/artworks
//! ```
//!
//! Then run: `cargo test -p artworks-lib -- --ignored`

use std::time::Duration;

use artworks_lib::api::{PageRequest, PageSource};
use artworks_lib::config::CatalogConfig;
use artworks_lib::view::{CatalogView, Session, ViewEvent};
use artworks_lib::CatalogClient;

fn live_client() -> CatalogClient {
    let _ = dotenvy::dotenv();

    let config = CatalogConfig::from_env()
        .expect("Invalid ARTWORKS_* environment variables")
        .with_timeout(Duration::from_secs(30));
    CatalogClient::from_config(&config).expect("Failed to build client")
}

#[tokio::test]
#[ignore = "requires network access"]
async fn test_fetch_first_page() {
    let client = live_client();

    let page = client
        .fetch_page(PageRequest::new(1, 12).unwrap())
        .await
        .expect("Fetch failed");

    assert_eq!(page.len(), 12, "A full first page should be returned");
    assert!(page.total_count() > 12, "The catalog should hold more than one page");
    assert!(page.records().iter().all(|record| record.id.get() > 0));

    println!("Catalog holds {} artworks", page.total_count());
}

#[tokio::test]
#[ignore = "requires network access"]
async fn test_session_pages_forward() {
    let mut session = Session::new(live_client(), CatalogView::new(5).unwrap());

    session.dispatch(ViewEvent::Mount).unwrap();
    session.settle().await;
    session
        .dispatch(ViewEvent::TogglePage { selected: true })
        .unwrap();

    session.dispatch(ViewEvent::NextPage).unwrap();
    session.settle().await;

    let props = session.view().table_props();
    assert!(props.error.is_none(), "Second page failed: {:?}", props.error);
    assert_eq!(props.page_index, 2);
    assert!(props.selected.is_empty());
    assert_eq!(session.view().selection().count(), 5);
}
