use super::*;

const SEARCH_BODY: &str = r#"{
    "Search": [
        {"Title": "Horrible Bosses", "Year": "2011", "imdbID": "tt1499658", "Type": "movie", "Poster": "N/A"},
        {"Title": "Horrible Bosses 2", "Year": "2014", "imdbID": "tt2170439", "Type": "movie", "Poster": "N/A"},
        {"Title": "Horrible Histories", "Year": "2009–2014", "imdbID": "tt1524525", "Type": "series", "Poster": "N/A"}
    ],
    "totalResults": "3",
    "Response": "True"
}"#;

const DETAIL_FULL_BODY: &str = r#"{
    "Title": "Horrible Bosses",
    "Year": "2011",
    "Plot": "Three friends conspire to murder their awful bosses when they realize they are standing in the way of their happiness. A longer text.",
    "Poster": "https://m.media-amazon.com/images/M/MV5BNzYxNDI5Njc5NF5BMl5BanBnXkFtZTcwMDUxODE1NQ@@._V1_SX300.jpg",
    "imdbRating": "6.9",
    "imdbID": "tt1499658",
    "Response": "True"
}"#;

const DETAIL_SHORT_BODY: &str = r#"{
    "Title": "Horrible Bosses",
    "Plot": "Three friends conspire to murder their awful bosses.",
    "Poster": "N/A",
    "imdbRating": "6.9",
    "Response": "True"
}"#;

#[test]
fn parses_search_results_in_order() {
    let resp: SearchResponse = serde_json::from_str(SEARCH_BODY).unwrap();
    assert!(resp.is_success());
    let hits: Vec<SearchHit> = resp.search.iter().map(SearchItem::to_hit).collect();
    assert_eq!(hits.len(), 3);
    assert_eq!(hits[0].id, "tt1499658");
    assert_eq!(hits[0].year, Some(2011));
    assert_eq!(hits[0].title.as_deref(), Some("Horrible Bosses"));
    assert_eq!(hits[1].year, Some(2014));
    // Year ranges use the start year
    assert_eq!(hits[2].year, Some(2009));
}

#[test]
fn not_found_search_has_no_results() {
    let resp: SearchResponse =
        serde_json::from_str(r#"{"Response":"False","Error":"Movie not found!"}"#).unwrap();
    assert!(!resp.is_success());
    assert!(resp.search.is_empty());
    assert_eq!(resp.error.as_deref(), Some(NOT_FOUND));
}

#[test]
fn unparseable_year_is_none() {
    let item = SearchItem {
        title: None,
        year: Some("N/A".to_string()),
        imdb_id: "tt0".to_string(),
    };
    assert_eq!(item.start_year(), None);

    let item = SearchItem {
        year: Some("201".to_string()),
        ..item
    };
    assert_eq!(item.start_year(), None);
}

#[test]
fn merges_full_and_short_plot() {
    let full: DetailResponse = serde_json::from_str(DETAIL_FULL_BODY).unwrap();
    let short: DetailResponse = serde_json::from_str(DETAIL_SHORT_BODY).unwrap();
    assert!(full.is_success());

    let details = full.into_details(Some(short));
    assert_eq!(details.title.as_deref(), Some("Horrible Bosses"));
    assert_eq!(
        details.plot_outline.as_deref(),
        Some("Three friends conspire to murder their awful bosses.")
    );
    assert_eq!(details.plot.len(), 1);
    assert!(details.plot[0].ends_with("A longer text."));
    assert_eq!(details.rating, Some(6.9));
    assert_eq!(
        details.cover_url.as_deref(),
        Some("https://m.media-amazon.com/images/M/MV5BNzYxNDI5Njc5NF5BMl5BanBnXkFtZTcwMDUxODE1NQ@@._V1_SX300.jpg")
    );
    assert_eq!(
        details.full_size_cover_url.as_deref(),
        Some("https://m.media-amazon.com/images/M/MV5BNzYxNDI5Njc5NF5BMl5BanBnXkFtZTcwMDUxODE1NQ@@.jpg")
    );
}

#[test]
fn not_available_values_are_dropped() {
    let resp: DetailResponse = serde_json::from_str(
        r#"{"Title":"Obscure","Plot":"N/A","Poster":"N/A","imdbRating":"N/A","Response":"True"}"#,
    )
    .unwrap();
    let details = resp.into_details(None);
    assert_eq!(details.title.as_deref(), Some("Obscure"));
    assert!(details.plot.is_empty());
    assert_eq!(details.plot_outline, None);
    assert_eq!(details.cover_url, None);
    assert_eq!(details.full_size_cover_url, None);
    assert_eq!(details.rating, None);
}

#[test]
fn full_size_cover_without_modifiers() {
    assert_eq!(full_size_cover("https://example.com/poster.jpg"), None);
    assert_eq!(
        full_size_cover("https://example.com/p@._V1_UX182_CR0,0,182,268_AL_.jpg").as_deref(),
        Some("https://example.com/p@.jpg")
    );
}
