// ABOUTME: Integration tests for extracting MovieRecords from source page fixtures.
// ABOUTME: Covers empty defaults, year, cast truncation, trailer ids, posters and custom tables.

use pretty_assertions::assert_eq;
use reelcopy_scout::{load_table_str, Extractor, MovieRecord};

const URL: &str = "http://127.0.0.1:5000/movie/27205";

fn extract(html: &str) -> MovieRecord {
    Extractor::default().extract_html(URL, html).unwrap()
}

#[test]
fn inception_scenario() {
    let record = extract(
        r#"<html><body>
            <h1>Inception</h1>
            <div class="year">2010</div>
            <div class="director">Christopher Nolan</div>
        </body></html>"#,
    );
    assert_eq!(
        record,
        MovieRecord {
            title: "Inception".to_string(),
            year: "2010".to_string(),
            director: "Christopher Nolan".to_string(),
            ..Default::default()
        }
    );
    assert_eq!(record.genres, "");
    assert_eq!(record.cast, "");
}

#[test]
fn missing_nodes_give_empty_defaults() {
    let record = extract("<html><body><p>Nothing here</p></body></html>");
    assert_eq!(record, MovieRecord::default());
    assert!(record.streaming_providers.is_empty());
}

#[test]
fn year_is_first_four_digit_run() {
    let record = extract(r#"<span class="release-year">2017-03-01</span>"#);
    assert_eq!(record.year, "2017");

    let record = extract(r#"<span class="year">Coming soon</span>"#);
    assert_eq!(record.year, "");
}

#[test]
fn cast_is_truncated_to_three() {
    let record = extract(
        r#"<div class="cast">
            <span class="actor">A One</span>
            <span class="actor">B Two</span>
            <span class="actor">C Three</span>
            <span class="actor">D Four</span>
            <span class="actor">E Five</span>
        </div>"#,
    );
    assert_eq!(record.cast, "A One, B Two, C Three");
}

#[test]
fn genres_are_not_truncated() {
    let record = extract(
        r#"<span class="genre-tag">Drama</span>
           <span class="genre-tag">Crime</span>
           <span class="genre-tag">Thriller</span>
           <span class="genre-tag">Mystery</span>"#,
    );
    assert_eq!(record.genres, "Drama, Crime, Thriller, Mystery");
}

#[test]
fn trailer_id_from_href() {
    let record = extract(
        r#"<a class="trailer" href="https://youtube.com/watch?v=abc123&t=10">Trailer</a>"#,
    );
    assert_eq!(record.trailer_id, "abc123");

    let record = extract(r#"<a class="trailer" href="https://youtube.com/embed/abc123">Trailer</a>"#);
    assert_eq!(record.trailer_id, "");
}

#[test]
fn trailer_id_from_text_when_no_href() {
    let record = extract(
        r#"<div class="youtube-trailer">https://www.youtube.com/watch?v=zSWdZVtXT7E</div>"#,
    );
    assert_eq!(record.trailer_id, "zSWdZVtXT7E");
}

#[test]
fn poster_src_is_resolved_against_page() {
    let record = extract(r#"<div class="poster"><img src="/static/p/27205.jpg"></div>"#);
    assert_eq!(record.poster_url, "http://127.0.0.1:5000/static/p/27205.jpg");
}

#[test]
fn streaming_providers_keep_order_and_duplicates() {
    let record = extract(
        r#"<ul>
            <li class="streaming-provider">Netflix</li>
            <li class="streaming-provider">Prime Video</li>
            <li class="streaming-provider">Netflix</li>
        </ul>"#,
    );
    assert_eq!(
        record.streaming_providers,
        vec!["Netflix", "Prime Video", "Netflix"]
    );
}

#[test]
fn full_detail_page() {
    let record = extract(
        r#"<html><body>
            <div class="movie-poster"><img src="https://image.tmdb.org/t/p/w500/qmDpIHrmpJINaRKAfWQfftjCdyi.jpg"></div>
            <div class="movie-title"><h1>Inception</h1></div>
            <div class="original-title"><span>Inception</span></div>
            <div class="year">Release: 2010-07-15</div>
            <div class="director"><span>Christopher Nolan</span></div>
            <div class="genres"><span class="genre">Action</span><span class="genre">Science Fiction</span></div>
            <div class="cast">
                <div class="actor">Leonardo DiCaprio</div>
                <div class="actor">Joseph Gordon-Levitt</div>
                <div class="actor">Elliot Page</div>
                <div class="actor">Tom Hardy</div>
            </div>
            <a class="trailer" href="https://www.youtube.com/watch?v=YoHD9XEInc0">Trailer</a>
            <span class="tmdb-id">27205</span>
            <div class="provider">Netflix</div>
        </body></html>"#,
    );
    assert_eq!(
        record,
        MovieRecord {
            title: "Inception".to_string(),
            original_title: "Inception".to_string(),
            year: "2010".to_string(),
            director: "Christopher Nolan".to_string(),
            genres: "Action, Science Fiction".to_string(),
            cast: "Leonardo DiCaprio, Joseph Gordon-Levitt, Elliot Page".to_string(),
            trailer_id: "YoHD9XEInc0".to_string(),
            tmdb_id: "27205".to_string(),
            poster_url: "https://image.tmdb.org/t/p/w500/qmDpIHrmpJINaRKAfWQfftjCdyi.jpg"
                .to_string(),
            streaming_providers: vec!["Netflix".to_string()],
        }
    );
}

#[test]
fn unrecognized_page_is_an_error() {
    let err = Extractor::default()
        .extract_html("https://www.themoviedb.org/movie/27205", "<h1>Inception</h1>")
        .unwrap_err();
    assert!(err.is_unrecognized_page());
}

#[test]
fn custom_table_replaces_builtin_rules() {
    let table = load_table_str(
        r#"{
            "title": { "selectors": ["h2.headline"] },
            "year": { "selectors": [["time", "datetime"]], "transform": { "type": "year" } }
        }"#,
    )
    .unwrap();
    let extractor = Extractor::builder().table(table).build();
    let record = extractor
        .extract_html(
            URL,
            r#"<h1>Ignored</h1><h2 class="headline">Heat</h2><time datetime="1995-12-15">Dec</time>"#,
        )
        .unwrap();
    assert_eq!(record.title, "Heat");
    assert_eq!(record.year, "1995");
    assert_eq!(record.director, "");
}

#[test]
fn year_reads_only_the_first_year_element() {
    let record = extract(r#"<div class="year">TBA</div><div class="year">2010</div>"#);
    assert_eq!(record.year, "");
}

#[test]
fn trailer_without_v_does_not_try_later_selectors() {
    let record = extract(
        r#"<a class="trailer" href="https://www.youtube.com/embed/x">Trailer</a>
           <a class="youtube-trailer" href="https://www.youtube.com/watch?v=abc">Trailer</a>"#,
    );
    assert_eq!(record.trailer_id, "");
}

#[test]
fn cast_limit_applies_before_blank_entries_are_dropped() {
    let record = extract(
        r#"<div class="cast">
            <span class="actor">A</span>
            <span class="actor"></span>
            <span class="actor">C</span>
            <span class="actor">D</span>
            <span class="actor">E</span>
        </div>"#,
    );
    assert_eq!(record.cast, "A, C");
}

#[test]
fn text_values_are_trimmed_only() {
    let record = extract(r#"<h1>  Crouching  Tiger,
        Hidden Dragon </h1>"#);
    assert_eq!(record.title, "Crouching  Tiger,\n        Hidden Dragon");
}
