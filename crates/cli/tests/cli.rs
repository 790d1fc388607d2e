// ABOUTME: Integration tests for the reelcopy CLI binary.
// ABOUTME: Covers extraction from files and HTTP, copy formats, form filling and the message protocol.

use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SOURCE_URL: &str = "http://127.0.0.1:5000/movie/27205";
const ADMIN_URL: &str = "https://blog.example.com/wp-admin/post-new.php";

const MOVIE_PAGE: &str = r#"<html><body>
<div class="movie-title"><h1>Inception</h1></div>
<div class="year">2010</div>
<div class="director">Christopher Nolan</div>
<div class="genres"><span class="genre">Action</span><span class="genre">Sci-Fi</span></div>
<a class="trailer" href="https://www.youtube.com/watch?v=YoHD9XEInc0">Trailer</a>
</body></html>"#;

const ADMIN_PAGE: &str = r#"<html><head></head><body>
<input type="text" name="post_title">
<input type="text" id="release_year">
</body></html>"#;

const MOVIE_JSON: &str = r#"{"title":"Inception","year":"2010","director":"Christopher Nolan"}"#;

fn reelcopy() -> Command {
    Command::cargo_bin("reelcopy").unwrap()
}

#[test]
fn extract_from_file() {
    let dir = TempDir::new().unwrap();
    let page = dir.path().join("movie.html");
    fs::write(&page, MOVIE_PAGE).unwrap();

    reelcopy()
        .arg("extract")
        .arg(&page)
        .arg("--url")
        .arg(SOURCE_URL)
        .arg("--compact")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""success":true"#))
        .stdout(predicate::str::contains(r#""title":"Inception""#))
        .stdout(predicate::str::contains(r#""trailer_id":"YoHD9XEInc0""#));
}

#[test]
fn extract_unrecognized_page_fails() {
    let dir = TempDir::new().unwrap();
    let page = dir.path().join("movie.html");
    fs::write(&page, MOVIE_PAGE).unwrap();

    reelcopy()
        .arg("extract")
        .arg(&page)
        .arg("--url")
        .arg("https://www.example.com/")
        .assert()
        .failure()
        .stdout(predicate::str::contains(r#""success": false"#));
}

#[test]
fn extract_over_http() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/movie/27205");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(MOVIE_PAGE);
    });

    reelcopy()
        .arg("extract")
        .arg(server.url("/movie/27205"))
        .arg("--source-pattern")
        .arg("127.0.0.1")
        .arg("--compact")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""director":"Christopher Nolan""#));

    mock.assert();
}

#[test]
fn copy_excerpt_from_stdin() {
    reelcopy()
        .arg("copy")
        .arg("-")
        .arg("--url")
        .arg(SOURCE_URL)
        .arg("--format")
        .arg("excerpt")
        .write_stdin(MOVIE_PAGE)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Inception (2010)"));
}

#[test]
fn copy_rejects_unknown_format() {
    reelcopy()
        .arg("copy")
        .arg("-")
        .arg("--format")
        .arg("poem")
        .write_stdin(MOVIE_PAGE)
        .assert()
        .failure();
}

#[test]
fn fill_writes_form_and_remembers_mapping() {
    let dir = TempDir::new().unwrap();
    let page = dir.path().join("admin.html");
    let movie = dir.path().join("movie.json");
    let store = dir.path().join("storage.json");
    let out = dir.path().join("out.html");
    fs::write(&page, ADMIN_PAGE).unwrap();
    fs::write(&movie, MOVIE_JSON).unwrap();

    reelcopy()
        .arg("fill")
        .arg("--page")
        .arg(&page)
        .arg("--url")
        .arg(ADMIN_URL)
        .arg("--movie")
        .arg(&movie)
        .arg("--map")
        .arg("title=post_title")
        .arg("--map")
        .arg("year=release_year")
        .arg("--store")
        .arg(&store)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("filled: title, year"));

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains(r#"value="Inception""#));
    assert!(html.contains(r#"value="2010""#));
    assert!(!html.contains("movie-mapping-modal\""));
    assert!(fs::read_to_string(&store).unwrap().contains("movie_mapping"));

    // second run without --map reuses the stored mapping
    let out2 = dir.path().join("out2.html");
    reelcopy()
        .arg("fill")
        .arg("--page")
        .arg(&page)
        .arg("--url")
        .arg(ADMIN_URL)
        .arg("--movie")
        .arg(&movie)
        .arg("--store")
        .arg(&store)
        .arg("-o")
        .arg(&out2)
        .assert()
        .success();
    assert!(fs::read_to_string(&out2).unwrap().contains(r#"value="Inception""#));
}

#[test]
fn fill_rejects_bad_choice() {
    let dir = TempDir::new().unwrap();
    let page = dir.path().join("admin.html");
    let movie = dir.path().join("movie.json");
    fs::write(&page, ADMIN_PAGE).unwrap();
    fs::write(&movie, MOVIE_JSON).unwrap();

    reelcopy()
        .arg("fill")
        .arg("--page")
        .arg(&page)
        .arg("--url")
        .arg(ADMIN_URL)
        .arg("--movie")
        .arg(&movie)
        .arg("--map")
        .arg("title=no_such_field")
        .arg("--store")
        .arg(dir.path().join("storage.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown destination field"));
}

#[test]
fn message_setup_mapping_on_admin_page() {
    let dir = TempDir::new().unwrap();
    let page = dir.path().join("admin.html");
    let out = dir.path().join("out.html");
    fs::write(&page, ADMIN_PAGE).unwrap();

    reelcopy()
        .arg("message")
        .arg("--page")
        .arg(&page)
        .arg("--url")
        .arg(ADMIN_URL)
        .arg("--store")
        .arg(dir.path().join("storage.json"))
        .arg("-o")
        .arg(&out)
        .write_stdin(format!(
            r#"{{"action":"setupMapping","movieData":{}}}"#,
            MOVIE_JSON
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"success":true}"#));

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains(r#"id="movie-mapping-modal""#));
    assert!(html.contains(r#"id="map-title""#));
}

#[test]
fn message_rejects_unknown_action() {
    let dir = TempDir::new().unwrap();
    let page = dir.path().join("admin.html");
    fs::write(&page, ADMIN_PAGE).unwrap();

    reelcopy()
        .arg("message")
        .arg("--page")
        .arg(&page)
        .arg("--url")
        .arg(ADMIN_URL)
        .arg("--store")
        .arg(dir.path().join("storage.json"))
        .write_stdin(r#"{"action":"selfDestruct"}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid request"));
}
