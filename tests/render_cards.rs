//! End-to-end test: seeded database in, SVG card files out.

use geo::LineString;
use route_card::{ActivityStore, render_card, write_card};
use rusqlite::{Connection, params};
use tempfile::TempDir;

fn encoded_route() -> String {
    let route: LineString<f64> = vec![
        (-122.4194, 37.7749),
        (-122.4180, 37.7760),
        (-122.4155, 37.7772),
        (-122.4140, 37.7790),
    ]
    .into();
    polyline::encode_coordinates(route, 5).unwrap()
}

#[test]
fn renders_one_file_per_complete_record() {
    let tmp = TempDir::new().unwrap();
    let db_path = tmp.path().join("data.db");
    let out_dir = tmp.path().join("out");
    std::fs::create_dir(&out_dir).unwrap();

    let store = ActivityStore::open(Some(&db_path), false).unwrap();
    let conn = Connection::open(&db_path).unwrap();
    let encoded = encoded_route();
    // One complete record, one with a zero distance that must be skipped.
    conn.execute(
        "INSERT INTO activities
         (run_id, distance, moving_time, start_date, summary_polyline, average_speed)
         VALUES (1, 5000.0, '0:30:00', '2024-10-11T07:00:00', ?1, 2.7777)",
        params![encoded],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO activities
         (run_id, distance, moving_time, start_date, summary_polyline, average_speed)
         VALUES (2, 0.0, '0:30:00', '2024-10-12T07:00:00', ?1, 2.7777)",
        params![encoded],
    )
    .unwrap();

    let mut written = Vec::new();
    for activity in store.list().unwrap() {
        if let Some(card) = render_card(&activity).unwrap() {
            written.push(write_card(&card, &out_dir).unwrap());
        }
    }

    assert_eq!(written.len(), 1);
    assert_eq!(
        written[0],
        out_dir.join("20241011_5.0km_30mins.svg")
    );

    let svg = std::fs::read_to_string(&written[0]).unwrap();
    assert!(svg.starts_with("<svg "));
    assert!(svg.ends_with("</svg>\n"));
    assert!(svg.contains("<polyline "));
    assert!(svg.contains("2024-10-11T07:00"));
    // Pretty-printed: elements are on their own indented lines.
    assert!(svg.lines().count() > 4);
    assert!(svg.lines().any(|l| l.starts_with("  <text ")));
}

#[test]
fn rewriting_overwrites_existing_file() {
    let tmp = TempDir::new().unwrap();
    let out_dir = tmp.path().to_path_buf();

    let activity = route_card::Activity {
        id: 7,
        distance: 10000.0,
        moving_time: "0:50:00".to_string(),
        start_date: "2024-11-02T09:15:00".to_string(),
        summary_polyline: encoded_route(),
        average_speed: Some(10000.0 / 3000.0),
    };

    let card = render_card(&activity).unwrap().unwrap();
    let first = write_card(&card, &out_dir).unwrap();
    let second = write_card(&card, &out_dir).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, out_dir.join("20241102_10.0km_50mins.svg"));

    let svg = std::fs::read_to_string(&second).unwrap();
    assert_eq!(svg.matches("<svg ").count(), 1);
}
