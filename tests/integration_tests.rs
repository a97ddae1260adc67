use profile_scrape::*;
use tempfile::TempDir;

const PROFILE_FIXTURE: &str = r#"<html>
    <head>
        <title>Skrape.it</title>
        <link rel="stylesheet" href="/assets/style.css">
    </head>
    <body>
        <div class="h-card">
            <span class="p-nickname">skrapeit</span>
            <img src="/avatars/skrapeit.png" alt="avatar">
        </div>
        <a href="/skrapeit">Overview</a>
        <span class="repo">skrape.it</span>
        <span class="repo">skrape.it-docs</span>
        <span class="repo">ktor-sample</span>
        <div class="pinned-item-list-item">
            <p>A Kotlin-based testing/scraping/parsing library.</p>
            <p>
                <a class="pinned-item-meta Link--muted" href="/skrapeit/skrape.it/stargazers">
                    776 <span>stars</span>
                </a>
            </p>
        </div>
    </body>
</html>"#;

#[test]
fn test_extract_then_export_round_trip() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("test.csv");
    let json_path = dir.path().join("test.json");

    let record = extract_record("OK", PROFILE_FIXTURE);
    write_delimited_file(&csv_path, &record).unwrap();
    write_json_file(&json_path, &record).unwrap();

    // The JSON file reproduces the record field-for-field
    let json = std::fs::read_to_string(&json_path).unwrap();
    let parsed: ExtractedRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, record);

    // The TSV file has one row per scalar field / multi-value element
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    let expected_rows = 6
        + record.repository_name.len()
        + record.first_three_hrefs.len()
        + record.first_three_image_sources.len();
    assert_eq!(lines.len(), expected_rows);
    assert!(csv.ends_with('\n'));
    assert!(lines.iter().all(|line| line.contains('\t')));
}

#[test]
fn test_extraction_is_idempotent() {
    let first = extract_record("OK", PROFILE_FIXTURE);
    let second = extract_record("OK", PROFILE_FIXTURE);
    assert_eq!(first, second);

    let mut first_json = Vec::new();
    let mut second_json = Vec::new();
    write_json(&first, &mut first_json).unwrap();
    write_json(&second, &mut second_json).unwrap();
    assert_eq!(first_json, second_json); // byte-identical output
}

#[test]
fn test_worked_example_without_overview_anchor() {
    // Nickname text "skrapeit", title "Skrape.it", no "Overview" anchor
    let html = r#"<html>
        <head><title>Skrape.it</title></head>
        <body>
            <div class="h-card"><span class="p-nickname">skrapeit</span></div>
            <a href="/skrapeit?tab=repositories">Repositories</a>
        </body>
    </html>"#;

    let record = extract_record("OK", html);
    assert_eq!(record.user_name, "skrapeit");
    assert_eq!(record.title, "Skrape.it");
    assert_eq!(record.overview_link, "not found");
}

#[test]
fn test_list_fields_never_exceed_three() {
    let mut body = String::from("<html><body>");
    for i in 0..10 {
        body.push_str(&format!(r#"<a href="/link{i}">link {i}</a>"#));
        body.push_str(&format!(r#"<img src="/img{i}.png">"#));
    }
    body.push_str("</body></html>");

    let record = extract_record("OK", &body);
    assert_eq!(record.first_three_hrefs.len(), 3);
    assert_eq!(record.first_three_image_sources.len(), 3);
    assert_eq!(
        record.first_three_hrefs,
        vec!["/link0", "/link1", "/link2"]
    );
    assert_eq!(
        record.first_three_image_sources,
        vec!["/img0.png", "/img1.png", "/img2.png"]
    );
}

#[test]
fn test_tsv_repeats_label_per_multi_value_element() {
    let record = extract_record("OK", PROFILE_FIXTURE);
    let mut buffer = Vec::new();
    write_delimited(&record, &mut buffer).unwrap();
    let output = String::from_utf8(buffer).unwrap();

    let repo_rows = output
        .lines()
        .filter(|line| line.starts_with("Repository Name\t"))
        .count();
    assert_eq!(repo_rows, record.repository_name.len());
}
