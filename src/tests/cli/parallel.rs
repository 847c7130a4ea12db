// Project scan tests: discovery, role classification and the full report

use crate::cli::parallel::{ExtractionConfig, ProjectExtractor, is_test_file};
use crate::config::ScanSettings;
use crate::error::ExtractError;
use crate::extractors::base::ActionKind;
use crate::tests::helpers::{TestProject, samples};
use std::path::Path;

fn extractor(threads: usize) -> ProjectExtractor {
    let config = ExtractionConfig {
        num_threads: threads,
        config_file: None,
    };
    ProjectExtractor::new(config, ScanSettings::default())
}

fn shop_project(name: &str) -> TestProject {
    let project = TestProject::new(name);
    project
        .file("src/main/java/com/shop/pages/LoginPage.java", samples::LOGIN_PAGE)
        .file("src/main/java/com/shop/pages/SearchPage.java", samples::SEARCH_PAGE)
        .file("src/test/java/com/shop/LoginTest.java", samples::LOGIN_TEST)
        .file("src/test/java/com/shop/CheckoutScenarios.java", samples::DATA_DRIVEN_TEST)
        .file("config.properties", samples::CONFIG_PROPERTIES);
    project
}

#[test]
fn test_is_test_file_conventions() {
    assert!(is_test_file(Path::new("src/test/java/Login.java")));
    assert!(is_test_file(Path::new("it/tests/Flow.java")));
    assert!(is_test_file(Path::new("src/main/java/TestData.java")));
    assert!(is_test_file(Path::new("src/main/java/LoginTest.java")));
    assert!(is_test_file(Path::new("src/main/java/LoginTests.java")));
    assert!(!is_test_file(Path::new("src/main/java/pages/LoginPage.java")));
    assert!(!is_test_file(Path::new("src/main/java/Contest.java")));
}

#[test]
fn test_discovery_is_sorted_and_skips_ignored_files() {
    let project = shop_project("discovery");
    project
        .file("target/generated/GhostTest.java", samples::LOGIN_TEST)
        .file("src/test/resources/notes.txt", "not java");

    let files = extractor(2).discover_files(project.root()).unwrap();
    let relative: Vec<String> = files
        .iter()
        .map(|f| f.strip_prefix(project.root()).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();

    assert_eq!(
        relative,
        vec![
            "src/main/java/com/shop/pages/LoginPage.java",
            "src/main/java/com/shop/pages/SearchPage.java",
            "src/test/java/com/shop/CheckoutScenarios.java",
            "src/test/java/com/shop/LoginTest.java",
        ]
    );
}

#[test]
fn test_oversized_files_are_skipped() {
    let project = shop_project("oversized");
    let settings = ScanSettings {
        max_file_size: 64,
        ..ScanSettings::default()
    };
    let extractor = ProjectExtractor::new(ExtractionConfig::default(), settings);

    let files = extractor.discover_files(project.root()).unwrap();
    assert!(files.is_empty());
}

#[test]
fn test_roles_come_from_path_below_root() {
    // the project itself lives under a "tests" directory
    let project = TestProject::new("roles");
    project.file("tests/app/src/main/java/pages/HomePage.java", samples::SEARCH_PAGE);
    let root = project.path("tests/app");
    let path = root.join("src/main/java/pages/HomePage.java");

    let parsed = extractor(1).parse_unit(&root, &path).unwrap();
    assert!(parsed.is_page_object);
    assert!(!parsed.is_test);
}

#[test]
fn test_page_object_by_content_outside_pages_dir() {
    let project = TestProject::new("content_role");
    project.file("src/main/java/com/shop/Login.java", samples::LOGIN_PAGE);
    let path = project.path("src/main/java/com/shop/Login.java");

    let parsed = extractor(1).parse_unit(project.root(), &path).unwrap();
    assert!(parsed.is_page_object);
    assert_eq!(parsed.unit.class_name(), Some("LoginPage"));
}

#[test]
fn test_full_project_report() {
    let project = shop_project("full_report");
    let report = extractor(4).extract_project(project.root()).unwrap();

    let pages: Vec<&str> = report.page_objects.keys().map(String::as_str).collect();
    assert_eq!(pages, vec!["LoginPage", "SearchPage"]);
    assert_eq!(
        report.page_objects["SearchPage"].elements.get("searchBox"),
        Some("By.id(\"search\")")
    );

    let urls: Vec<&str> = report.config_urls.keys().collect();
    assert_eq!(urls, vec!["baseUrl", "loginUrl", "searchLink"]);

    let names: Vec<&str> = report.test_cases.iter().map(|c| c.test_name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "testLoginFlow", "testSearchProduct"]);

    let login = &report.test_cases[2];
    assert_eq!(login.test_url.as_deref(), Some("https://shop.test/login"));
    assert_eq!(login.steps[2].action_type, ActionKind::Click);
    assert_eq!(
        login.steps[2].element_selector.as_deref(),
        Some("By.css(\"button.login\")")
    );

    assert_eq!(report.summary.total_test_cases, 4);
    assert_eq!(report.summary.total_page_objects, 2);
    assert_eq!(report.summary.total_config_urls, 3);
}

#[test]
fn test_report_is_deterministic_across_thread_counts() {
    let project = shop_project("deterministic");

    let single = extractor(1).extract_project(project.root()).unwrap();
    let many = extractor(8).extract_project(project.root()).unwrap();

    assert_eq!(single, many);
    assert_eq!(single.to_json().unwrap(), many.to_json().unwrap());
}

#[test]
fn test_missing_config_still_produces_report() {
    let project = TestProject::new("no_config");
    project.file("src/test/java/LoginTest.java", samples::LOGIN_TEST);

    let report = extractor(2).extract_project(project.root()).unwrap();
    assert!(report.config_urls.is_empty());
    assert_eq!(report.test_cases.len(), 2);
    assert!(report.test_cases.iter().all(|c| c.test_url.is_none()));
}

#[test]
fn test_explicit_config_file_overrides_discovery() {
    let project = shop_project("explicit_config");
    project.file("env/staging.properties", "loginUrl=https://staging.test/login\n");

    let config = ExtractionConfig {
        num_threads: 2,
        config_file: Some("env/staging.properties".into()),
    };
    let report = ProjectExtractor::new(config, ScanSettings::default())
        .extract_project(project.root())
        .unwrap();

    assert_eq!(report.config_urls.len(), 1);
    let login = report
        .test_cases
        .iter()
        .find(|c| c.test_name == "testLoginFlow")
        .unwrap();
    assert_eq!(login.test_url.as_deref(), Some("https://staging.test/login"));
}

#[test]
fn test_non_directory_project_is_an_error() {
    let project = TestProject::new("not_a_dir");
    project.file("Only.java", "class Only {}");

    assert!(extractor(1).extract_project(&project.path("Only.java")).is_err());
    assert!(extractor(1).extract_project(&project.path("missing")).is_err());
}

#[test]
fn test_unreadable_unit_is_skipped_and_scan_continues() {
    let project = TestProject::new("unreadable_unit");
    project.file("src/test/java/LoginTest.java", samples::LOGIN_TEST);
    std::fs::write(
        project.path("src/test/java/BadTest.java"),
        b"\xff\xfepublic class BadTest {}",
    )
    .unwrap();

    let report = extractor(2).extract_project(project.root()).unwrap();

    let classes: Vec<&str> = report.test_cases.iter().map(|c| c.class_name.as_str()).collect();
    assert_eq!(classes, vec!["LoginTest", "LoginTest"]);
    assert_eq!(report.summary.total_test_cases, 2);
}

#[test]
fn test_read_failure_keeps_the_underlying_cause() {
    let project = TestProject::new("read_failure_cause");
    let path = project.path("BadTest.java");
    std::fs::write(&path, b"\xff\xfe").unwrap();

    let err = extractor(1).parse_unit(project.root(), &path).unwrap_err();
    match &err {
        ExtractError::UnitParse { reason, .. } => {
            assert!(reason.starts_with("Failed to read"), "{}", reason);
            assert!(reason.contains("UTF-8"), "{}", reason);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(!err.is_fatal());
}
