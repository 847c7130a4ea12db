// Method bodies: statements, nested calls, switches and comments

use super::method;
use crate::tests::helpers::{parse, samples};

#[test]
fn test_statements_keep_calls_in_preorder() {
    let code = r#"
public class FlowTest {
    @Test
    public void nested() {
        driver.findElement(By.id("go")).click();
        String title = page.getTitle();
    }
}
"#;
    let unit = parse("FlowTest.java", code);
    let nested = method(&unit, "nested");

    assert_eq!(nested.statements.len(), 2);
    let names: Vec<&str> = nested.statements[0]
        .calls
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["click", "findElement", "id"]);

    let click = &nested.statements[0].calls[0];
    assert_eq!(click.receiver.as_deref(), Some("driver.findElement(By.id(\"go\"))"));
    assert_eq!(click.text, "driver.findElement(By.id(\"go\")).click()");

    let get_title = &nested.statements[1].calls[0];
    assert_eq!(get_title.name, "getTitle");
    assert_eq!(get_title.receiver.as_deref(), Some("page"));
}

#[test]
fn test_call_arguments_are_raw_texts() {
    let unit = parse("LoginTest.java", samples::LOGIN_TEST);
    let search = method(&unit, "testSearchProduct");

    let assert_call = search.statements[2].calls.first().unwrap();
    assert_eq!(assert_call.name, "assertEquals");
    assert_eq!(assert_call.receiver, None);
    assert_eq!(
        assert_call.arguments,
        vec!["searchPage.getResultTitle()".to_string(), "\"Laptop\"".to_string()]
    );
}

#[test]
fn test_classic_switch_labels() {
    let unit = parse("CheckoutScenarios.java", samples::DATA_DRIVEN_TEST);
    let run = method(&unit, "runScenario");

    assert!(run.is_data_driven());
    assert_eq!(run.dispatches.len(), 1);
    assert_eq!(run.dispatches[0].labels, vec!["A", "B", "default"]);
    assert!(!method(&unit, "A").is_data_driven());
}

#[test]
fn test_arrow_switch_labels() {
    let code = r#"
public class Scenarios {
    @Test
    void run(String name) {
        switch (name) {
            case "guest", "member" -> guest();
            default -> {}
        }
    }
}
"#;
    let unit = parse("Scenarios.java", code);
    assert_eq!(
        method(&unit, "run").dispatches[0].labels,
        vec!["guest", "member", "default"]
    );
}

#[test]
fn test_javadoc_and_line_comments() {
    let unit = parse("LoginTest.java", samples::LOGIN_TEST);

    let flow = method(&unit, "testLoginFlow");
    assert_eq!(flow.doc_comment.as_deref(), Some("Logs in with a valid account."));

    let search = method(&unit, "testSearchProduct");
    assert_eq!(search.doc_comment, None);
    assert_eq!(search.line_comments, vec!["test case: search for a laptop"]);
}

#[test]
fn test_body_comments_follow_preceding_ones() {
    let code = r#"
public class CommentTest {
    // first
    @Test
    void commented() {
        // Test Case 7: inside
        page.open();
    }
}
"#;
    let unit = parse("CommentTest.java", code);
    let commented = method(&unit, "commented");

    assert_eq!(commented.line_comments, vec!["first", "Test Case 7: inside"]);
    assert_eq!(commented.statements.len(), 1);
}

#[test]
fn test_broken_source_still_yields_a_unit() {
    let code = "public class Broken {\n    @Test\n    void half() {\n        page.open(;\n    }\n";
    let unit = parse("Broken.java", code);
    assert_eq!(unit.file_stem, "Broken");
    assert_eq!(unit.file_path, "Broken.java");
}
