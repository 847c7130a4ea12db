// Classes, fields and annotations

use crate::extractors::syntax::{Annotated, AnnotationArguments, Visibility};
use crate::tests::helpers::{parse, samples};

#[test]
fn test_primary_class_matches_file_stem() {
    let code = r#"
interface Named { String name(); }
class Helper {}
public class CartPage {
    static class Inner {}
}
"#;
    let unit = parse("src/pages/CartPage.java", code);

    assert_eq!(unit.file_stem, "CartPage");
    assert_eq!(unit.class_name(), Some("CartPage"));

    let inner = unit.classes.iter().find(|c| c.name == "Inner").unwrap();
    assert!(!inner.is_top_level);
}

#[test]
fn test_class_name_falls_back_to_first_non_interface() {
    let code = "interface Named {}\nclass First {}\nclass Second {}\n";
    let unit = parse("Whatever.java", code);
    assert_eq!(unit.class_name(), Some("First"));

    let empty = parse("Empty.java", "package a.b;\n");
    assert_eq!(empty.class_name(), None);
}

#[test]
fn test_field_annotations_and_variables() {
    let unit = parse("LoginPage.java", samples::LOGIN_PAGE);

    assert_eq!(unit.fields.len(), 4);
    let username = &unit.fields[0];
    assert_eq!(username.type_name, "WebElement");
    assert_eq!(username.variables, vec![("usernameField".to_string(), None)]);
    assert!(username.has_marker("FindBy"));

    let find_by = username.marker("FindBy").unwrap();
    assert_eq!(find_by.pair("id"), Some("\"username\""));
    assert_eq!(find_by.text, "@FindBy(id = \"username\")");
    assert!(unit.mentions_page_factory);
}

#[test]
fn test_single_value_and_qualified_annotations() {
    let code = r##"
public class Widgets {
    @org.openqa.selenium.support.FindBy("#menu")
    WebElement menu, footer;
}
"##;
    let unit = parse("Widgets.java", code);
    let field = &unit.fields[0];

    assert_eq!(field.annotations[0].name, "FindBy");
    assert_eq!(
        field.annotations[0].arguments,
        AnnotationArguments::Single("\"#menu\"".to_string())
    );
    let names: Vec<&str> = field.variables.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["menu", "footer"]);
}

#[test]
fn test_by_field_initializer_is_kept() {
    let unit = parse("SearchPage.java", samples::SEARCH_PAGE);
    let search_box = &unit.fields[0];

    assert_eq!(search_box.type_name, "By");
    assert_eq!(
        search_box.variables[0],
        ("searchBox".to_string(), Some("By.id(\"search\")".to_string()))
    );
}

#[test]
fn test_method_visibility_and_markers() {
    let unit = parse("LoginTest.java", samples::LOGIN_TEST);

    let flow = super::method(&unit, "testLoginFlow");
    assert_eq!(flow.visibility, Visibility::Public);
    assert!(flow.has_marker("Test"));

    let search = super::method(&unit, "testSearchProduct");
    assert_eq!(search.visibility, Visibility::Package);

    let helper = super::method(&unit, "helperNotATest");
    assert!(helper.annotations.is_empty());
}
